use crate::constants::*;
use crate::effect::{falloff, Effect};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use web_sys as web;

pub struct LinkNode {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Constellation: nodes wander and bounce off the edges, pairs closer than
/// `LINK_DISTANCE` are joined by a distance-faded line, and nodes steer away
/// from the pointer inside `LINK_AVOID_RADIUS`.
pub struct Links {
    pub nodes: Vec<LinkNode>,
    rng: StdRng,
}

impl Links {
    pub fn new(seed: u64) -> Self {
        Self {
            nodes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn step(&mut self, size: Vec2, pointer: Vec2, dt_sec: f32) {
        for n in &mut self.nodes {
            let from_pointer = n.pos - pointer;
            let dist = from_pointer.length();
            if dist < LINK_AVOID_RADIUS && dist > f32::EPSILON {
                let push = falloff(dist, LINK_AVOID_RADIUS) * LINK_AVOID_GAIN;
                n.vel += from_pointer / dist * push * dt_sec;
                let speed = n.vel.length();
                if speed > LINK_SPEED_CAP {
                    n.vel *= LINK_SPEED_CAP / speed;
                }
            }
            n.pos += n.vel * dt_sec;
            bounce(n, size);
        }
    }

    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        ctx.set_stroke_style_str(LINK_STROKE);
        ctx.set_line_width(LINK_LINE_WIDTH);
        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                let dist = (a.pos - b.pos).length();
                if dist >= LINK_DISTANCE {
                    continue;
                }
                ctx.set_global_alpha((falloff(dist, LINK_DISTANCE) * LINK_LINE_ALPHA) as f64);
                ctx.begin_path();
                ctx.move_to(a.pos.x as f64, a.pos.y as f64);
                ctx.line_to(b.pos.x as f64, b.pos.y as f64);
                ctx.stroke();
            }
        }
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(LINK_FILL);
        for n in &self.nodes {
            ctx.begin_path();
            _ = ctx.arc(
                n.pos.x as f64,
                n.pos.y as f64,
                LINK_DOT_RADIUS as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }
}

fn bounce(n: &mut LinkNode, size: Vec2) {
    if n.pos.x < 0.0 {
        n.pos.x = -n.pos.x;
        n.vel.x = n.vel.x.abs();
    } else if n.pos.x > size.x {
        n.pos.x = 2.0 * size.x - n.pos.x;
        n.vel.x = -n.vel.x.abs();
    }
    if n.pos.y < 0.0 {
        n.pos.y = -n.pos.y;
        n.vel.y = n.vel.y.abs();
    } else if n.pos.y > size.y {
        n.pos.y = 2.0 * size.y - n.pos.y;
        n.vel.y = -n.vel.y.abs();
    }
}

impl Effect for Links {
    fn setup(&mut self, size: Vec2) {
        self.nodes = (0..LINK_COUNT)
            .map(|_| {
                let heading = self.rng.gen_range(0.0..TAU);
                let speed = self.rng.gen_range(LINK_SPEED_MIN..LINK_SPEED_MAX);
                LinkNode {
                    pos: Vec2::new(
                        self.rng.gen_range(0.0..size.x),
                        self.rng.gen_range(0.0..size.y),
                    ),
                    vel: Vec2::from_angle(heading) * speed,
                }
            })
            .collect();
    }

    fn frame(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        size: Vec2,
        pointer: Vec2,
        dt_sec: f32,
    ) {
        self.step(size, pointer, dt_sec);
        self.paint(ctx);
    }
}
