use crate::constants::*;
use crate::effect::{falloff, Effect};
use glam::Vec2;
use rand::prelude::*;
use web_sys as web;

pub struct Mote {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Hero field: soft motes drifting with wrap-around, drawn toward the
/// pointer inside `DRIFT_PULL_RADIUS`.
pub struct Drift {
    pub motes: Vec<Mote>,
    rng: StdRng,
}

impl Drift {
    pub fn new(seed: u64) -> Self {
        Self {
            motes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Simulation step, separated from painting.
    pub fn step(&mut self, size: Vec2, pointer: Vec2, dt_sec: f32) {
        for m in &mut self.motes {
            let to_pointer = pointer - m.pos;
            let dist = to_pointer.length();
            if dist < DRIFT_PULL_RADIUS && dist > f32::EPSILON {
                let pull = falloff(dist, DRIFT_PULL_RADIUS) * DRIFT_PULL_GAIN;
                m.vel += to_pointer / dist * pull * dt_sec;
                // damping only while captured, so base drift never dies out
                m.vel *= 1.0 - DRIFT_DAMPING_PER_SEC * dt_sec;
            }
            m.pos += m.vel * dt_sec;
            wrap(&mut m.pos, size);
        }
    }

    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        ctx.set_fill_style_str(DRIFT_FILL);
        for m in &self.motes {
            ctx.set_global_alpha(m.alpha as f64);
            ctx.begin_path();
            _ = ctx.arc(
                m.pos.x as f64,
                m.pos.y as f64,
                m.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }
}

fn wrap(pos: &mut Vec2, size: Vec2) {
    let m = DRIFT_WRAP_MARGIN;
    if pos.x < -m {
        pos.x = size.x + m;
    } else if pos.x > size.x + m {
        pos.x = -m;
    }
    if pos.y < -m {
        pos.y = size.y + m;
    } else if pos.y > size.y + m {
        pos.y = -m;
    }
}

impl Effect for Drift {
    fn setup(&mut self, size: Vec2) {
        self.motes = (0..DRIFT_COUNT)
            .map(|_| Mote {
                pos: Vec2::new(
                    self.rng.gen_range(0.0..size.x),
                    self.rng.gen_range(0.0..size.y),
                ),
                vel: Vec2::new(
                    self.rng.gen_range(-DRIFT_SPEED_MAX..DRIFT_SPEED_MAX),
                    self.rng.gen_range(-DRIFT_SPEED_MAX..DRIFT_SPEED_MAX),
                ),
                radius: self.rng.gen_range(DRIFT_RADIUS_MIN..DRIFT_RADIUS_MAX),
                alpha: self.rng.gen_range(DRIFT_ALPHA_MIN..DRIFT_ALPHA_MAX),
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
