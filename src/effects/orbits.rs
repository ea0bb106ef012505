use crate::constants::*;
use crate::effect::Effect;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use web_sys as web;

pub struct OrbitShape {
    pub anchor: Vec2,
    pub drift: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub sides: u32,
    pub size: f32,
}

/// Slowly spinning polygon outlines. Each shape's anchor offset eases toward
/// a small fraction of the pointer offset inside `ORBIT_PULL_RADIUS`, giving
/// the section a gentle parallax.
pub struct Orbits {
    pub shapes: Vec<OrbitShape>,
    rng: StdRng,
}

impl Orbits {
    pub fn new(seed: u64) -> Self {
        Self {
            shapes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn step(&mut self, pointer: Vec2, dt_sec: f32) {
        let ease = 1.0 - (-dt_sec / ORBIT_EASE_TAU_SEC).exp();
        for s in &mut self.shapes {
            s.angle += s.spin * dt_sec;
            let to_pointer = pointer - s.anchor;
            let target = if to_pointer.length() < ORBIT_PULL_RADIUS {
                to_pointer * ORBIT_PULL_FRACTION
            } else {
                Vec2::ZERO
            };
            s.drift += (target - s.drift) * ease;
        }
    }

    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        ctx.set_stroke_style_str(ORBIT_STROKE);
        ctx.set_line_width(ORBIT_LINE_WIDTH);
        ctx.set_global_alpha(ORBIT_ALPHA as f64);
        for s in &self.shapes {
            let centre = s.anchor + s.drift;
            ctx.save();
            _ = ctx.translate(centre.x as f64, centre.y as f64);
            _ = ctx.rotate(s.angle as f64);
            ctx.begin_path();
            for k in 0..s.sides {
                let a = k as f32 / s.sides as f32 * TAU;
                let (x, y) = ((a.cos() * s.size) as f64, (a.sin() * s.size) as f64);
                if k == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.close_path();
            ctx.stroke();
            ctx.restore();
        }
        ctx.set_global_alpha(1.0);
    }
}

impl Effect for Orbits {
    fn setup(&mut self, size: Vec2) {
        self.shapes = (0..ORBIT_COUNT)
            .map(|_| OrbitShape {
                anchor: Vec2::new(
                    self.rng.gen_range(0.0..size.x),
                    self.rng.gen_range(0.0..size.y),
                ),
                drift: Vec2::ZERO,
                angle: self.rng.gen_range(0.0..TAU),
                spin: self.rng.gen_range(-ORBIT_SPIN_MAX..ORBIT_SPIN_MAX),
                sides: self.rng.gen_range(ORBIT_SIDES_MIN..=ORBIT_SIDES_MAX),
                size: self.rng.gen_range(ORBIT_SIZE_MIN..ORBIT_SIZE_MAX),
            })
            .collect();
    }

    fn frame(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        _size: Vec2,
        pointer: Vec2,
        dt_sec: f32,
    ) {
        self.step(pointer, dt_sec);
        self.paint(ctx);
    }
}
