use crate::constants::*;
use crate::effect::{falloff, Effect};
use glam::Vec2;
use web_sys as web;

pub struct LatticeNode {
    pub home: Vec2,
    pub offset: Vec2,
}

/// Regular grid of dots. Each node is displaced away from the pointer inside
/// `LATTICE_PUSH_RADIUS` and eases back to its home cell when released. The
/// grid itself is a function of the canvas size, so this is the one effect
/// with a real resize hook.
pub struct Lattice {
    pub nodes: Vec<LatticeNode>,
    pub cols: usize,
    pub rows: usize,
}

impl Lattice {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Regenerate the grid to cover `size`.
    pub fn rebuild(&mut self, size: Vec2) {
        let cols = (size.x / LATTICE_SPACING).ceil() as usize;
        let rows = (size.y / LATTICE_SPACING).ceil() as usize;
        let half = LATTICE_SPACING * 0.5;
        self.cols = cols;
        self.rows = rows;
        self.nodes = (0..rows)
            .flat_map(|row| {
                (0..cols).map(move |col| LatticeNode {
                    home: Vec2::new(
                        col as f32 * LATTICE_SPACING + half,
                        row as f32 * LATTICE_SPACING + half,
                    ),
                    offset: Vec2::ZERO,
                })
            })
            .collect();
    }

    pub fn step(&mut self, pointer: Vec2, dt_sec: f32) {
        let ease = 1.0 - (-dt_sec / LATTICE_EASE_TAU_SEC).exp();
        for n in &mut self.nodes {
            let from_pointer = n.home - pointer;
            let dist = from_pointer.length();
            let target = if dist < LATTICE_PUSH_RADIUS && dist > f32::EPSILON {
                from_pointer / dist * (falloff(dist, LATTICE_PUSH_RADIUS) * LATTICE_PUSH_MAX)
            } else {
                Vec2::ZERO
            };
            n.offset += (target - n.offset) * ease;
        }
    }

    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        ctx.set_fill_style_str(LATTICE_FILL);
        for n in &self.nodes {
            let p = n.home + n.offset;
            ctx.begin_path();
            _ = ctx.arc(
                p.x as f64,
                p.y as f64,
                LATTICE_DOT_RADIUS as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Lattice {
    fn setup(&mut self, size: Vec2) {
        self.rebuild(size);
    }

    fn resize(&mut self, size: Vec2) {
        self.rebuild(size);
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
