use crate::constants::*;
use crate::effect::Effect;
use glam::Vec2;
use web_sys as web;

/// Layered sine lines sweeping across the section. Pure function of time;
/// the only effect that ignores the pointer entirely.
pub struct Waves {
    pub phase: f32,
}

impl Waves {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.phase += dt_sec;
    }
}

/// Height of `layer` at horizontal position `x`, around the midline `mid`.
#[inline]
pub fn wave_y(layer: usize, x: f32, phase: f32, mid: f32) -> f32 {
    mid + WAVE_LAYER_AMPLITUDES[layer]
        * (x * WAVE_LAYER_FREQUENCIES[layer] + phase * WAVE_LAYER_PHASE_RATES[layer]).sin()
}

impl Default for Waves {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Waves {
    fn setup(&mut self, _size: Vec2) {
        self.phase = 0.0;
    }

    fn frame(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        size: Vec2,
        _pointer: Vec2,
        dt_sec: f32,
    ) {
        self.step(dt_sec);
        ctx.set_stroke_style_str(WAVE_STROKE);
        ctx.set_line_width(WAVE_LINE_WIDTH);
        let mid = size.y * 0.5;
        for layer in 0..WAVE_LAYER_AMPLITUDES.len() {
            ctx.set_global_alpha(WAVE_LAYER_ALPHAS[layer] as f64);
            ctx.begin_path();
            let mut x = 0.0f32;
            ctx.move_to(0.0, wave_y(layer, 0.0, self.phase, mid) as f64);
            while x <= size.x + WAVE_SAMPLE_STEP {
                x += WAVE_SAMPLE_STEP;
                ctx.line_to(x as f64, wave_y(layer, x, self.phase, mid) as f64);
            }
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }
}
