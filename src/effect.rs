use glam::Vec2;
use web_sys as web;

/// One pluggable drawing behavior bound to a canvas session.
///
/// Sessions call `setup` once at init, `resize` when the viewport changes,
/// and `frame` on every visible animation frame. Implementations advance
/// their own entity state and paint it; they have no other side effects.
pub trait Effect {
    /// Build the initial entity collection for a `size` surface.
    fn setup(&mut self, size: Vec2);

    /// Rebuild whatever is a function of the canvas size. Effects whose
    /// layout does not depend on it keep the default no-op.
    fn resize(&mut self, size: Vec2) {
        let _ = size;
    }

    /// Advance by `dt_sec` and repaint. `pointer` is the shared cursor
    /// position sampled for this frame.
    fn frame(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        size: Vec2,
        pointer: Vec2,
        dt_sec: f32,
    );
}

/// Linear interaction falloff: 1 at the centre, 0 at `radius` and beyond.
#[inline]
pub fn falloff(dist: f32, radius: f32) -> f32 {
    if dist >= radius {
        0.0
    } else {
        1.0 - dist / radius
    }
}
