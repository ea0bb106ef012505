use glam::Vec2;
use web_sys as web;

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Vec2::new(w.max(1.0) as f32, h.max(1.0) as f32)
}

/// Match the canvas backing store to `size`.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, size: Vec2) {
    canvas.set_width((size.x as u32).max(1));
    canvas.set_height((size.y as u32).max(1));
}
