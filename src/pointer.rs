use crate::constants::POINTER_PARKED;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cursor position shared by every canvas session: one writer (the
/// `pointermove` listener), many readers. Starts parked off-screen so no
/// entity reacts before the pointer first moves.
#[derive(Clone)]
pub struct PointerCell(Rc<Cell<Vec2>>);

impl PointerCell {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(POINTER_PARKED)))
    }

    #[inline]
    pub fn get(&self) -> Vec2 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, pos: Vec2) {
        self.0.set(pos);
    }
}

impl Default for PointerCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the single writer for the shared cell.
pub fn wire(window: &web::Window, cell: &PointerCell) {
    let cell = cell.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        cell.set(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
