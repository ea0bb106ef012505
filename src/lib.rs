#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::effect::Effect;
use crate::effects::{Drift, Lattice, Links, Orbits, Waves};
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod effect;
mod effects;
mod lifecycle;
mod pointer;
mod reveal;
mod session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Derive a per-slot seed so the seeded effects animate independently.
fn mix_seed(base: u64, slot: u64) -> u64 {
    base ^ slot.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// The five page sections and the behavior plugged into each.
fn effect_registry() -> Vec<(&'static str, Box<dyn Effect>)> {
    vec![
        (
            DRIFT_CANVAS_ID,
            Box::new(Drift::new(mix_seed(FX_SEED, 0))) as Box<dyn Effect>,
        ),
        (LATTICE_CANVAS_ID, Box::new(Lattice::new())),
        (WAVES_CANVAS_ID, Box::new(Waves::new())),
        (LINKS_CANVAS_ID, Box::new(Links::new(mix_seed(FX_SEED, 1)))),
        (ORBITS_CANVAS_ID, Box::new(Orbits::new(mix_seed(FX_SEED, 2)))),
    ]
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let shared_pointer = pointer::PointerCell::new();
    pointer::wire(&window, &shared_pointer);

    let mut sessions = Vec::new();
    for (canvas_id, fx) in effect_registry() {
        if let Some(s) = session::init(&window, &document, canvas_id, fx, shared_pointer.clone())? {
            sessions.push(s);
        }
    }
    log::info!("[fx] {} of 5 canvas sections live", sessions.len());

    wire_window_resize(&window, Rc::new(sessions));
    reveal::wire(&document)?;
    Ok(())
}

/// One resize listener fans out to every live session.
fn wire_window_resize(window: &web::Window, sessions: Rc<Vec<session::SharedSession>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else { return };
        let size = dom::viewport_size(&w);
        for s in sessions.iter() {
            session::resize(s, size);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
