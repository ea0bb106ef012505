use crate::constants::{MAX_FRAME_DT_SEC, VISIBILITY_THRESHOLD};
use crate::dom;
use crate::effect::Effect;
use crate::lifecycle::{LoopCommand, LoopState};
use crate::pointer::PointerCell;
use anyhow::anyhow;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One managed canvas: drawing surface, recorded size, loop state and the
/// effect plugged into it.
pub struct Session {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub size: Vec2,
    state: LoopState,
    effect: Box<dyn Effect>,
    pointer: PointerCell,
    last_frame: Instant,
}

pub type SharedSession = Rc<RefCell<Session>>;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Bind `effect` to the canvas `#canvas_id`. A page without that element
/// yields `Ok(None)`: the section simply is not present. A present element
/// that is not a usable 2D canvas is a genuine init error.
pub fn init(
    window: &web::Window,
    document: &web::Document,
    canvas_id: &str,
    mut effect: Box<dyn Effect>,
    pointer: PointerCell,
) -> anyhow::Result<Option<SharedSession>> {
    let Some(el) = document.get_element_by_id(canvas_id) else {
        log::info!("[fx] no #{canvas_id} on this page, section skipped");
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|_| anyhow!("#{canvas_id} is not a canvas"))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("2d context on #{canvas_id}: {e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable on #{canvas_id}"))?
        .dyn_into()
        .map_err(|_| anyhow!("#{canvas_id} returned a foreign context"))?;

    let size = dom::viewport_size(window);
    dom::sync_canvas_size(&canvas, size);
    effect.setup(size);

    let session = Rc::new(RefCell::new(Session {
        canvas,
        ctx,
        size,
        state: LoopState::default(),
        effect,
        pointer,
        last_frame: Instant::now(),
    }));
    wire_loop(&session)?;
    Ok(Some(session))
}

/// Viewport changed: resync the backing store and let the effect rebuild
/// anything layout-dependent.
pub fn resize(session: &SharedSession, size: Vec2) {
    let mut s = session.borrow_mut();
    s.size = size;
    dom::sync_canvas_size(&s.canvas, size);
    s.effect.resize(size);
}

fn wire_loop(session: &SharedSession) -> anyhow::Result<()> {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    {
        let session = session.clone();
        let tick_inner = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            step(&session, &tick_inner);
        }) as Box<dyn FnMut()>));
    }
    observe_visibility(session, tick)
}

/// One frame: consume the dispatched handle, halt if the session went hidden
/// while the callback was in flight, otherwise draw and reschedule.
fn step(session: &SharedSession, tick: &TickClosure) {
    {
        let mut s = session.borrow_mut();
        if !s.state.frame_fired() {
            return;
        }
        s.draw();
    }
    schedule(session, tick);
}

fn schedule(session: &SharedSession, tick: &TickClosure) {
    let Some(window) = web::window() else { return };
    let tick_ref = tick.borrow();
    let Some(closure) = tick_ref.as_ref() else { return };
    if let Ok(handle) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        session.borrow_mut().state.frame_scheduled(handle);
    }
}

impl Session {
    fn draw(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;
        let pointer = self.pointer.get();
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
        let Session {
            ctx, effect, size, ..
        } = self;
        effect.frame(ctx, *size, pointer, dt_sec);
    }
}

/// Watch the canvas's parent container (the canvas itself when parentless)
/// and gate the render loop on it being at least 10% visible. Off-screen
/// sections must not burn CPU.
fn observe_visibility(session: &SharedSession, tick: TickClosure) -> anyhow::Result<()> {
    let target: web::Element = {
        let s = session.borrow();
        s.canvas
            .parent_element()
            .unwrap_or_else(|| s.canvas.clone().into())
    };

    let cb = {
        let session = session.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                // entries are batched oldest-first; only the latest matters
                let Some(entry) = entries.iter().last() else {
                    return;
                };
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                apply_visibility(&session, &tick, entry.is_intersecting());
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
    };

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow!("intersection observer: {e:?}"))?;
    observer.observe(&target);
    cb.forget();
    Ok(())
}

fn apply_visibility(session: &SharedSession, tick: &TickClosure, visible: bool) {
    let command = session.borrow_mut().state.set_visible(visible);
    match command {
        Some(LoopCommand::Begin) => {
            // fresh dt baseline so the first frame back is not a jump
            session.borrow_mut().last_frame = Instant::now();
            schedule(session, tick);
        }
        Some(LoopCommand::Cancel(handle)) => {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(handle);
            }
        }
        None => {}
    }
}
