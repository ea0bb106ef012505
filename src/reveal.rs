use crate::constants::{REVEAL_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Reveal-on-scroll: every `[data-reveal]` element gains `is-revealed` the
/// first time it crosses into view, then stops being watched. The CSS side
/// owns the actual transition.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow!("reveal selector: {e:?}"))?;
    if nodes.length() == 0 {
        return Ok(());
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                _ = target.class_list().add_1(REVEAL_CLASS);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow!("reveal observer: {e:?}"))?;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                observer.observe(&el);
            }
        }
    }
    cb.forget();
    log::debug!("[fx] watching {} reveal targets", nodes.length());
    Ok(())
}
