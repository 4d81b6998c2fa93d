//! Reveal-on-scroll via `IntersectionObserver`.

use crate::dom;
use js_sys::Array;
use sicosa_core::{RevealAction, RevealTracker, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owns the observer and its callback. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<Option<RevealObserver>, JsValue> {
    let elements = dom::find_all(document, None, &config.selectors.reveal);
    if elements.is_empty() {
        log::debug!("reveal: no `{}` elements, skipping", config.selectors.reveal);
        return Ok(None);
    }

    let mut tracker = RevealTracker::new(elements.len());
    let targets = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.on_intersection(index, entry.is_intersecting()) == RevealAction::Reveal {
                    dom::set_class(&target, "visible", true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in &elements {
        observer.observe(el);
    }

    log::debug!("reveal: observing {} elements", elements.len());
    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}
