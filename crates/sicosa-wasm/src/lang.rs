//! Language switcher dropdown with outside-click dismissal.

use crate::dom::{self, Listener};
use sicosa_core::{ClickTarget, LangState, LangSwitcher, SiteConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

pub fn init(document: &Document, config: &SiteConfig) -> Result<Option<Vec<Listener>>, JsValue> {
    let selectors = &config.selectors;
    let Some(switcher) = dom::find(document, &selectors.lang_switcher) else {
        log::debug!("lang: `{}` not found, skipping", selectors.lang_switcher);
        return Ok(None);
    };
    let Some(current) = dom::find_in(&switcher, &selectors.lang_current) else {
        log::debug!(
            "lang: `{}` missing inside switcher, skipping",
            selectors.lang_current
        );
        return Ok(None);
    };

    let state = Rc::new(Cell::new(LangSwitcher::new()));

    // `current` sits inside `switcher`; both stop propagation, so the
    // document handler only ever sees clicks outside the switcher.
    let handler = |target: ClickTarget| {
        let (state, switcher) = (state.clone(), switcher.clone());
        move |event: Event| dispatch(&state, &switcher, target, &event)
    };

    Ok(Some(vec![
        Listener::new(&current, "click", handler(ClickTarget::Current))?,
        Listener::new(&switcher, "click", handler(ClickTarget::Inside))?,
        Listener::new(document, "click", handler(ClickTarget::Outside))?,
    ]))
}

fn dispatch(state: &Cell<LangSwitcher>, switcher: &Element, target: ClickTarget, event: &Event) {
    let mut sw = state.get();
    let outcome = sw.click(target);
    state.set(sw);
    if outcome.stop_propagation {
        event.stop_propagation();
    }
    dom::set_class(switcher, "open", outcome.state == LangState::Open);
}
