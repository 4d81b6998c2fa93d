//! Header scroll state → `scrolled` class.

use crate::dom::{self, Listener};
use sicosa_core::{HeaderState, SiteConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn init(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Vec<Listener>>, JsValue> {
    let Some(header) = dom::find(document, &config.selectors.header) else {
        log::debug!("header: `{}` not found, skipping", config.selectors.header);
        return Ok(None);
    };

    let mut state = HeaderState::new(config.header.scroll_threshold);
    sync(window, &header, &mut state);

    let win = window.clone();
    let on_scroll = Listener::passive(window, "scroll", move |_| {
        sync(&win, &header, &mut state);
    })?;
    Ok(Some(vec![on_scroll]))
}

fn sync(window: &Window, header: &Element, state: &mut HeaderState) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let was = state.is_scrolled();
    let now = state.on_scroll(scroll_y);
    if was != now {
        log::trace!("header scrolled={now} at y={scroll_y}");
    }
    dom::set_class(header, "scrolled", now);
}
