//! Mobile navigation toggle and scroll lock.

use crate::dom::{self, Listener};
use sicosa_core::{MenuView, MobileMenu, SiteConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

struct MenuDom {
    toggle: Element,
    nav: Element,
    body: Option<HtmlElement>,
}

impl MenuDom {
    fn apply(&self, view: MenuView) {
        dom::set_class(&self.toggle, "active", view.toggle_active);
        dom::set_class(&self.nav, "open", view.nav_open);
        if let Some(body) = &self.body
            && let Err(e) = body.style().set_property("overflow", view.body_overflow)
        {
            log::warn!("menu: could not set body overflow: {e:?}");
        }
    }
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<Option<Vec<Listener>>, JsValue> {
    let selectors = &config.selectors;
    let (Some(toggle), Some(nav)) = (
        dom::find(document, &selectors.menu_toggle),
        dom::find(document, &selectors.nav),
    ) else {
        log::debug!(
            "menu: `{}` or `{}` not found, skipping",
            selectors.menu_toggle,
            selectors.nav
        );
        return Ok(None);
    };

    let links = dom::find_all(document, Some(&nav), &selectors.nav_link);
    let ui = Rc::new(MenuDom {
        toggle: toggle.clone(),
        nav,
        body: document.body(),
    });
    let menu = Rc::new(Cell::new(MobileMenu::new()));

    let mut listeners = Vec::with_capacity(links.len() + 1);

    listeners.push({
        let (ui, menu) = (ui.clone(), menu.clone());
        Listener::new(&toggle, "click", move |_| {
            let mut m = menu.get();
            let view = m.toggle();
            menu.set(m);
            ui.apply(view);
        })?
    });

    for link in &links {
        let (ui, menu) = (ui.clone(), menu.clone());
        listeners.push(Listener::new(link, "click", move |_| {
            let mut m = menu.get();
            let view = m.close();
            menu.set(m);
            ui.apply(view);
        })?);
    }

    log::debug!("menu: wired toggle and {} nav links", links.len());
    Ok(Some(listeners))
}
