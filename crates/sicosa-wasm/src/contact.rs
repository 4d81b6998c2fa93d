//! Contact form → `mailto:` hand-off with a transient confirmation.

use crate::dom::{self, Listener};
use sicosa_core::config::ContactConfig;
use sicosa_core::{ContactFields, SiteConfig, SubmitFeedback};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Window,
};

pub fn init(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Vec<Listener>>, JsValue> {
    let Some(form) = dom::find(document, &config.selectors.contact_form) else {
        log::debug!(
            "contact: `{}` not found, skipping",
            config.selectors.contact_form
        );
        return Ok(None);
    };
    let button = dom::find_in(&form, &config.selectors.submit_button)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if button.is_none() {
        log::debug!("contact: no submit control, confirmation disabled");
    }

    let feedback = Rc::new(RefCell::new(SubmitFeedback::new()));
    let contact = config.contact.clone();
    let (win, form_el) = (window.clone(), form.clone());

    let on_submit = Listener::new(&form, "submit", move |event| {
        event.prevent_default();

        let fields = read_fields(&form_el);
        let uri = fields.mailto_uri(&contact.recipient, &contact.subject_prefix);
        log::info!("contact: handing off to mail client ({} bytes)", uri.len());
        if let Err(e) = win.location().set_href(&uri) {
            log::warn!("contact: navigation to mailto failed: {e:?}");
        }

        if let Some(button) = &button {
            show_confirmation(&win, button, &contact, &feedback);
        }
    })?;

    Ok(Some(vec![on_submit]))
}

fn read_fields(form: &Element) -> ContactFields {
    ContactFields::from_lookup(|name| {
        let el = dom::find_in(form, &format!("[name=\"{name}\"]"))?;
        field_value(&el)
    })
}

fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        el.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
    }
}

/// Swap in the confirmation label and background, and schedule the restore.
fn show_confirmation(
    window: &Window,
    button: &HtmlElement,
    contact: &ContactConfig,
    feedback: &Rc<RefCell<SubmitFeedback>>,
) {
    let current = button.text_content().unwrap_or_default();
    let token = feedback.borrow_mut().begin(&current);

    button.set_text_content(Some(&contact.confirm_label));
    if let Err(e) = button
        .style()
        .set_property("background", &contact.confirm_background)
    {
        log::warn!("contact: could not set confirmation background: {e:?}");
    }

    let restore = {
        let (button, feedback) = (button.clone(), feedback.clone());
        Closure::once_into_js(move || {
            if let Some(label) = feedback.borrow_mut().finish(token) {
                button.set_text_content(Some(&label));
                if let Err(e) = button.style().remove_property("background") {
                    log::warn!("contact: could not restore background: {e:?}");
                }
            }
        })
    };
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        contact.confirm_ms.min(i32::MAX as u32) as i32,
    ) {
        log::warn!("contact: could not schedule confirmation reset: {e:?}");
    }
}
