//! WASM bridge for the Sicosa site — wires the core components to the DOM.
//!
//! Compiled via `wasm-pack build --target web`. The page calls
//! `init_site()` once the DOM is ready and keeps the returned `Site` if it
//! ever needs to tear the interactivity down again.

mod contact;
mod dom;
mod header;
mod hero;
mod lang;
mod menu;
mod render2d;
mod reveal;

use dom::Listener;
use hero::HeroCanvas;
use reveal::RevealObserver;
use sicosa_core::{ContactFields, SiteConfig};
use wasm_bindgen::prelude::*;

/// Handle to everything `init_site` attached to the page.
///
/// Dropping it (or calling `teardown`) stops the hero animation, removes
/// every listener, and disconnects the reveal observer.
#[wasm_bindgen]
pub struct Site {
    listeners: Vec<Listener>,
    reveal: Option<RevealObserver>,
    hero: Option<HeroCanvas>,
    /// Components that found their elements, in startup order.
    mounted: Vec<&'static str>,
}

#[wasm_bindgen]
impl Site {
    /// Stop the animation loop and detach all handlers. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(hero) = self.hero.take() {
            hero.stop();
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.disconnect();
        }
        let detached = self.listeners.len();
        self.listeners.clear();
        self.mounted.clear();
        log::info!("site torn down ({detached} listeners removed)");
    }

    /// Whether the hero particle animation is currently running.
    pub fn is_animating(&self) -> bool {
        self.hero.as_ref().is_some_and(HeroCanvas::is_animating)
    }

    /// Names of the mounted components as a JSON array.
    pub fn mounted_json(&self) -> String {
        serde_json::to_string(&self.mounted).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Site {
    fn empty() -> Self {
        Self {
            listeners: Vec::new(),
            reveal: None,
            hero: None,
            mounted: Vec::new(),
        }
    }

    /// Record a component's startup result. A missing element (`Ok(None)`)
    /// is silent; a browser API failure is logged and that component alone
    /// is skipped.
    fn mount<T>(&mut self, name: &'static str, result: Result<Option<T>, JsValue>) -> Option<T> {
        match result {
            Ok(Some(component)) => {
                self.mounted.push(name);
                Some(component)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("{name}: failed to start: {e:?}");
                None
            }
        }
    }

    fn mount_listeners(
        &mut self,
        name: &'static str,
        result: Result<Option<Vec<Listener>>, JsValue>,
    ) {
        if let Some(listeners) = self.mount(name, result) {
            self.listeners.extend(listeners);
        }
    }
}

/// Wire every component. `config_json` may be omitted or partial; missing
/// fields take their defaults. Fails only on an invalid configuration or
/// when there is no `window`/`document`.
#[wasm_bindgen]
pub fn init_site(config_json: Option<String>) -> Result<Site, JsValue> {
    console_error_panic_hook_setup();

    let config = parse_config(config_json.as_deref())?;
    init_logging(&config);

    let window = dom::window()?;
    let document = dom::document(&window)?;

    let mut site = Site::empty();
    site.mount_listeners("header", header::init(&window, &document, &config));
    site.mount_listeners("menu", menu::init(&document, &config));
    site.mount_listeners("lang", lang::init(&document, &config));
    site.reveal = site.mount("reveal", reveal::init(&document, &config));
    site.hero = site.mount("hero", hero::init(&window, &document, &config));
    site.mount_listeners("contact", contact::init(&window, &document, &config));

    log::info!("site ready: {}", site.mounted.join(", "));
    Ok(site)
}

/// The default configuration as JSON, for pages that want to tweak a copy.
#[wasm_bindgen]
pub fn default_config_json() -> String {
    SiteConfig::default().to_json()
}

/// Build the contact `mailto:` URI without a form. Pass the same
/// `config_json` given to `init_site` to use its recipient and subject
/// prefix; omitted, the defaults apply.
#[wasm_bindgen]
pub fn mailto_uri(
    name: &str,
    company: &str,
    phone: &str,
    email: &str,
    message: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let contact = parse_config(config_json.as_deref())?.contact;
    Ok(ContactFields {
        name: name.to_string(),
        company: company.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
    .mailto_uri(&contact.recipient, &contact.subject_prefix))
}

/// Blank or missing JSON means the defaults.
fn parse_config(config_json: Option<&str>) -> Result<SiteConfig, JsValue> {
    match config_json.map(str::trim) {
        Some(json) if !json.is_empty() => {
            SiteConfig::from_json(json).map_err(|e| JsValue::from_str(&e))
        }
        _ => Ok(SiteConfig::default()),
    }
}

// ─── Logging ─────────────────────────────────────────────────────────────

fn init_logging(config: &SiteConfig) {
    // `validate` already rejected unknown names.
    let Some(level) = config.level_filter().ok().and_then(|f| f.to_level()) else {
        return;
    };
    // A second `init_site` keeps the first logger.
    let _ = console_log::init_with_level(level);
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("sicosa WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mailto_uri_matches_core_builder() {
        let uri = mailto_uri("Jane", "Acme", "555", "j@a.com", "Hi", None).unwrap();
        assert_eq!(
            uri,
            "mailto:info@sicosaenergy.am\
             ?subject=Cooperation%20Proposal%20%E2%80%94%20Acme\
             &body=Name%3A%20Jane%0ACompany%3A%20Acme%0APhone%3A%20555%0A\
             Email%3A%20j%40a.com%0A%0AMessage%3A%0AHi"
        );
    }

    #[test]
    fn mailto_uri_follows_site_config() {
        let config = r#"{"contact":{"recipient":"sales@example.am","subject_prefix":"Hello"}}"#;
        let uri = mailto_uri("Jane", "", "", "", "", Some(config.to_string())).unwrap();
        assert!(uri.starts_with("mailto:sales@example.am?subject=Hello%20%E2%80%94%20Jane&"));

        let blank = mailto_uri("Jane", "", "", "", "", Some("  ".to_string())).unwrap();
        assert!(blank.starts_with("mailto:info@sicosaenergy.am?"));
    }

    #[test]
    fn default_config_json_parses_back() {
        let json = default_config_json();
        let parsed = SiteConfig::from_json(&json).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn empty_site_reports_nothing_mounted() {
        let mut site = Site::empty();
        assert_eq!(site.mounted_json(), "[]");
        assert!(!site.is_animating());
        let skipped: Option<()> = site.mount("hero", Ok(None));
        assert!(skipped.is_none());
        assert_eq!(site.mount("reveal", Ok(Some(7))), Some(7));
        assert_eq!(site.mounted_json(), r#"["reveal"]"#);
    }
}
