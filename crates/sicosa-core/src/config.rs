//! Site configuration.
//!
//! Every tunable used by the components lives here: DOM selectors, the
//! header scroll threshold, reveal observer options, particle constants,
//! and the contact recipient. The page may pass a partial JSON document
//! across the WASM boundary; anything it leaves out takes the default.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Colour ──────────────────────────────────────────────────────────────

/// An opaque sRGB colour. Alpha is supplied at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// CSS `rgba(...)` string with the given alpha.
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex colour `{s}`")))
    }
}

// ─── Sections ────────────────────────────────────────────────────────────

/// CSS selectors used to locate each component's elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub menu_toggle: String,
    pub nav: String,
    /// Resolved inside `nav`.
    pub nav_link: String,
    pub lang_switcher: String,
    /// Resolved inside `lang_switcher`.
    pub lang_current: String,
    pub reveal: String,
    pub hero_canvas: String,
    pub contact_form: String,
    /// Resolved inside `contact_form`.
    pub submit_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: ".header".into(),
            menu_toggle: ".menu-toggle".into(),
            nav: ".nav".into(),
            nav_link: ".nav-link".into(),
            lang_switcher: ".lang-switcher".into(),
            lang_current: ".lang-current".into(),
            reveal: ".reveal".into(),
            hero_canvas: ".hero-canvas".into(),
            contact_form: ".contact-form".into(),
            submit_button: ".btn-submit".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) above which the header counts as scrolled.
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible (0.0 ..= 1.0).
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport before intersecting.
    pub bottom_margin: f64,
}

impl RevealConfig {
    /// Root margin string for `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 40.0,
        }
    }
}

/// Constants for the hero particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Pairs closer than this are joined by a line.
    pub connection_distance: f64,
    /// Pointer influence radius.
    pub pointer_radius: f64,
    /// Repulsion scale applied at full proximity.
    pub repulsion: f64,
    /// Per-frame velocity multiplier.
    pub damping: f64,
    /// Initial velocity per axis is uniform in `[-max_speed/2, max_speed/2)`.
    pub max_speed: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub min_opacity: f64,
    pub opacity_spread: f64,
    pub particle_color: Rgb,
    pub line_color: Rgb,
    /// Alpha multiplier for connection lines.
    pub line_dim: f64,
    pub line_width: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 60,
            connection_distance: 150.0,
            pointer_radius: 180.0,
            repulsion: 0.02,
            damping: 0.999,
            max_speed: 0.5,
            min_radius: 1.0,
            radius_spread: 2.0,
            min_opacity: 0.2,
            opacity_spread: 0.5,
            particle_color: Rgb::new(56, 189, 248),
            line_color: Rgb::new(37, 99, 235),
            line_dim: 0.15,
            line_width: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub subject_prefix: String,
    /// Label shown on the submit control after handing off to the mail client.
    pub confirm_label: String,
    pub confirm_background: String,
    pub confirm_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "info@sicosaenergy.am".into(),
            subject_prefix: "Cooperation Proposal".into(),
            confirm_label: "✓".into(),
            confirm_background: "linear-gradient(135deg, #059669, #047857)".into(),
            confirm_ms: 2000,
        }
    }
}

// ─── Root ────────────────────────────────────────────────────────────────

/// Upper bound on `particles.count`; connections are checked pairwise.
pub const MAX_PARTICLES: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Any `log::LevelFilter` name (`off`, `error`, … `trace`).
    pub log_level: String,
    pub selectors: Selectors,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub particles: ParticleConfig,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            selectors: Selectors::default(),
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
            particles: ParticleConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid site config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, String> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("unknown log_level `{}`", self.log_level))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that would make the simulation or mailto nonsensical.
    pub fn validate(&self) -> Result<(), String> {
        self.level_filter()?;
        let p = &self.particles;
        if p.count == 0 || p.count > MAX_PARTICLES {
            return Err(format!(
                "particles.count must be in 1..={MAX_PARTICLES}, got {}",
                p.count
            ));
        }
        for (name, value) in [
            ("particles.connection_distance", p.connection_distance),
            ("particles.pointer_radius", p.pointer_radius),
            ("particles.min_radius", p.min_radius),
            ("particles.line_width", p.line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        for (name, value) in [
            ("header.scroll_threshold", self.header.scroll_threshold),
            ("reveal.bottom_margin", self.reveal.bottom_margin),
            ("particles.repulsion", p.repulsion),
            ("particles.max_speed", p.max_speed),
            ("particles.radius_spread", p.radius_spread),
            ("particles.opacity_spread", p.opacity_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        for (name, value) in [
            ("particles.min_opacity", p.min_opacity),
            ("particles.line_dim", p.line_dim),
            ("reveal.threshold", self.reveal.threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        if p.min_opacity + p.opacity_spread > 1.0 {
            return Err(format!(
                "particles.min_opacity + opacity_spread must not exceed 1, got {}",
                p.min_opacity + p.opacity_spread
            ));
        }
        if !(p.damping > 0.0 && p.damping <= 1.0) {
            return Err(format!("particles.damping must be in (0, 1], got {}", p.damping));
        }
        if self.contact.recipient.trim().is_empty() {
            return Err("contact.recipient must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.particles.count, 60);
        assert_eq!(config.header.scroll_threshold, 50.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r##"{"particles":{"count":12,"line_color":"#fff"}}"##).unwrap();
        assert_eq!(config.particles.count, 12);
        assert_eq!(config.particles.line_color, Rgb::new(255, 255, 255));
        assert_eq!(config.particles.connection_distance, 150.0);
        assert_eq!(config.contact.recipient, "info@sicosaenergy.am");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SiteConfig::from_json(r#"{"particles":{"count":0}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"particles":{"damping":1.5}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"particles":{"pointer_radius":-1}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"contact":{"recipient":"  "}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"particles":{"line_color":"blue"}}"#).is_err());
        assert!(SiteConfig::from_json("not json").is_err());
        assert!(SiteConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
    }

    #[test]
    fn rejects_values_that_break_drawing() {
        for json in [
            r#"{"reveal":{"bottom_margin":-10.0}}"#,
            r#"{"particles":{"min_radius":-5.0,"radius_spread":0.0}}"#,
            r#"{"particles":{"min_radius":0.0}}"#,
            r#"{"particles":{"radius_spread":-1.0}}"#,
            r#"{"particles":{"min_opacity":-3.0}}"#,
            r#"{"particles":{"opacity_spread":-0.1}}"#,
            r#"{"particles":{"min_opacity":0.8,"opacity_spread":0.5}}"#,
            r#"{"particles":{"line_dim":1.5}}"#,
            r#"{"particles":{"count":501}}"#,
            r#"{"particles":{"max_speed":-1.0}}"#,
            r#"{"header":{"scroll_threshold":-1.0}}"#,
        ] {
            assert!(SiteConfig::from_json(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn accepts_edge_values() {
        let config = SiteConfig::from_json(
            r#"{"particles":{"count":500,"min_opacity":0.5,"opacity_spread":0.5,"line_dim":1.0},
                "reveal":{"bottom_margin":0.0}}"#,
        )
        .unwrap();
        assert_eq!(config.particles.count, MAX_PARTICLES);
        assert_eq!(config.reveal.root_margin(), "0px 0px -0px 0px");
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = SiteConfig::from_json(r#"{"log_level":"DEBUG"}"#).unwrap();
        assert_eq!(config.level_filter(), Ok(log::LevelFilter::Debug));
        assert_eq!(SiteConfig::default().level_filter(), Ok(log::LevelFilter::Info));
    }

    #[test]
    fn json_roundtrip_preserves_colours() {
        let json = SiteConfig::default().to_json();
        assert!(json.contains("\"#38BDF8\""));
        assert_eq!(SiteConfig::from_json(&json).unwrap(), SiteConfig::default());
    }

    #[test]
    fn rgb_parsing() {
        assert_eq!(Rgb::from_hex("#2563EB"), Some(Rgb::new(37, 99, 235)));
        assert_eq!(Rgb::from_hex("38bdf8"), Some(Rgb::new(56, 189, 248)));
        assert_eq!(Rgb::from_hex("#abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
    }

    #[test]
    fn css_output() {
        assert_eq!(Rgb::new(56, 189, 248).to_css_rgba(0.5), "rgba(56, 189, 248, 0.5)");
        assert_eq!(RevealConfig::default().root_margin(), "0px 0px -40px 0px");
    }
}
