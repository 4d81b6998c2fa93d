//! Sicosa site interactivity — browser-independent core.
//!
//! Each component is a small state machine driven by DOM events in
//! `sicosa-wasm`. Nothing here touches the browser, so all of it runs
//! under plain `cargo test`.

pub mod config;
pub mod contact;
pub mod feedback;
pub mod header;
pub mod lang;
pub mod menu;
pub mod particles;
pub mod pointer;
pub mod reveal;

pub use config::{Rgb, SiteConfig};
pub use contact::{ContactFields, encode_uri_component};
pub use feedback::{FeedbackToken, SubmitFeedback};
pub use header::HeaderState;
pub use lang::{ClickTarget, LangState, LangSwitcher};
pub use menu::{MenuView, MobileMenu};
pub use particles::{Connection, Particle, ParticleField};
pub use pointer::PointerState;
pub use reveal::{RevealAction, RevealTracker};

// Re-export geometry types so downstream crates don't need a direct dependency
pub use kurbo::{Point, Size, Vec2};
