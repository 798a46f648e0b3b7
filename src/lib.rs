//! Folio: core of a personal portfolio site.
//!
//! - `cursor`: pointer tracking, target classification, the Up/Down state
//!   machine and the mounted overlay with RAII listener subscriptions
//! - `rendering`: spring-smoothed cursor renderer, tweens, bulldozer icon
//! - `content`: static personal info and education records
//! - `sections`: hero/education markup, reveal-on-scroll, typewriter headline
//!
//! Everything here is host independent. The browser binding lives in the
//! `folio-web` crate under `wasm/site`.

pub mod config;
pub mod content;
pub mod cursor;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod rendering;
pub mod sections;
pub mod theme;

pub use config::{CursorConfig, SectionConfig, SiteConfig};
pub use cursor::{CursorOverlay, DisplayMode, InteractionFlags, PointerSample};
pub use error::{FolioError, FolioResult};
pub use theme::Theme;
