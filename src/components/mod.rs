//! The components module contains all shared components for the site.

mod app;
mod app_view;
mod icons;
mod pages;
mod reveal;
mod smart_clip;
mod sound_indicator;
mod visibility_gate;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use reveal::*;
pub use smart_clip::*;
pub use sound_indicator::*;
pub use visibility_gate::*;
// Routed pages are reached through `AppView`.
