//! Viewport-driven playback control for embedded clips.
//! Everything here is target independent; the DOM side lives in
//! `components::smart_clip` and `components::visibility_gate`.

mod error;
mod modality;
mod session;
mod visibility;

pub use error::*;
pub use modality::*;
pub use session::*;
pub use visibility::*;
