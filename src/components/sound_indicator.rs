use crate::components::Icon;
use crate::playback::SoundGlyph;
use dioxus::prelude::*;

pub fn indicator_class(glyph: SoundGlyph) -> &'static str {
    match glyph {
        SoundGlyph::Muted => "sound-indicator muted",
        SoundGlyph::Unmuted => "sound-indicator unmuted",
    }
}

pub fn indicator_icon(glyph: SoundGlyph) -> &'static str {
    match glyph {
        SoundGlyph::Muted => "volume-off",
        SoundGlyph::Unmuted => "volume-on",
    }
}

/// Mute readout for a clip. Hidden until the first autoplay attempt.
#[component]
pub fn SoundIndicator(has_started: bool, muted: bool) -> Element {
    let Some(glyph) = SoundGlyph::for_state(has_started, muted) else {
        return rsx! {};
    };

    rsx! {
        div { class: "{indicator_class(glyph)}", aria_hidden: "true",
            Icon {
                name: indicator_icon(glyph).to_string(),
                class: "sound-indicator-icon".to_string(),
            }
        }
    }
}
