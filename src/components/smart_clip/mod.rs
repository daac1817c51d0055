//! Autoplaying team clip: muted autoplay once in view, sound on hover (or
//! tap on touch screens), muted loop while visible, reset when scrolled away.

mod driver;
mod media_bridge;

use dioxus::prelude::*;

use crate::components::SoundIndicator;
use crate::i18n::{t, Locale};
use crate::playback::{InputModality, Interaction, MediaEvent};
use driver::use_clip_driver;

#[component]
pub fn SmartClip(id: String, src: String, stagger_ms: u32, visible: ReadSignal<bool>) -> Element {
    let modality = use_resource(media_bridge::detect_modality);
    let detected = *modality.read();

    match detected {
        Some(modality) => rsx! {
            ClipStage {
                id,
                src,
                stagger_ms,
                visible,
                modality,
            }
        },
        None => rsx! {
            div { class: "team-video-section team-video-pending" }
        },
    }
}

/// Mounted once the input modality is known; owns the session for its
/// whole lifetime.
#[component]
fn ClipStage(
    id: String,
    src: String,
    stagger_ms: u32,
    visible: ReadSignal<bool>,
    modality: InputModality,
) -> Element {
    let locale = use_context::<Signal<Locale>>();
    let driver = use_clip_driver(&id, modality, stagger_ms, visible);

    let (has_started, muted) = {
        let session = driver.session();
        let current = session.read();
        (current.has_started(), current.muted())
    };
    let fallback = t(locale(), "video.fallback");

    rsx! {
        div {
            class: "team-video-section",
            onmouseenter: move |_| driver.dispatch(MediaEvent::Interaction(Interaction::PointerEnter)),
            onmouseleave: move |_| driver.dispatch(MediaEvent::Interaction(Interaction::PointerLeave)),
            onclick: move |_| driver.dispatch(MediaEvent::Interaction(Interaction::Tap)),
            video {
                id: "{id}",
                class: "team-video",
                playsinline: true,
                preload: "metadata",
                muted: true,
                onended: move |_| driver.dispatch(MediaEvent::Ended),
                source { src: "{src}", r#type: "video/mp4" }
                "{fallback}"
            }
            SoundIndicator { has_started, muted }
        }
    }
}
