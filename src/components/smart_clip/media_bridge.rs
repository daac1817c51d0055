// Element commands for clip <video> elements plus the two platform queries the
// controller needs (hover capability and a sleep for the start timer).
// wasm talks to the DOM through web-sys; desktop/mobile webviews go through
// `document::eval` scripts.
use std::time::Duration;

use serde::Deserialize;

use crate::playback::{InputModality, MediaError, MediaResult, PlayWhen, HOVER_NONE_QUERY};

#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

/// Result shape returned by the eval scripts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
struct BridgeReply {
    ok: bool,
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const UNAVAILABLE: &str = "ElementUnavailable";

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn reply_result(id: &str, reply: BridgeReply) -> MediaResult<()> {
    if reply.ok {
        return Ok(());
    }
    if reply.name == UNAVAILABLE {
        return Err(MediaError::unavailable(id));
    }
    Err(MediaError::from_rejection(&reply.name, &reply.message))
}

#[cfg(target_arch = "wasm32")]
fn video_element(id: &str) -> MediaResult<HtmlVideoElement> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| MediaError::unavailable(id))?;

    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok())
        .filter(|video| video.is_connected())
        .ok_or_else(|| MediaError::unavailable(id))
}

#[cfg(target_arch = "wasm32")]
fn rejection(err: JsValue) -> MediaError {
    let field = |key: &str| {
        js_sys::Reflect::get(&err, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    };
    MediaError::from_rejection(&field("name"), &field("message"))
}

#[cfg(target_arch = "wasm32")]
pub fn seek_to_start(id: &str) -> MediaResult<()> {
    video_element(id)?.set_current_time(0.0);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn set_muted(id: &str, muted: bool) -> MediaResult<()> {
    video_element(id)?.set_muted(muted);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn pause(id: &str) -> MediaResult<()> {
    video_element(id)?
        .pause()
        .map_err(|err| MediaError::bridge(format!("{err:?}")))
}

/// Resolves once the element's play() promise settles.
#[cfg(target_arch = "wasm32")]
pub async fn play(id: String, when: PlayWhen) -> MediaResult<()> {
    let video = video_element(&id)?;
    if when == PlayWhen::IfPaused && !video.paused() {
        return Ok(());
    }
    let promise = video.play().map_err(rejection)?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(rejection)
}

#[cfg(target_arch = "wasm32")]
pub async fn detect_modality() -> InputModality {
    let hover_none = window()
        .and_then(|w| w.match_media(HOVER_NONE_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    InputModality::from_hover_none(hover_none)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay: Duration) {
    let millis = delay.as_millis().min(u128::from(u32::MAX)) as u32;
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn element_script(id: &str, body: &str) -> String {
    let id = js_string(id);
    format!(
        r#"return await (async function () {{
            const video = document.getElementById({id});
            if (!video || !video.isConnected) {{
                return {{ ok: false, name: "{UNAVAILABLE}", message: "" }};
            }}
            {body}
        }})();"#
    )
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn play_body(when: PlayWhen) -> &'static str {
    match when {
        PlayWhen::Always => {
            r#"try {
                await video.play();
                return { ok: true };
            } catch (err) {
                return { ok: false, name: String(err && err.name || ""), message: String(err && err.message || err) };
            }"#
        }
        PlayWhen::IfPaused => {
            r#"if (!video.paused) return { ok: true };
            try {
                await video.play();
                return { ok: true };
            } catch (err) {
                return { ok: false, name: String(err && err.name || ""), message: String(err && err.message || err) };
            }"#
        }
    }
}

/// Property writes are sent to the webview immediately so they keep their
/// order; the reply is only awaited for diagnostics.
#[cfg(not(target_arch = "wasm32"))]
fn apply_in_webview(id: &str, body: &str) -> MediaResult<()> {
    let eval = document::eval(&element_script(id, body));
    let id = id.to_string();
    spawn(async move {
        match eval.join::<BridgeReply>().await {
            Ok(reply) => {
                if let Err(err) = reply_result(&id, reply) {
                    debug!(clip = %id, %err, "media command skipped");
                }
            }
            Err(err) => debug!(clip = %id, error = ?err, "media bridge eval failed"),
        }
    });
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to_start(id: &str) -> MediaResult<()> {
    apply_in_webview(id, "video.currentTime = 0; return { ok: true };")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_muted(id: &str, muted: bool) -> MediaResult<()> {
    apply_in_webview(id, &format!("video.muted = {muted}; return {{ ok: true }};"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause(id: &str) -> MediaResult<()> {
    apply_in_webview(id, "video.pause(); return { ok: true };")
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn play(id: String, when: PlayWhen) -> MediaResult<()> {
    let reply = document::eval(&element_script(&id, play_body(when)))
        .join::<BridgeReply>()
        .await
        .map_err(|err| MediaError::bridge(format!("{err:?}")))?;
    reply_result(&id, reply)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn detect_modality() -> InputModality {
    let query = js_string(HOVER_NONE_QUERY);
    let hover_none = document::eval(&format!(
        "return !!(window.matchMedia && window.matchMedia({query}).matches);"
    ))
    .join::<bool>()
    .await
    .unwrap_or(false);
    InputModality::from_hover_none(hover_none)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(ok: bool, name: &str) -> BridgeReply {
        BridgeReply {
            ok,
            name: name.to_string(),
            message: "details".to_string(),
        }
    }

    #[test]
    fn replies_map_onto_media_errors() {
        assert_eq!(reply_result("clip-a", reply(true, "")), Ok(()));
        assert_eq!(
            reply_result("clip-a", reply(false, UNAVAILABLE)),
            Err(MediaError::unavailable("clip-a"))
        );
        assert!(reply_result("clip-a", reply(false, "NotAllowedError"))
            .unwrap_err()
            .is_blocked());
    }

    #[test]
    fn reply_fields_are_optional() {
        let parsed: BridgeReply = serde_json::from_str(r#"{ "ok": true }"#).unwrap();
        assert!(parsed.ok);
        assert!(parsed.name.is_empty());
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn scripts_escape_the_element_id() {
        let script = element_script("clip-\"x\"", "return { ok: true };");
        assert!(script.contains(r#"document.getElementById("clip-\"x\"")"#));
        assert!(script.contains(UNAVAILABLE));
        assert!(play_body(PlayWhen::IfPaused).contains("video.paused"));
        assert!(!play_body(PlayWhen::Always).contains("video.paused"));
    }
}
