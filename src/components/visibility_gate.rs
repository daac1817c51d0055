//! Scroll visibility for a DOM region, as a live boolean signal.
//! A missing target leaves the signal false for good.

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

use crate::playback::{crosses_threshold, MediaError, VisibilityLatch, VisibilityOptions};

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One intersection report as sent from the webview observer script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
struct ObserverReport {
    intersecting: bool,
    ratio: f64,
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(target_arch = "wasm32")]
fn observe(
    target_id: &str,
    options: VisibilityOptions,
    visible: Signal<bool>,
) -> Result<ObserverHandle, MediaError> {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(target_id))
        .ok_or_else(|| MediaError::ConfigurationMissing(target_id.to_string()))?;

    let runtime = Runtime::current();
    let mut latch = VisibilityLatch::new(options);
    let mut visible = visible;
    let threshold = options.threshold;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let _guard = RuntimeGuard::new(runtime.clone());
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let in_view = crosses_threshold(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if let Some(value) = latch.report(in_view) {
                    visible.set(value);
                }
                if latch.is_settled() {
                    observer.disconnect();
                    break;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| MediaError::bridge(format!("{err:?}")))?;
    observer.observe(&element);

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

#[cfg(target_arch = "wasm32")]
pub fn use_visibility(target_id: &str, options: VisibilityOptions) -> ReadSignal<bool> {
    let visible = use_signal(|| false);
    let gate = use_hook(|| ReadSignal::from(visible));
    let target_id = use_hook(|| target_id.to_string());
    let handle = use_hook(|| Rc::new(RefCell::new(None::<ObserverHandle>)));

    {
        let handle = handle.clone();
        use_effect(move || {
            if handle.borrow().is_some() {
                return;
            }
            match observe(&target_id, options, visible) {
                Ok(observer) => *handle.borrow_mut() = Some(observer),
                Err(err) => debug!(%err, "visibility gate stays closed"),
            }
        });
    }

    use_drop(move || {
        handle.borrow_mut().take();
    });

    gate
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn observer_script(target_id: &str, threshold: f64) -> String {
    let id = serde_json::to_string(target_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const target = document.getElementById({id});
        if (!target) {{
            dioxus.send(null);
            return;
        }}
        window.__allinObservers = window.__allinObservers || {{}};
        const prior = window.__allinObservers[{id}];
        if (prior) prior.disconnect();
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                dioxus.send({{ intersecting: entry.isIntersecting, ratio: entry.intersectionRatio }});
            }}
        }}, {{ threshold: {threshold} }});
        observer.observe(target);
        window.__allinObservers[{id}] = observer;"#
    )
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn disconnect_script(target_id: &str) -> String {
    let id = serde_json::to_string(target_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const observers = window.__allinObservers || {{}};
        if (observers[{id}]) {{
            observers[{id}].disconnect();
            delete observers[{id}];
        }}"#
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_visibility(target_id: &str, options: VisibilityOptions) -> ReadSignal<bool> {
    let visible = use_signal(|| false);
    let gate = use_hook(|| ReadSignal::from(visible));
    let target_id = use_hook(|| target_id.to_string());

    {
        let target_id = target_id.clone();
        use_effect(move || {
            let target_id = target_id.clone();
            let mut visible = visible;
            spawn(async move {
                let mut eval = document::eval(&observer_script(&target_id, options.threshold));
                let mut latch = VisibilityLatch::new(options);
                loop {
                    match eval.recv::<Option<ObserverReport>>().await {
                        Ok(Some(report)) => {
                            let in_view =
                                crosses_threshold(report.intersecting, report.ratio, options.threshold);
                            if let Some(value) = latch.report(in_view) {
                                visible.set(value);
                            }
                            if latch.is_settled() {
                                let _ = document::eval(&disconnect_script(&target_id));
                                break;
                            }
                        }
                        Ok(None) => {
                            let err = MediaError::ConfigurationMissing(target_id.clone());
                            debug!(%err, "visibility gate stays closed");
                            break;
                        }
                        Err(err) => {
                            debug!(target = %target_id, error = ?err, "visibility observer closed");
                            break;
                        }
                    }
                }
            });
        });
    }

    use_drop(move || {
        let _ = document::eval(&disconnect_script(&target_id));
    });

    gate
}
