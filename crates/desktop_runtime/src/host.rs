//! Browser host boundary: viewport queries and the DOM side of runtime effects.

use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::WindowId;

const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// DOM id of the primary text input inside a window body.
pub fn window_input_dom_id(window_id: &WindowId) -> String {
    format!("window-input-{}", window_id.dom_key())
}

/// Current browser viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(width) = web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
        {
            return width.max(320.0);
        }
    }

    FALLBACK_VIEWPORT_WIDTH
}

/// Focuses the window's primary input on the next tick, after the window body has rendered.
pub fn focus_window_input(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_input_dom_id(window_id);
        let callback = Closure::once_into_js(move || {
            if !crate::components::a11y::focus_element_by_id(&dom_id) {
                logging::warn!("no focusable input `{dom_id}`");
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub fn open_external_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let opened = web_sys::window()
            .map(|window| window.open_with_url_and_target(url, "_blank"))
            .transpose();
        if let Err(err) = opened {
            logging::warn!("open external url failed for `{url}`: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::log!("open external url `{url}`");
}
