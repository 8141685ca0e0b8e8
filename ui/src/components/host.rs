//! Browser surface the order flow touches: the host identity bridge, the
//! payment-proof file input, alerts and the contact link.
//!
//! Every helper degrades to a no-op when the element or host is missing.

use serde_json::Value;

use super::order_api::ProofFile;

/// DOM id of the payment-proof file input.
pub const PROOF_INPUT_ID: &str = "payment-proof";

/// Current user as exposed by the embedding messenger
/// (`window.Telegram.WebApp.initDataUnsafe`), or `None` outside a host.
#[cfg(target_family = "wasm")]
pub fn host_identity() -> Option<Value> {
    use wasm_bindgen::JsValue;

    let mut node: JsValue = web_sys::window()?.into();
    for key in ["Telegram", "WebApp", "initDataUnsafe"] {
        node = js_sys::Reflect::get(&node, &JsValue::from_str(key)).ok()?;
        if node.is_undefined() || node.is_null() {
            return None;
        }
    }
    serde_wasm_bindgen::from_value(node).ok()
}

#[cfg(not(target_family = "wasm"))]
pub fn host_identity() -> Option<Value> {
    None
}

#[cfg(target_family = "wasm")]
fn proof_input() -> Option<web_sys::HtmlInputElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(PROOF_INPUT_ID)?
        .dyn_into()
        .ok()
}

/// File currently chosen in the payment-proof input.
#[cfg(target_family = "wasm")]
pub fn selected_proof() -> Option<ProofFile> {
    proof_input()?.files()?.get(0)
}

#[cfg(not(target_family = "wasm"))]
pub fn selected_proof() -> Option<ProofFile> {
    None
}

/// Drop any file left in the payment-proof input from a previous order.
pub fn clear_proof_input() {
    #[cfg(target_family = "wasm")]
    {
        if let Some(input) = proof_input() {
            input.set_value("");
        }
    }
}

/// Blocking user-facing message.
pub fn show_alert(message: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    tracing::info!("{message}");
}

/// Open the contact channel in a new browsing context.
pub fn open_contact(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!("Failed to open contact link: {:?}", e);
            }
            return;
        }
    }
    tracing::info!("Contact us at {url}");
}

/// Wait one cooldown tick.
pub async fn one_second() {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(1_000).await;
}
