//! WASM HTTP client posting orders to the storefront backend.
//!
//! Builds a browser `FormData` from the assembled order and sends it with
//! `fetch`. The endpoint comes from the session config (`/api/order`, or
//! `STARSHOP_API_URL` at compile time).

use starshop_common::submit::{OrderRequest, OrderTransport, RawResponse, SubmitError};

/// Payment proof handle picked from the file input.
#[cfg(target_family = "wasm")]
pub type ProofFile = web_sys::File;
#[cfg(not(target_family = "wasm"))]
pub type ProofFile = ();

/// `fetch`-based order transport. Only functional in WASM builds.
pub struct BrowserTransport;

impl OrderTransport for BrowserTransport {
    type File = ProofFile;

    async fn post_order(
        &self,
        endpoint: &str,
        request: OrderRequest<ProofFile>,
    ) -> Result<RawResponse, SubmitError> {
        post_multipart(endpoint, request)
            .await
            .map_err(SubmitError::Transport)
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn post_multipart(
    url: &str,
    request: OrderRequest<web_sys::File>,
) -> Result<RawResponse, String> {
    use starshop_common::submit::FormPart;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let form = web_sys::FormData::new().map_err(|e| format!("Failed to create form: {:?}", e))?;
    for part in request.parts {
        let appended = match part {
            FormPart::Text { name, value } => form.append_with_str(name, &value),
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, &file, &file.name())
            }
        };
        appended.map_err(|e| format!("Failed to append form field: {:?}", e))?;
    }

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    // An unreadable body is not fatal: the status still decides the outcome.
    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    Ok(RawResponse {
        status: resp.status(),
        body,
    })
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn post_multipart(_url: &str, _request: OrderRequest<()>) -> Result<RawResponse, String> {
    Err("Order client only available in WASM".to_string())
}
