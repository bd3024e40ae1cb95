//! Fetches the precipitation records from the static JSON resource.

use anyhow::{anyhow, bail};
use precip_core::record::{parse_payload, PrecipitationRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `path` (same-origin) and parse the body as a precipitation payload.
///
/// Single attempt: no retry, caching or timeout.
pub async fn fetch_precipitation(path: &str) -> anyhow::Result<Vec<PrecipitationRecord>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into::<Response>()
        .map_err(js_error)?;
    if !response.ok() {
        bail!("GET {} returned HTTP {}", path, response.status());
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| anyhow!("response body of {} is not text", path))?;

    log::info!("fetched {} ({} bytes)", path, body.len());
    parse_payload(&body)
}
