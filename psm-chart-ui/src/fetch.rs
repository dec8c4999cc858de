//! Browser-side loading of the two input sources.
//!
//! Both requests are issued together and must both succeed before anything
//! is parsed; any failure aborts initialization with a [`LoadError`].

use psm_core::{GeoFeature, LoadError};
use psm_db::Database;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::fetch(url, "no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::fetch(url, js_reason(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| LoadError::fetch(url, js_reason(&e)))?;
    if !response.ok() {
        return Err(LoadError::fetch(url, format!("HTTP {}", response.status())));
    }
    let body = response
        .text()
        .map_err(|e| LoadError::fetch(url, js_reason(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::fetch(url, js_reason(&e)))?;
    text.as_string()
        .ok_or_else(|| LoadError::fetch(url, "response body is not text"))
}

/// Fetch both sources concurrently, then load the store and parse the boundaries.
pub async fn load_sources(
    csv_url: &str,
    geojson_url: &str,
) -> Result<(Database, Vec<GeoFeature>), LoadError> {
    log::info!("fetch: loading {} and {}", csv_url, geojson_url);
    let (csv, geojson) = futures::try_join!(fetch_text(csv_url), fetch_text(geojson_url))?;
    let db = Database::from_csv(&csv)?;
    let features = GeoFeature::parse_collection(&geojson)?;
    Ok((db, features))
}
