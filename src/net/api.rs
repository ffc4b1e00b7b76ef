//! REST API functions, one per backend endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning an error, since submissions only happen in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<T, String>` where the `Err` string is
//! already normalized for display: the backend's `{detail}` body when one
//! parses, a generic status line for other HTTP failures, and a generic
//! network message when the request never settles. Timeouts, 4xx, and 5xx
//! are deliberately not distinguished.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    CropRegionPayload, MarketAnalysis, ProfitPayload, ProfitPrediction, SchemePayload,
    SchemeReport, WeatherAdvice,
};
#[cfg(feature = "hydrate")]
use super::types::CropDiagnosis;

/// Shown when the request never reached the backend or the reply was
/// unreadable.
pub const NETWORK_ERROR: &str = "Unable to reach the server. Please check your connection and try again.";

/// Resolve the API base URL for the current deployment.
///
/// Local development talks straight to the backend process; any other host
/// goes through the deployment's `/api` path prefix.
pub fn base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        if hostname == "localhost" || hostname == "127.0.0.1" {
            "http://localhost:8000".to_owned()
        } else {
            "/api".to_owned()
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/api".to_owned()
    }
}

/// Normalize a non-2xx response into a display string.
///
/// Prefers the backend's `{detail}` body; falls back to the status code.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| format!("The server returned an error (status {status})."))
}

/// POST a JSON payload and decode a JSON response.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, payload: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = format!("{}{path}", base_url());
    let request = gloo_net::http::Request::post(&url)
        .json(payload)
        .map_err(|e| {
            leptos::logging::warn!("failed to encode {path} payload: {e}");
            NETWORK_ERROR.to_owned()
        })?;
    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("POST {path} failed: {e}");
        NETWORK_ERROR.to_owned()
    })?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    resp.json::<T>().await.map_err(|e| {
        leptos::logging::warn!("POST {path} returned an unreadable body: {e}");
        NETWORK_ERROR.to_owned()
    })
}

/// Fetch weather and irrigation advice via `POST /weather-irrigation`.
pub async fn fetch_weather_advice(payload: CropRegionPayload) -> Result<WeatherAdvice, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/weather-irrigation", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Fetch a market analysis via `POST /smart-market`.
pub async fn fetch_market_analysis(payload: CropRegionPayload) -> Result<MarketAnalysis, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/smart-market", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Look up government schemes via `POST /govt-schemes`.
pub async fn fetch_schemes(payload: SchemePayload) -> Result<SchemeReport, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/govt-schemes", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Request a profit prediction via `POST /crop-profit`.
pub async fn predict_profit(payload: ProfitPayload) -> Result<ProfitPrediction, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/crop-profit", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Upload a crop photo for diagnosis via `POST /crop-doctor`.
///
/// The image goes up as a multipart form with a single `file` part, the
/// only non-JSON request in the application.
#[cfg(feature = "hydrate")]
pub async fn diagnose_crop(file: web_sys::File) -> Result<CropDiagnosis, String> {
    let form = web_sys::FormData::new().map_err(|_| NETWORK_ERROR.to_owned())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| NETWORK_ERROR.to_owned())?;

    let url = format!("{}/crop-doctor", base_url());
    let request = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| {
            leptos::logging::warn!("failed to build crop-doctor upload: {e}");
            NETWORK_ERROR.to_owned()
        })?;
    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("POST /crop-doctor failed: {e}");
        NETWORK_ERROR.to_owned()
    })?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    resp.json::<CropDiagnosis>().await.map_err(|e| {
        leptos::logging::warn!("POST /crop-doctor returned an unreadable body: {e}");
        NETWORK_ERROR.to_owned()
    })
}
