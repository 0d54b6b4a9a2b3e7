//! API utilities for talking to the back-office REST service.
//!
//! All fetch seams return `Result<T, String>` carrying the raw server
//! message, which pages surface verbatim in banners or flash toasts.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document. `path_and_query` includes any query string.
pub async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&api_url(path_and_query))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_response(resp).await
}

/// POST a JSON body, expect a JSON document back.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_response(resp).await
}

/// POST a JSON body, ignore the response body.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        Err(error_message(resp).await)
    }
}

async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// The server reports failures as a plain-text body or a JSON document
/// with a `message` field; surface the message, falling back to the
/// status code.
async fn error_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP {}", status);
    }
    if let Ok(doc) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = doc.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    body
}
