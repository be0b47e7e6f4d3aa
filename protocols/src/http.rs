use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tourbook_common::error::GatewayError;

pub fn build_client(timeout: Duration) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Connection(e.to_string()))
}

/// Joins a base URL and a path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn map_send_error(error: reqwest::Error, timeout: Duration) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout(timeout.as_millis() as u64)
    } else if error.is_connect() {
        GatewayError::Connection(error.to_string())
    } else if error.is_decode() {
        GatewayError::Decode(error.to_string())
    } else {
        GatewayError::Rejected(error.to_string())
    }
}

/// Passes 2xx responses through and turns everything else into `GatewayError::Status`.
pub async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: String = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        code: status.as_u16(),
        body,
    })
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let response: Response = ensure_success(response).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| GatewayError::Connection(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
