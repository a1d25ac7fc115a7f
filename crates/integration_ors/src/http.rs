//! Shared request/response handling for both clients

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::OrsConfig;
use crate::error::OrsError;

/// Build an HTTP client with the configured timeout and user agent
pub(crate) fn build_client(config: &OrsConfig, timeout_secs: u64) -> Result<Client, OrsError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| OrsError::ConnectionFailed(e.to_string()))
}

/// Attach the API key and accept header
pub(crate) fn authorize(builder: RequestBuilder, api_key: &str) -> RequestBuilder {
    builder
        .header(AUTHORIZATION, api_key)
        .header(ACCEPT, "application/json, application/geo+json")
}

/// Send a request and decode a successful JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    timeout_secs: u64,
) -> Result<T, OrsError> {
    let response = builder
        .send()
        .await
        .map_err(|e| OrsError::from_transport(&e, timeout_secs))?;

    let response = check_status(response)?;

    let body = response
        .text()
        .await
        .map_err(|e| OrsError::from_transport(&e, timeout_secs))?;

    serde_json::from_str(&body).map_err(|e| OrsError::ParseError(e.to_string()))
}

fn check_status(response: Response) -> Result<Response, OrsError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(OrsError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        });
    }

    if !status.is_success() {
        return Err(OrsError::RequestFailed {
            status: status.as_u16(),
        });
    }

    Ok(response)
}
