use super::{FeedError, FeedShape};
use reqwest::{blocking::Client, Url};
use serde_json::Value;

/// top-level key the feed uses to report a failed command inside a
/// successful HTTP response
const SERVICE_ERROR_KEY: &str = "Error";

/// issues a single blocking GET for `url` and decodes the body into the
/// response shape `S`.
///
/// # Arguments
///
/// * `http` - client used to issue the request
/// * `url`  - fully built request URL for `S::COMMAND`
///
/// # Returns
///
/// * the unwrapped record of `S`, or a network, service or decode error.
///   a non-success status is reported without reading the body.
pub fn fetch_shape<S: FeedShape>(http: &Client, url: &Url) -> Result<S::Output, FeedError> {
    log::debug!("GET {url}");
    let response = http
        .get(url.clone())
        .send()
        .map_err(|e| network_error(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::NetworkError {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("server responded with status {status}"),
        });
    }
    let body = response.bytes().map_err(|e| network_error(url, e))?;
    log::debug!("{} response: {} bytes", S::COMMAND, body.len());
    decode_body::<S>(&body)
}

/// decodes a feed response body into the response shape `S`. unknown fields
/// are ignored and missing fields take their empty value, but malformed JSON
/// or a field of the wrong type fails.
pub fn decode_body<S: FeedShape>(body: &[u8]) -> Result<S::Output, FeedError> {
    let value: Value = serde_json::from_slice(body).map_err(|source| FeedError::DecodeError {
        command: S::COMMAND,
        source,
    })?;
    if let Some(error) = value.get(SERVICE_ERROR_KEY) {
        return Err(service_error::<S>(error));
    }
    let shape = serde_json::from_value::<S>(value).map_err(|source| FeedError::DecodeError {
        command: S::COMMAND,
        source,
    })?;
    Ok(shape.into_output())
}

fn service_error<S: FeedShape>(error: &Value) -> FeedError {
    let message = match error.get("content") {
        Some(Value::String(content)) => content.trim().to_string(),
        Some(other) => other.to_string(),
        None => error.to_string(),
    };
    let should_retry = error
        .get("shouldRetry")
        .and_then(Value::as_str)
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or_default();
    FeedError::ServiceError {
        command: S::COMMAND,
        message,
        should_retry,
    }
}

fn network_error(url: &Url, e: reqwest::Error) -> FeedError {
    FeedError::NetworkError {
        url: url.to_string(),
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}
