//! Stateless request builder and response parser.
//!
//! # Design
//! `build_request` turns a path, a parameter object and a method into an
//! `HttpRequest`; `parse_response` turns an `HttpResponse` into JSON. Neither
//! touches the network, so both are covered by plain unit tests and by the
//! JSON vectors under `test-vectors/`.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Params;

/// Field some responses wrap their payload in.
pub const ENVELOPE_FIELD: &str = "data";

/// Serialize `params` as `key=value` pairs joined by `&`, values URL-encoded.
///
/// Only `A-Z a-z 0-9 - _ . ~` are left as-is, so `!'()*` are percent-encoded
/// too. Servers decode either form to the same value.
pub fn query_string(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(&param_text(value))))
        .collect::<Vec<_>>()
        .join("&")
}

/// Strings go out raw, everything else as its JSON text.
fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the request for `path`.
///
/// The query string is appended for every method. Non-GET requests also
/// carry `params` as a JSON body.
pub fn build_request(path: &str, params: &Params, method: HttpMethod) -> Result<HttpRequest, ApiError> {
    let query = query_string(params);
    let path = if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    };

    if method == HttpMethod::Get {
        return Ok(HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        });
    }

    let body = serde_json::to_string(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Check the status, parse JSON and unwrap the `data` envelope if present.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Network {
            status: response.status,
            body: response.body,
        });
    }
    let mut value: Value =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

    match value.get_mut(ENVELOPE_FIELD).map(Value::take) {
        Some(inner) if !inner.is_null() => Ok(inner),
        _ => Ok(value),
    }
}
