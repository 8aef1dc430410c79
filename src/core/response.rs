// src/core/response.rs
//! Response body parsing and error-message normalization.
//!
//! A non-success status always becomes [`ApiError::Http`]. Its message comes
//! from the first usable source: a `detail`, `message` or `error` field of a
//! JSON object body, then a non-empty text body, then a fixed sentence for the
//! status code.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use super::transport::HttpResponse;
use crate::error::ApiError;

const ERROR_FIELDS: [&str; 3] = ["detail", "message", "error"];

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Parse as JSON when the response declares a JSON content type, otherwise as text
pub fn parse_body(response: &HttpResponse) -> Result<ResponseBody, serde_json::Error> {
    if is_json_content_type(response.content_type.as_deref()) {
        serde_json::from_slice(&response.body).map(ResponseBody::Json)
    } else {
        Ok(ResponseBody::Text(
            String::from_utf8_lossy(&response.body).into_owned(),
        ))
    }
}

/// Fixed sentence for a status code when the body carries no message
pub fn status_message(status: u16) -> String {
    let sentence = match status {
        400 => "Bad Request: The request was invalid. Please check your input and try again.",
        401 => "Unauthorized: Authentication is required to access this resource.",
        403 => "Forbidden: You do not have permission to access this resource.",
        404 => "Not Found: The requested resource could not be found.",
        429 => "Too Many Requests: Rate limit exceeded. Please wait a moment and try again.",
        500 => "Internal Server Error: Something went wrong on the server. Please try again later.",
        502 => "Bad Gateway: The server received an invalid response from an upstream service.",
        503 => "Service Unavailable: The service is temporarily unavailable. Please try again later.",
        other => return format!("Server Error ({}): An unexpected error occurred.", other),
    };
    sentence.to_string()
}

fn field_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

/// Build the message for a failed response
pub fn error_message(status: u16, body: &ResponseBody) -> String {
    let from_body = match body {
        ResponseBody::Json(Value::Object(map)) => ERROR_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(field_message)),
        ResponseBody::Json(Value::String(text)) | ResponseBody::Text(text)
            if !text.trim().is_empty() =>
        {
            Some(text.trim().to_string())
        }
        _ => None,
    };

    from_body.unwrap_or_else(|| status_message(status))
}

/// Pass successful responses through; turn every other status into an HTTP error
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    let body = parse_body(&response).unwrap_or_else(|_| {
        ResponseBody::Text(String::from_utf8_lossy(&response.body).into_owned())
    });
    let message = error_message(response.status, &body);
    error!("Service error response ({}): {}", response.status, message);

    Err(ApiError::Http {
        status: response.status,
        message,
    })
}

/// Decode a successful response into `T`. Undecodable bodies are reported as
/// network failures.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let decoded = match parse_body(response) {
        Ok(ResponseBody::Json(value)) => serde_json::from_value(value),
        // Some deployments omit the content type on JSON bodies
        Ok(ResponseBody::Text(text)) => serde_json::from_str(&text),
        Err(e) => Err(e),
    };

    decoded.map_err(|e| {
        warn!("Failed to decode service response: {}", e);
        ApiError::Network
    })
}
