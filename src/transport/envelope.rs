use serde::Deserialize;
use serde_json::Value;

use crate::domain::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ErrorJson {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// Extract the error object when the body is `{"error": {...}}`.
///
/// Arrays and objects without an `error` object are never envelopes.
pub(super) fn find_error(json: &str) -> Option<ErrorJson> {
    let mut value: Value = serde_json::from_str(json).ok()?;
    let error = value
        .as_object_mut()
        .and_then(|object| object.remove("error"))
        .filter(Value::is_object)?;
    serde_json::from_value(error).ok()
}

/// Turn a failed response into an [`ApiError`].
///
/// Falls back to the raw body as message when it is not a usable envelope.
pub fn decode_api_error(status: u16, body: &str) -> ApiError {
    let (code, message) = match find_error(body) {
        Some(error) if !error.message.is_empty() => (error.code, error.message),
        Some(error) => (error.code, body.to_owned()),
        None => (None, body.to_owned()),
    };

    ApiError {
        status,
        code,
        message,
        raw_body: body.to_owned(),
    }
}
