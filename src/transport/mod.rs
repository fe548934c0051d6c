//! Transport layer: JSON wire format of requests, responses and the error envelope.

mod cid;
mod envelope;
mod id;
mod push;
mod report;
mod schedule;
mod sms;

use serde::de::DeserializeOwned;

pub use cid::decode_cid_json_response;
pub use envelope::decode_api_error;
pub use push::{decode_push_json_response, encode_push_json};
pub use report::{decode_received_json_response, encode_msg_ids};
pub use schedule::{decode_schedule_json_response, encode_schedule_json};
pub use sms::{decode_sms_json_response, encode_sms_json};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("successful response carries an error envelope: {code:?} {message}")]
    ErrorEnvelope { code: Option<i64>, message: String },

    #[error("response contains non-numeric msg_id: {raw}")]
    InvalidMsgId { raw: String },

    #[error("response contains empty schedule_id")]
    EmptyScheduleId,
}

/// Decode a 2xx body, refusing bodies that are really an error envelope.
fn decode_success<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    if let Some(error) = envelope::find_error(json) {
        return Err(TransportError::ErrorEnvelope {
            code: error.code,
            message: error.message,
        });
    }
    Ok(serde_json::from_str(json)?)
}
