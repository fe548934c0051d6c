use serde::Deserialize;

use super::id::TransportId;
use super::{TransportError, decode_success};
use crate::domain::{SmsPayload, SmsResult};

#[derive(Debug, Clone, Deserialize)]
struct SmsJsonResponse {
    msg_id: TransportId,
}

pub fn encode_sms_json(payload: &SmsPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

pub fn decode_sms_json_response(json: &str) -> Result<SmsResult, TransportError> {
    let parsed: SmsJsonResponse = decode_success(json)?;
    Ok(SmsResult {
        msg_id: parsed.msg_id.into_string(),
    })
}
