use serde::Serialize;
use serde_json::Value;

use crate::domain::notification::Extras;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Template SMS sent through `POST /v1/messages`.
pub struct SmsPayload {
    pub mobile: String,
    #[serde(rename = "signid", skip_serializing_if = "Option::is_none")]
    pub sign_id: Option<u32>,
    pub temp_id: u64,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub temp_para: Extras,
}

impl SmsPayload {
    pub const MOBILE_FIELD: &'static str = "mobile";
    pub const TEMP_ID_FIELD: &'static str = "temp_id";

    pub fn new(mobile: impl Into<String>, temp_id: u64) -> Self {
        Self {
            mobile: mobile.into(),
            temp_id,
            ..Default::default()
        }
    }

    /// Set one template parameter, e.g. `code` for verification templates.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.temp_para.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sms_payload_serializes_template_params() {
        let mut payload = SmsPayload::new("13800138000", 1);
        payload.sign_id = Some(12);
        payload.add_param("code", "141238");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "mobile": "13800138000",
                "signid": 12,
                "temp_id": 1,
                "temp_para": { "code": "141238" }
            })
        );
    }
}
