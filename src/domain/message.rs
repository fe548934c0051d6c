use serde::Serialize;
use serde_json::Value;

use crate::domain::notification::Extras;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Custom in-app message; not shown in the notification bar.
pub struct Message {
    pub msg_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub extras: Extras,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            msg_content: content.into(),
            ..Default::default()
        }
    }

    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Show notification content as an in-app message for users with notifications disabled.
pub struct InAppMessage {
    pub inapp_message: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// SMS fallback sent to users the push did not reach (`sms_message`).
pub struct SmsMessage {
    /// Seconds to wait before sending; at most 24 hours, 0 sends immediately.
    pub delay_time: u32,
    #[serde(rename = "signid", skip_serializing_if = "Option::is_none")]
    pub sign_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<u64>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub temp_para: Extras,
    pub active_filter: bool,
}

impl Default for SmsMessage {
    fn default() -> Self {
        Self {
            delay_time: 0,
            sign_id: None,
            temp_id: None,
            temp_para: Extras::new(),
            active_filter: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_serializes_extras_only_when_present() {
        let mut message = Message::new("hi");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "msg_content": "hi" })
        );

        message.title = Some("greeting".to_owned());
        message.add_extra("k", "v").add_extra("n", 1);
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "msg_content": "hi",
                "title": "greeting",
                "extras": { "k": "v", "n": 1 }
            })
        );
    }

    #[test]
    fn sms_message_defaults_to_active_filter() {
        let value = serde_json::to_value(SmsMessage {
            temp_id: Some(5),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "delay_time": 0, "temp_id": 5, "active_filter": true })
        );
    }
}
