use serde::Serialize;
use serde_json::Value;

/// Free-form key/value data passed through to the app.
pub type Extras = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Notification-bar content, with optional per-platform overrides.
pub struct Notification {
    #[serde(skip_serializing_if = "is_false")]
    pub ai_opportunity: bool,
    /// Generic alert used by every platform without its own override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_app: Option<QuickAppNotification>,
    #[serde(rename = "winphone", skip_serializing_if = "Option::is_none")]
    pub win_phone: Option<WinPhoneNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip: Option<Extras>,
}

impl Notification {
    /// Notification carrying only the generic alert.
    pub fn alert(alert: impl Into<String>) -> Self {
        Self {
            alert: Some(alert.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndroidIntent {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AndroidNotification {
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Display priority, `-2..=2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 1 = big text, 2 = inbox, 3 = big picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_pic_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<AndroidIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_action: Option<String>,
    /// Badge increment, `1..=99`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_add_num: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    /// `yyyy-MM-dd HH:mm:ss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_end_time: Option<String>,
    /// `"1"` shows the notification while the app is in the foreground.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_foreground: Option<String>,
}

impl AndroidNotification {
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: alert.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IosNotification {
    /// A string, or an APNs alert dictionary.
    pub alert: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<Value>,
    /// A number, or a relative change such as `"+1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub content_available: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub mutable_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interruption_level: Option<InterruptionLevel>,
}

impl IosNotification {
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: Value::String(alert.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InterruptionLevel {
    Active,
    Critical,
    Passive,
    TimeSensitive,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuickAppNotification {
    pub title: String,
    pub alert: String,
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WinPhoneNotification {
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "_open_page", skip_serializing_if = "Option::is_none")]
    pub open_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Fallback notification delivered through vendor channels (`notification_3rd`).
///
/// Invariant: `content` is non-empty.
pub struct ThirdPartyNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_add_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

impl ThirdPartyNotification {
    pub const CONTENT_FIELD: &'static str = "notification_3rd content";

    /// Create a fallback notification; `content` must not be empty.
    pub fn new(content: impl Into<String>) -> Result<Self, crate::domain::ValidationError> {
        let content = content.into();
        if content.is_empty() {
            return Err(crate::domain::ValidationError::Missing {
                field: Self::CONTENT_FIELD,
            });
        }
        Ok(Self {
            title: None,
            content,
            channel_id: None,
            uri_activity: None,
            uri_action: None,
            badge_add_num: None,
            badge_class: None,
            sound: None,
            extras: None,
        })
    }

    /// Body text shown by the vendor channel.
    pub fn content(&self) -> &str {
        &self.content
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{Audience, Platform, PushPayload, ValidationError, validate_push};

    #[test]
    fn notification_omits_unset_fields() {
        let value = serde_json::to_value(Notification::alert("hello")).unwrap();
        assert_eq!(value, json!({ "alert": "hello" }));
    }

    #[test]
    fn platform_variants_use_wire_names() {
        let notification = Notification {
            ai_opportunity: true,
            android: Some(AndroidNotification {
                title: Some("title".to_owned()),
                intent: Some(AndroidIntent {
                    url: "intent:#Intent;end".to_owned(),
                }),
                ..AndroidNotification::new("android alert")
            }),
            ios: Some(IosNotification {
                badge: Some(json!("+1")),
                mutable_content: true,
                thread_id: Some("group".to_owned()),
                interruption_level: Some(InterruptionLevel::TimeSensitive),
                ..IosNotification::new("ios alert")
            }),
            win_phone: Some(WinPhoneNotification {
                alert: "wp".to_owned(),
                open_page: Some("/friends.xaml".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(notification).unwrap();
        assert_eq!(value["ai_opportunity"], json!(true));
        assert_eq!(value["android"]["alert"], json!("android alert"));
        assert_eq!(value["android"]["intent"]["url"], json!("intent:#Intent;end"));
        assert_eq!(value["ios"]["badge"], json!("+1"));
        assert_eq!(value["ios"]["mutable-content"], json!(true));
        assert_eq!(value["ios"]["thread-id"], json!("group"));
        assert_eq!(value["ios"]["interruption-level"], json!("timeSensitive"));
        assert!(value["ios"].get("content-available").is_none());
        assert_eq!(value["winphone"]["_open_page"], json!("/friends.xaml"));
        assert!(value.get("quick_app").is_none());
    }

    #[test]
    fn third_party_notification_requires_content() {
        assert!(ThirdPartyNotification::new("").is_err());
        let notification = ThirdPartyNotification::new("fallback").unwrap();
        assert_eq!(notification.content(), "fallback");
        assert_eq!(
            serde_json::to_value(notification).unwrap(),
            json!({ "content": "fallback" })
        );
    }

    #[test]
    fn push_with_empty_third_party_content_fails_validation() {
        let mut audience = Audience::default();
        audience.set_registration_id(["id1"]);
        let mut payload = PushPayload::new(Platform::All, audience);
        payload.notification_3rd = Some(ThirdPartyNotification {
            content: String::new(),
            ..ThirdPartyNotification::new("placeholder").unwrap()
        });

        assert!(matches!(
            validate_push(&payload),
            Err(ValidationError::Missing {
                field: ThirdPartyNotification::CONTENT_FIELD
            })
        ));

        payload.notification_3rd = Some(ThirdPartyNotification::new("fallback").unwrap());
        assert!(validate_push(&payload).is_ok());
    }
}
