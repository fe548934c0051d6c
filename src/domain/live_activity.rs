use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosLiveActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveActivityEvent {
    Start,
    Update,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// iOS live activity update, mirroring the APNs live-activity fields.
///
/// `attributes_type` and `attributes` are required by the service for
/// [`LiveActivityEvent::Start`] only.
pub struct IosLiveActivity {
    pub event: LiveActivityEvent,
    pub content_state: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<LiveActivityAlert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal_date: Option<i64>,
}

impl IosLiveActivity {
    pub fn new(event: LiveActivityEvent, content_state: Value) -> Self {
        Self {
            event,
            content_state,
            attributes_type: None,
            attributes: None,
            relevance_score: None,
            stale_date: None,
            alert: None,
            dismissal_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveActivityAlert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn live_activity_uses_kebab_case_keys() {
        let activity = LiveActivity {
            ios: Some(IosLiveActivity {
                attributes_type: Some("DeliveryAttributes".to_owned()),
                attributes: Some(json!({ "order": "42" })),
                stale_date: Some(1_700_000_000),
                alert: Some(LiveActivityAlert {
                    title: Some("On the way".to_owned()),
                    ..Default::default()
                }),
                ..IosLiveActivity::new(LiveActivityEvent::Start, json!({ "eta": 5 }))
            }),
        };

        assert_eq!(
            serde_json::to_value(activity).unwrap(),
            json!({
                "ios": {
                    "event": "start",
                    "content-state": { "eta": 5 },
                    "attributes-type": "DeliveryAttributes",
                    "attributes": { "order": "42" },
                    "stale-date": 1_700_000_000,
                    "alert": { "title": "On the way" }
                }
            })
        );
    }
}
