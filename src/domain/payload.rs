use serde::Serialize;

use crate::domain::audience::Audience;
use crate::domain::live_activity::LiveActivity;
use crate::domain::message::{InAppMessage, Message, SmsMessage};
use crate::domain::notification::{Extras, Notification, ThirdPartyNotification};
use crate::domain::options::Options;
use crate::domain::platform::Platform;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Per-push override of the receipt callback configured in the JPush console.
pub struct Callback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Extras::is_empty")]
    pub params: Extras,
    /// Receipt kinds as a bit set: 1 delivered, 2 clicked, 8 sent.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Root document of `POST /v3/push`.
///
/// `platform` and `audience` are optional while building but must both be
/// present and non-empty before the payload is sent. The payload is only ever
/// serialized; the service never returns it.
pub struct PushPayload {
    pub platform: Option<Platform>,
    pub audience: Option<Audience>,
    pub notification: Option<Notification>,
    pub message: Option<Message>,
    pub notification_3rd: Option<ThirdPartyNotification>,
    pub live_activity: Option<LiveActivity>,
    pub sms_message: Option<SmsMessage>,
    pub inapp_message: Option<InAppMessage>,
    pub options: Options,
    pub callback: Option<Callback>,
    /// Client-allocated id making the push idempotent, see
    /// [`JPushClient::cid_allocate`](crate::JPushClient::cid_allocate).
    pub cid: Option<String>,
}

impl PushPayload {
    /// Start a payload with both selectors set and default options.
    pub fn new(platform: Platform, audience: Audience) -> Self {
        Self {
            platform: Some(platform),
            audience: Some(audience),
            ..Default::default()
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_live_activity(mut self, live_activity: LiveActivity) -> Self {
        self.live_activity = Some(live_activity);
        self
    }

    pub fn with_cid(mut self, cid: impl Into<String>) -> Self {
        self.cid = Some(cid.into());
        self
    }
}
