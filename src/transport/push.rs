use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use super::id::TransportId;
use super::{TransportError, decode_success};
use crate::domain::{
    Audience, AudienceTargets, Callback, InAppMessage, LiveActivity, Message, Notification,
    Options, Platform, PushPayload, PushResult, SmsMessage, ThirdPartyNotification,
};

const ALL: &str = "all";

/// Wire form of a selector: the string `"all"` or the specific list/map.
struct PlatformJson<'a>(&'a Platform);

impl Serialize for PlatformJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Platform::All => serializer.serialize_str(ALL),
            Platform::Specific(platforms) => {
                let mut seq = serializer.serialize_seq(Some(platforms.len()))?;
                for os in platforms {
                    seq.serialize_element(os.as_str())?;
                }
                seq.end()
            }
        }
    }
}

struct AudienceJson<'a>(&'a Audience);

impl Serialize for AudienceJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Audience::All => serializer.serialize_str(ALL),
            Audience::Specific(selectors) => {
                let mut map = serializer.serialize_map(Some(selectors.len()))?;
                for (kind, targets) in selectors {
                    let key = kind.as_str();
                    match targets {
                        AudienceTargets::List(values) => map.serialize_entry(key, values)?,
                        AudienceTargets::Single(value) => map.serialize_entry(key, value)?,
                    }
                }
                map.end()
            }
        }
    }
}

#[derive(Serialize)]
pub(super) struct PushJsonRequest<'a> {
    platform: Option<PlatformJson<'a>>,
    audience: Option<AudienceJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<&'a Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_3rd: Option<&'a ThirdPartyNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    live_activity: Option<&'a LiveActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms_message: Option<&'a SmsMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inapp_message: Option<&'a InAppMessage>,
    options: &'a Options,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback: Option<&'a Callback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cid: Option<&'a str>,
}

impl<'a> From<&'a PushPayload> for PushJsonRequest<'a> {
    fn from(payload: &'a PushPayload) -> Self {
        Self {
            platform: payload.platform.as_ref().map(PlatformJson),
            audience: payload.audience.as_ref().map(AudienceJson),
            notification: payload.notification.as_ref(),
            message: payload.message.as_ref(),
            notification_3rd: payload.notification_3rd.as_ref(),
            live_activity: payload.live_activity.as_ref(),
            sms_message: payload.sms_message.as_ref(),
            inapp_message: payload.inapp_message.as_ref(),
            options: &payload.options,
            callback: payload.callback.as_ref(),
            cid: payload.cid.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PushJsonResponse {
    msg_id: TransportId,
    #[serde(default)]
    sendno: Option<TransportId>,
}

pub fn encode_push_json(payload: &PushPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PushJsonRequest::from(payload))
}

pub fn decode_push_json_response(json: &str) -> Result<PushResult, TransportError> {
    let parsed: PushJsonResponse = decode_success(json)?;
    Ok(PushResult {
        msg_id: parsed.msg_id.into_msg_id()?,
        sendno: parsed.sendno.map(TransportId::into_string),
    })
}
