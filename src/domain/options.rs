use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::notification::is_false;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Device vendor whose push channel can be tuned in [`Options::third_party_channel`].
pub enum ThirdPartyVendor {
    Xiaomi,
    Huawei,
    Meizu,
    Oppo,
    Vivo,
    Fcm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Per-vendor delivery overrides.
pub struct ThirdPartyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_fcm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_customize: Option<String>,
    pub channel_id: String,
    pub skip_quota: bool,
    /// vivo: 0 = marketing, 1 = system message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<u8>,
    /// vivo: 0 = production, 1 = test push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_pic_path: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub only_use_vendor_style: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Delivery controls for a push.
///
/// `apns_production` is always sent and defaults to `false` (development).
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sendno: Option<i64>,
    /// Offline retention in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_msg_id: Option<u64>,
    pub apns_production: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_collapse_id: Option<String>,
    /// Paced delivery window in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_push_duration: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub third_party_channel: BTreeMap<ThirdPartyVendor, ThirdPartyOptions>,
}

impl Options {
    /// Add or replace the overrides for one vendor.
    pub fn add_third_party_channel(
        &mut self,
        vendor: ThirdPartyVendor,
        options: ThirdPartyOptions,
    ) -> &mut Self {
        self.third_party_channel.insert(vendor, options);
        self
    }
}
