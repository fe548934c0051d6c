//! Domain layer: push, schedule and SMS documents with their invariants (no I/O).

mod audience;
mod live_activity;
mod message;
mod notification;
mod options;
mod payload;
mod platform;
mod response;
mod schedule;
mod sms;
mod validation;
mod value;

pub use audience::{Audience, AudienceTargets, AudienceType};
pub use live_activity::{IosLiveActivity, LiveActivity, LiveActivityAlert, LiveActivityEvent};
pub use message::{InAppMessage, Message, SmsMessage};
pub use notification::{
    AndroidIntent, AndroidNotification, Extras, InterruptionLevel, IosNotification, Notification,
    QuickAppNotification, ThirdPartyNotification, WinPhoneNotification,
};
pub use options::{Options, ThirdPartyOptions, ThirdPartyVendor};
pub use payload::{Callback, PushPayload};
pub use platform::{Platform, PlatformType};
pub use response::{ApiError, CidList, PushResult, ReceivedReport, ScheduleResult, SmsResult};
pub use schedule::{Schedule, TimeUnit, Trigger};
pub use sms::SmsPayload;
pub use validation::{
    CID_MAX_COUNT, RECEIVED_REPORT_MAX_MSG_IDS, ValidationError, validate_cid_count,
    validate_msg_ids, validate_push, validate_schedule, validate_sms,
};
pub use value::{AppKey, MasterSecret, MsgId, ScheduleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Purpose of pre-allocated client ids.
pub enum CidType {
    #[default]
    Push,
    Schedule,
}

impl CidType {
    /// Query parameter name used by JPush (`type`).
    pub const FIELD: &'static str = "type";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Schedule => "schedule",
        }
    }
}
