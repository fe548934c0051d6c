use crate::domain::value::{MsgId, ScheduleId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of `POST /v3/push`.
pub struct PushResult {
    /// Id used to query delivery reports.
    pub msg_id: MsgId,
    /// Echo of the caller's sequence number, if the service returned one.
    pub sendno: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Schedule as returned by create and get.
pub struct ScheduleResult {
    pub schedule_id: ScheduleId,
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Client ids allocated by `GET /v3/push/cid`, in service order.
pub struct CidList {
    pub cids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a template SMS send.
pub struct SmsResult {
    /// SMS message id as returned by the service.
    pub msg_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Delivery counters for one push; `None` where the service has no data yet.
pub struct ReceivedReport {
    pub msg_id: MsgId,
    pub android_received: Option<u64>,
    pub ios_apns_sent: Option<u64>,
    pub ios_apns_received: Option<u64>,
    pub ios_msg_received: Option<u64>,
    pub wp_mpns_sent: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JPush API error (HTTP {status}, code {code:?}): {message}")]
/// Failure reported by the service through the `{"error": {...}}` envelope.
///
/// When the body is not an envelope, `message` holds the raw body verbatim.
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Service error code from the envelope, e.g. `1011`.
    pub code: Option<i64>,
    pub message: String,
    pub raw_body: String,
}
