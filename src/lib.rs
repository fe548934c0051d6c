//! Typed Rust client for the JPush push-notification and SMS HTTP APIs.
//!
//! The crate has three layers: a domain layer of payload builders and
//! validators, a transport layer owning the JSON wire format, and a small
//! client layer that authenticates and sends requests.
//!
//! ```rust,no_run
//! use jpush::{Audience, Auth, JPushClient, Notification, Platform, PushPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jpush::JPushError> {
//!     let client = JPushClient::new(Auth::new("app-key", "master-secret")?)?;
//!
//!     let mut audience = Audience::default();
//!     audience.set_registration_id(["1507bfd3f7c466c355c"]);
//!     let payload = PushPayload::new(Platform::All, audience)
//!         .with_notification(Notification::alert("hello"));
//!
//!     let result = client.push(&payload).await?;
//!     println!("msg_id: {}", result.msg_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, JPushClient, JPushClientBuilder, JPushError};
pub use domain::{
    AndroidNotification, ApiError, Audience, AudienceTargets, AudienceType, Callback, CidList,
    CidType, IosNotification, Message, MsgId, Notification, Options, Platform, PlatformType,
    PushPayload, PushResult, ReceivedReport, Schedule, ScheduleResult, SmsPayload, SmsResult,
    TimeUnit, Trigger, ValidationError,
};
