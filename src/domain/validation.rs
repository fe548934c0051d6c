use std::fmt;

use crate::domain::notification::ThirdPartyNotification;
use crate::domain::payload::PushPayload;
use crate::domain::platform::PlatformType;
use crate::domain::schedule::Schedule;
use crate::domain::sms::SmsPayload;
use crate::domain::value::MsgId;

/// Largest number of client ids allocated by one `GET /v3/push/cid` call.
pub const CID_MAX_COUNT: u32 = 1000;
/// Largest number of message ids accepted by one `GET /v3/received` call.
pub const RECEIVED_REPORT_MAX_MSG_IDS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing {
        field: &'static str,
    },
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    PlatformAlreadyAll,
    UnknownPlatform {
        input: String,
    },
    PlatformNotSet,
    PlatformNotFound {
        platform: PlatformType,
    },
    SchedulePush(Box<ValidationError>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::TooMany { field, max, actual } => {
                write!(f, "too many {field}: {actual} (max {max})")
            }
            Self::PlatformAlreadyAll => write!(f, "platform already set all"),
            Self::UnknownPlatform { input } => write!(f, "invalid platform: {input}"),
            Self::PlatformNotSet => write!(f, "platform not set"),
            Self::PlatformNotFound { platform } => write!(f, "platform not found: {platform}"),
            Self::SchedulePush(inner) => write!(f, "schedule push: {inner}"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SchedulePush(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Check that a push document names both its platforms and its audience.
///
/// A vendor fallback notification, when present, must carry content.
pub fn validate_push(payload: &PushPayload) -> Result<(), ValidationError> {
    if payload.platform.as_ref().is_none_or(|it| it.is_empty()) {
        return Err(ValidationError::Missing { field: "platform" });
    }
    if payload.audience.as_ref().is_none_or(|it| it.is_empty()) {
        return Err(ValidationError::Missing { field: "audience" });
    }
    if payload
        .notification_3rd
        .as_ref()
        .is_some_and(|it| it.content().is_empty())
    {
        return Err(ValidationError::Missing {
            field: ThirdPartyNotification::CONTENT_FIELD,
        });
    }
    Ok(())
}

/// Check a schedule and the push document it wraps.
///
/// Failures of the inner push are reported as [`ValidationError::SchedulePush`].
pub fn validate_schedule(schedule: &Schedule) -> Result<(), ValidationError> {
    if schedule.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "schedule name",
        });
    }
    let Some(push) = schedule.push.as_ref() else {
        return Err(ValidationError::Missing {
            field: "schedule push",
        });
    };
    validate_push(push).map_err(|err| ValidationError::SchedulePush(Box::new(err)))?;
    if schedule.trigger.is_none() {
        return Err(ValidationError::Missing {
            field: "schedule trigger",
        });
    }
    Ok(())
}

pub fn validate_sms(payload: &SmsPayload) -> Result<(), ValidationError> {
    if payload.mobile.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: SmsPayload::MOBILE_FIELD,
        });
    }
    if payload.temp_id == 0 {
        return Err(ValidationError::Missing {
            field: SmsPayload::TEMP_ID_FIELD,
        });
    }
    Ok(())
}

pub fn validate_cid_count(count: u32) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::Missing { field: "count" });
    }
    if count > CID_MAX_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "count",
            min: 1,
            max: u64::from(CID_MAX_COUNT),
            actual: u64::from(count),
        });
    }
    Ok(())
}

pub fn validate_msg_ids(msg_ids: &[MsgId]) -> Result<(), ValidationError> {
    if msg_ids.is_empty() {
        return Err(ValidationError::Missing {
            field: MsgId::FIELD,
        });
    }
    if msg_ids.len() > RECEIVED_REPORT_MAX_MSG_IDS {
        return Err(ValidationError::TooMany {
            field: MsgId::FIELD,
            max: RECEIVED_REPORT_MAX_MSG_IDS,
            actual: msg_ids.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Audience, Platform, Trigger};

    fn valid_push() -> PushPayload {
        let mut audience = Audience::default();
        audience.set_registration_id(["id1"]);
        PushPayload::new(Platform::from(vec![PlatformType::Android]), audience)
    }

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Missing { field: "audience" };
        assert_eq!(err.to_string(), "audience is required");

        let err = ValidationError::OutOfRange {
            field: "count",
            min: 1,
            max: 1000,
            actual: 1001,
        };
        assert_eq!(
            err.to_string(),
            "count out of range: 1001 (expected 1..=1000)"
        );

        let err = ValidationError::PlatformNotFound {
            platform: PlatformType::Ios,
        };
        assert_eq!(err.to_string(), "platform not found: ios");
    }

    #[test]
    fn push_requires_platform_and_audience() {
        assert!(validate_push(&valid_push()).is_ok());

        let mut payload = valid_push();
        payload.audience = None;
        assert_eq!(
            validate_push(&payload),
            Err(ValidationError::Missing { field: "audience" })
        );

        let mut payload = valid_push();
        payload.platform = None;
        assert_eq!(
            validate_push(&payload),
            Err(ValidationError::Missing { field: "platform" })
        );

        assert!(validate_push(&PushPayload::default()).is_err());
    }

    #[test]
    fn push_rejects_empty_selectors() {
        let mut payload = valid_push();
        payload.audience = Some(Audience::default());
        assert!(validate_push(&payload).is_err());

        let mut payload = valid_push();
        payload.platform = Some(Platform::default());
        assert!(validate_push(&payload).is_err());

        let mut payload = valid_push();
        payload.platform = Some(Platform::All);
        payload.audience = Some(Audience::All);
        assert!(validate_push(&payload).is_ok());
    }

    #[test]
    fn schedule_wraps_inner_push_failure() {
        let mut push = valid_push();
        push.audience = None;
        let mut schedule = Schedule::new("nightly", push);
        schedule.trigger = Some(Trigger::single(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        ));

        let err = validate_schedule(&schedule).unwrap_err();
        assert!(matches!(err, ValidationError::SchedulePush(_)));
        assert_eq!(err.to_string(), "schedule push: audience is required");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("audience is required")
        );
    }

    #[test]
    fn schedule_requires_name_push_and_trigger() {
        let mut schedule = Schedule::new("  ", valid_push());
        assert_eq!(
            validate_schedule(&schedule),
            Err(ValidationError::Missing {
                field: "schedule name"
            })
        );

        schedule.name = "nightly".to_owned();
        assert_eq!(
            validate_schedule(&schedule),
            Err(ValidationError::Missing {
                field: "schedule trigger"
            })
        );

        schedule.push = None;
        assert_eq!(
            validate_schedule(&schedule),
            Err(ValidationError::Missing {
                field: "schedule push"
            })
        );
    }

    #[test]
    fn sms_requires_mobile_and_template() {
        let payload = SmsPayload::new("13800138000", 1);
        assert!(validate_sms(&payload).is_ok());

        assert!(validate_sms(&SmsPayload::default()).is_err());
        assert_eq!(
            validate_sms(&SmsPayload::new("13800138000", 0)),
            Err(ValidationError::Missing { field: "temp_id" })
        );
        assert_eq!(
            validate_sms(&SmsPayload::new(" ", 1)),
            Err(ValidationError::Missing { field: "mobile" })
        );
    }

    #[test]
    fn cid_count_range_is_enforced() {
        assert_eq!(
            validate_cid_count(0),
            Err(ValidationError::Missing { field: "count" })
        );
        assert!(validate_cid_count(1).is_ok());
        assert!(validate_cid_count(CID_MAX_COUNT).is_ok());
        assert!(matches!(
            validate_cid_count(CID_MAX_COUNT + 1),
            Err(ValidationError::OutOfRange { actual: 1001, .. })
        ));
    }

    #[test]
    fn msg_id_limit_is_enforced() {
        assert!(validate_msg_ids(&[]).is_err());
        assert!(validate_msg_ids(&[MsgId::new(1)]).is_ok());

        let ids = (0..=RECEIVED_REPORT_MAX_MSG_IDS as u64)
            .map(MsgId::new)
            .collect::<Vec<_>>();
        assert!(matches!(
            validate_msg_ids(&ids),
            Err(ValidationError::TooMany { max: 100, actual: 101, .. })
        ));
    }
}
