use serde::{Deserialize, Serialize};

use super::push::PushJsonRequest;
use super::{TransportError, decode_success};
use crate::domain::{Schedule, ScheduleId, ScheduleResult, Trigger};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum TriggerJson<'a> {
    Single {
        time: String,
    },
    Periodical {
        start: String,
        end: String,
        time: String,
        time_unit: &'static str,
        frequency: u32,
        point: &'a [String],
    },
}

impl<'a> From<&'a Trigger> for TriggerJson<'a> {
    fn from(trigger: &'a Trigger) -> Self {
        match trigger {
            Trigger::Single { time } => Self::Single {
                time: time.format(DATE_TIME_FORMAT).to_string(),
            },
            Trigger::Periodical {
                start,
                end,
                time,
                time_unit,
                frequency,
                point,
            } => Self::Periodical {
                start: start.format(DATE_TIME_FORMAT).to_string(),
                end: end.format(DATE_TIME_FORMAT).to_string(),
                time: time.format(TIME_FORMAT).to_string(),
                time_unit: time_unit.as_str(),
                frequency: *frequency,
                point: point.as_slice(),
            },
        }
    }
}

#[derive(Serialize)]
struct ScheduleJsonRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cid: Option<&'a str>,
    name: &'a str,
    enabled: bool,
    trigger: Option<TriggerJson<'a>>,
    push: Option<PushJsonRequest<'a>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScheduleJsonResponse {
    schedule_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    enabled: Option<bool>,
}

pub fn encode_schedule_json(schedule: &Schedule) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ScheduleJsonRequest {
        cid: schedule.cid.as_deref(),
        name: &schedule.name,
        enabled: schedule.enabled,
        trigger: schedule.trigger.as_ref().map(TriggerJson::from),
        push: schedule.push.as_ref().map(PushJsonRequest::from),
    })
}

pub fn decode_schedule_json_response(json: &str) -> Result<ScheduleResult, TransportError> {
    let parsed: ScheduleJsonResponse = decode_success(json)?;
    let schedule_id =
        ScheduleId::new(parsed.schedule_id).map_err(|_| TransportError::EmptyScheduleId)?;
    Ok(ScheduleResult {
        schedule_id,
        name: parsed.name,
        enabled: parsed.enabled,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{Audience, Notification, Platform, PushPayload, TimeUnit};

    fn push() -> PushPayload {
        PushPayload::new(Platform::All, Audience::All).with_notification(Notification::alert("hi"))
    }

    fn encode(schedule: &Schedule) -> Value {
        serde_json::from_str(&encode_schedule_json(schedule).unwrap()).unwrap()
    }

    #[test]
    fn encode_single_trigger() {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let schedule = Schedule::new("launch", push()).with_trigger(Trigger::single(time));

        let value = encode(&schedule);
        assert_eq!(value["name"], json!("launch"));
        assert_eq!(value["enabled"], json!(true));
        assert_eq!(
            value["trigger"],
            json!({ "single": { "time": "2024-05-01 09:30:00" } })
        );
        assert_eq!(value["push"]["platform"], json!("all"));
        assert_eq!(value["push"]["notification"]["alert"], json!("hi"));
        assert!(value.get("cid").is_none());
    }

    #[test]
    fn encode_periodical_trigger() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let mut schedule = Schedule::new("weekly", push()).with_trigger(Trigger::periodical(
            start,
            end,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            TimeUnit::Week,
            1,
            vec!["MON".to_owned(), "FRI".to_owned()],
        ));
        schedule.cid = Some("cid-9".to_owned());
        schedule.enabled = false;

        let value = encode(&schedule);
        assert_eq!(value["cid"], json!("cid-9"));
        assert_eq!(value["enabled"], json!(false));
        assert_eq!(
            value["trigger"],
            json!({
                "periodical": {
                    "start": "2024-01-01 00:00:00",
                    "end": "2024-12-31 23:59:59",
                    "time": "12:00:00",
                    "time_unit": "week",
                    "frequency": 1,
                    "point": ["MON", "FRI"]
                }
            })
        );
    }

    #[test]
    fn decode_schedule_response() {
        let parsed = decode_schedule_json_response(
            r#"{"schedule_id":"0eac1b80-c2ac-4b69-948b-c65b34b96512","name":"launch"}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.schedule_id.as_str(),
            "0eac1b80-c2ac-4b69-948b-c65b34b96512"
        );
        assert_eq!(parsed.name.as_deref(), Some("launch"));
        assert_eq!(parsed.enabled, None);
    }

    #[test]
    fn decode_rejects_empty_schedule_id() {
        let err = decode_schedule_json_response(r#"{"schedule_id":""}"#).unwrap_err();
        assert!(matches!(err, TransportError::EmptyScheduleId));
    }
}
