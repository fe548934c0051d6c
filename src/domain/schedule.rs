use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::payload::PushPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// When a scheduled push fires.
///
/// Times are the service's local wall-clock time; no timezone is sent.
pub enum Trigger {
    Single {
        time: NaiveDateTime,
    },
    Periodical {
        start: NaiveDateTime,
        end: NaiveDateTime,
        /// Time of day the push fires on each matching point.
        time: NaiveTime,
        time_unit: TimeUnit,
        frequency: u32,
        /// Weekdays (`"MON"`..`"SUN"`) or days of month (`"01"`..`"31"`);
        /// empty for [`TimeUnit::Day`].
        point: Vec<String>,
    },
}

impl Trigger {
    pub fn single(time: NaiveDateTime) -> Self {
        Self::Single { time }
    }

    pub fn periodical(
        start: NaiveDateTime,
        end: NaiveDateTime,
        time: NaiveTime,
        time_unit: TimeUnit,
        frequency: u32,
        point: Vec<String>,
    ) -> Self {
        Self::Periodical {
            start,
            end,
            time,
            time_unit,
            frequency,
            point,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Named, deferred or recurring push (`POST /v3/schedules`).
pub struct Schedule {
    pub cid: Option<String>,
    pub name: String,
    pub enabled: bool,
    pub trigger: Option<Trigger>,
    pub push: Option<PushPayload>,
}

impl Schedule {
    /// Create an enabled schedule without a trigger.
    pub fn new(name: impl Into<String>, push: PushPayload) -> Self {
        Self {
            cid: None,
            name: name.into(),
            enabled: true,
            trigger: None,
            push: Some(push),
        }
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}
