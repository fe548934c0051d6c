use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// JPush application key.
///
/// Invariant: non-empty after trimming.
pub struct AppKey(String);

impl AppKey {
    /// Name used in validation errors and as the basic-auth username.
    pub const FIELD: &'static str = "app_key";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// JPush master secret paired with an [`AppKey`].
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct MasterSecret(String);

impl MasterSecret {
    pub const FIELD: &'static str = "master_secret";

    /// Create a validated [`MasterSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Schedule id returned by `POST /v3/schedules` (`schedule_id`).
///
/// Invariant: non-empty after trimming.
pub struct ScheduleId(String);

impl ScheduleId {
    /// Query parameter name used by JPush (`schedule_id`).
    pub const FIELD: &'static str = "schedule_id";

    /// Create a validated [`ScheduleId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated schedule id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Push message id (`msg_id`).
///
/// JPush returns it either as a JSON number or as a numeric string.
pub struct MsgId(u64);

impl MsgId {
    /// Query parameter name used by the report API (`msg_ids`).
    pub const FIELD: &'static str = "msg_ids";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MsgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
