use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Selection kind inside a specific audience.
pub enum AudienceType {
    /// Devices carrying any of the tags.
    Tag,
    /// Devices carrying all of the tags.
    TagAnd,
    /// Devices carrying none of the tags.
    TagNot,
    /// Devices bound to any of the aliases.
    Alias,
    /// Devices with any of the registration ids.
    RegistrationId,
    /// User segments defined in the JPush console.
    Segment,
    /// A/B test groups.
    AbTest,
    /// One iOS live activity.
    LiveActivityId,
}

impl AudienceType {
    /// Key used in the `audience` JSON object.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::TagAnd => "tag_and",
            Self::TagNot => "tag_not",
            Self::Alias => "alias",
            Self::RegistrationId => "registration_id",
            Self::Segment => "segment",
            Self::AbTest => "abtest",
            Self::LiveActivityId => "live_activity_id",
        }
    }
}

impl fmt::Display for AudienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifiers for one audience selection kind.
pub enum AudienceTargets {
    /// Serialized as a JSON array.
    List(Vec<String>),
    /// Used by [`AudienceType::LiveActivityId`], which takes exactly one id.
    Single(String),
}

impl AudienceTargets {
    /// `true` for an empty list or an empty single id.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(values) => values.is_empty(),
            Self::Single(value) => value.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recipient selection for a push.
///
/// Either every device ([`Audience::All`]) or a set of selectors keyed by
/// [`AudienceType`]. Once set to `All`, further selectors are ignored with a
/// warning instead of failing, so an in-progress build is never aborted.
pub enum Audience {
    /// Serialized as the literal string `"all"`.
    All,
    /// Serialized as an object with one key per selection kind.
    Specific(BTreeMap<AudienceType, AudienceTargets>),
}

impl Default for Audience {
    fn default() -> Self {
        Self::Specific(BTreeMap::new())
    }
}

impl Audience {
    /// Target every device of the application.
    pub fn all(&mut self) -> &mut Self {
        *self = Self::All;
        self
    }

    /// `true` when every device is targeted.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// `true` when no selector has been set and the audience is not `All`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Specific(selectors) => selectors.is_empty(),
        }
    }

    /// Look up the identifiers set for one selection kind.
    pub fn get(&self, kind: AudienceType) -> Option<&AudienceTargets> {
        match self {
            Self::All => None,
            Self::Specific(selectors) => selectors.get(&kind),
        }
    }

    /// Target devices by registration id (`registration_id`).
    pub fn set_registration_id<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::RegistrationId, collect(ids))
    }

    /// Target devices carrying any of the tags (`tag`).
    pub fn set_tag<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::Tag, collect(tags))
    }

    /// Target devices carrying all of the tags (`tag_and`).
    pub fn set_tag_and<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::TagAnd, collect(tags))
    }

    /// Exclude devices carrying any of the tags (`tag_not`).
    pub fn set_tag_not<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::TagNot, collect(tags))
    }

    /// Target devices by alias (`alias`).
    pub fn set_alias<I, S>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::Alias, collect(aliases))
    }

    /// Target console-defined user segments (`segment`).
    pub fn set_segment<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::Segment, collect(segments))
    }

    /// Target A/B test groups (`abtest`).
    pub fn set_abtest<I, S>(&mut self, abtests: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(AudienceType::AbTest, collect(abtests))
    }

    /// Target one iOS live activity (`live_activity_id`, a single string).
    pub fn set_live_activity_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.set(
            AudienceType::LiveActivityId,
            AudienceTargets::Single(id.into()),
        )
    }

    /// Add or replace the identifiers for `kind`.
    pub fn set(&mut self, kind: AudienceType, targets: AudienceTargets) -> &mut Self {
        match self {
            Self::All => {
                // TODO: return an error here once callers stop relying on the silent no-op.
                tracing::warn!(kind = %kind, "audience already set to all; ignoring selector");
            }
            Self::Specific(selectors) => {
                selectors.insert(kind, targets);
            }
        }
        self
    }
}

fn collect<I, S>(values: I) -> AudienceTargets
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AudienceTargets::List(values.into_iter().map(Into::into).collect())
}
