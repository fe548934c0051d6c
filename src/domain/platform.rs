use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Operating system a push can be delivered to.
///
/// Parses from its wire tag (`"ios"`, `"android"`, `"winphone"`).
pub enum PlatformType {
    Ios,
    Android,
    Winphone,
}

impl PlatformType {
    /// Tag used in the `platform` JSON array.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Winphone => "winphone",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "winphone" => Ok(Self::Winphone),
            other => Err(ValidationError::UnknownPlatform {
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Target operating systems for a push.
///
/// Invariant: `Specific` never holds the same platform twice, and it keeps
/// the order in which platforms were added.
pub enum Platform {
    /// Serialized as the literal string `"all"`.
    All,
    /// Serialized as an array of platform tags.
    Specific(Vec<PlatformType>),
}

impl Default for Platform {
    fn default() -> Self {
        Self::Specific(Vec::new())
    }
}

impl From<Vec<PlatformType>> for Platform {
    fn from(value: Vec<PlatformType>) -> Self {
        let mut platforms = Vec::with_capacity(value.len());
        for os in value {
            if !platforms.contains(&os) {
                platforms.push(os);
            }
        }
        Self::Specific(platforms)
    }
}

impl Platform {
    /// Target every platform.
    pub fn all(&mut self) -> &mut Self {
        *self = Self::All;
        self
    }

    /// `true` when every platform is targeted.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// `true` when no platform has been added and the selector is not `All`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Specific(platforms) => platforms.is_empty(),
        }
    }

    /// Platforms added so far; empty for `All`.
    pub fn platforms(&self) -> &[PlatformType] {
        match self {
            Self::All => &[],
            Self::Specific(platforms) => platforms,
        }
    }

    /// Add a platform. Adding one that is already present is a no-op.
    pub fn add(&mut self, os: PlatformType) -> Result<(), ValidationError> {
        match self {
            Self::All => Err(ValidationError::PlatformAlreadyAll),
            Self::Specific(platforms) => {
                if !platforms.contains(&os) {
                    platforms.push(os);
                }
                Ok(())
            }
        }
    }

    /// Parse and add a platform tag such as `"android"`.
    pub fn add_named(&mut self, tag: &str) -> Result<(), ValidationError> {
        if self.is_all() {
            return Err(ValidationError::PlatformAlreadyAll);
        }
        self.add(tag.parse()?)
    }

    /// Shorthand for `add(PlatformType::Ios)`.
    pub fn add_ios(&mut self) -> Result<(), ValidationError> {
        self.add(PlatformType::Ios)
    }

    /// Shorthand for `add(PlatformType::Android)`.
    pub fn add_android(&mut self) -> Result<(), ValidationError> {
        self.add(PlatformType::Android)
    }

    /// Shorthand for `add(PlatformType::Winphone)`.
    pub fn add_winphone(&mut self) -> Result<(), ValidationError> {
        self.add(PlatformType::Winphone)
    }

    /// Remove a previously added platform.
    ///
    /// Fails with [`ValidationError::PlatformNotSet`] on an empty selector and
    /// with [`ValidationError::PlatformNotFound`] when `os` was never added.
    pub fn remove(&mut self, os: PlatformType) -> Result<(), ValidationError> {
        match self {
            Self::Specific(platforms) if platforms.is_empty() => {
                Err(ValidationError::PlatformNotSet)
            }
            Self::Specific(platforms) => {
                let idx = platforms
                    .iter()
                    .position(|it| *it == os)
                    .ok_or(ValidationError::PlatformNotFound { platform: os })?;
                platforms.remove(idx);
                Ok(())
            }
            Self::All => Err(ValidationError::PlatformNotFound { platform: os }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_ignored_and_order_is_kept() {
        let mut platform = Platform::default();
        platform.add_android().unwrap();
        platform.add_ios().unwrap();
        platform.add_android().unwrap();
        platform.add(PlatformType::Ios).unwrap();

        assert_eq!(
            platform.platforms(),
            &[PlatformType::Android, PlatformType::Ios]
        );
    }

    #[test]
    fn add_after_all_fails_and_keeps_all() {
        let mut platform = Platform::default();
        platform.add_winphone().unwrap();
        platform.all();

        assert_eq!(platform.add_ios(), Err(ValidationError::PlatformAlreadyAll));
        assert_eq!(
            platform.add_named("android"),
            Err(ValidationError::PlatformAlreadyAll)
        );
        assert!(platform.is_all());
    }

    #[test]
    fn add_named_rejects_unknown_tags() {
        let mut platform = Platform::default();
        platform.add_named("android").unwrap();
        assert_eq!(
            platform.add_named("symbian"),
            Err(ValidationError::UnknownPlatform {
                input: "symbian".to_owned()
            })
        );
        assert_eq!(platform.platforms(), &[PlatformType::Android]);
    }

    #[test]
    fn remove_reports_missing_platforms() {
        let mut platform = Platform::default();
        assert_eq!(
            platform.remove(PlatformType::Ios),
            Err(ValidationError::PlatformNotSet)
        );

        platform.add_android().unwrap();
        assert_eq!(
            platform.remove(PlatformType::Ios),
            Err(ValidationError::PlatformNotFound {
                platform: PlatformType::Ios
            })
        );

        platform.remove(PlatformType::Android).unwrap();
        assert!(platform.is_empty());
    }

    #[test]
    fn from_vec_deduplicates() {
        let platform = Platform::from(vec![
            PlatformType::Ios,
            PlatformType::Ios,
            PlatformType::Winphone,
        ]);
        assert_eq!(
            platform.platforms(),
            &[PlatformType::Ios, PlatformType::Winphone]
        );

        let empty = Platform::from(Vec::new());
        assert!(empty.is_empty());
        assert!(!empty.is_all());
    }
}
