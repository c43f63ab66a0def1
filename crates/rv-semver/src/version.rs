use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

use crate::{Identifier, VersionError, compare::compare};

/// A Semantic Versioning 2.0.0 version, e.g. `1.0.0-rc.1+build.5`.
///
/// The fields are plain data: only [`Version::parse`] validates them. Equality,
/// ordering and hashing follow version precedence, so two versions that
/// differ only in build metadata are equal.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::DeserializeFromStr, serde_with::SerializeDisplay)
)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated prerelease identifiers, empty for a release.
    pub prerelease: String,
    /// Dot-separated build metadata, empty if there is none.
    pub build: String,
}

/// Which core number to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Level {
    Major,
    Minor,
    Patch,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
        }
    }

    pub fn parse(version: &str) -> Result<Self, VersionError> {
        crate::parser::parse(version)
    }

    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = prerelease.into();
        self
    }

    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The same core version, without prerelease or build metadata.
    pub fn release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.prerelease)
    }

    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.build)
    }

    /// Add `n` to the given core number and reset the lesser ones to zero.
    ///
    /// Incrementing by zero changes nothing, lesser numbers included.
    /// Overflow wraps around. Prerelease and build metadata are kept.
    pub fn increment(&mut self, level: Level, n: u64) {
        if n == 0 {
            return;
        }

        match level {
            Level::Major => {
                self.major = self.major.wrapping_add(n);
                self.minor = 0;
                self.patch = 0;
            }
            Level::Minor => {
                self.minor = self.minor.wrapping_add(n);
                self.patch = 0;
            }
            Level::Patch => {
                self.patch = self.patch.wrapping_add(n);
            }
        }
    }

    /// A copy of this version incremented by one at `level`.
    pub fn bumped(&self, level: Level) -> Self {
        let mut version = self.clone();
        version.increment(level, 1);
        version
    }
}

fn identifiers(field: &str) -> impl Iterator<Item = &str> {
    field.split('.').filter(move |_| !field.is_empty())
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        for identifier in self.prerelease_identifiers().map(Identifier::new) {
            identifier.hash(state);
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare(self, other)
    }
}
