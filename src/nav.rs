//! Navigation keys and transition direction.
//!
//! A navigation key is a `/`-delimited path such as `orders/450080` or
//! `products/category/casegoods/competition/123`. The first segment is the
//! "base" and selects the screen family; the rest are parameters.

use std::fmt;

use thiserror::Error;

/// Errors produced when parsing a navigation key from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavKeyError {
    #[error("navigation key is empty")]
    Empty,

    #[error("navigation key '{key}' contains an empty segment")]
    EmptySegment { key: String },
}

/// A validated, non-empty navigation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavKey(String);

impl NavKey {
    /// Root key every session starts on.
    pub const HOME: &'static str = "home";

    /// The root key.
    pub fn home() -> Self {
        Self(Self::HOME.to_string())
    }

    /// Parse a key. Leading and trailing slashes are trimmed; interior empty
    /// segments (`orders//1`) are rejected.
    pub fn parse(raw: &str) -> Result<Self, NavKeyError> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(NavKeyError::Empty);
        }
        if trimmed.split('/').any(str::is_empty) {
            return Err(NavKeyError::EmptySegment {
                key: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First segment.
    pub fn base(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// All segments in order (never empty).
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('/').collect()
    }

    pub fn is_home(&self) -> bool {
        self.0 == Self::HOME
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for NavKey {
    type Err = NavKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Direction of the most recent history mutation.
///
/// Only a hint for transition animations; not part of the stack itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}
