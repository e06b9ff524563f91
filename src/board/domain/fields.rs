//! Validated scalar types for task fields.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const TITLE_MAX_CHARS: usize = 255;
const DESCRIPTION_MAX_CHARS: usize = 1000;
const OUTPUT_MAX_CHARS: usize = 255;

/// Non-empty task title, bounded by the persisted column width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty
    /// after trimming, or [`BoardDomainError::TitleTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        let length = normalized.chars().count();
        if length > TITLE_MAX_CHARS {
            return Err(BoardDomainError::TitleTooLong(length));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form task description. May be empty, bounded at 1000 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated task description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DescriptionTooLong`] when the value
    /// exceeds 1000 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > DESCRIPTION_MAX_CHARS {
            return Err(BoardDomainError::DescriptionTooLong(length));
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Non-empty description of the deliverable expected from a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDescription(String);

impl OutputDescription {
    /// Creates a validated output description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyOutput`] when the value is empty
    /// after trimming, or [`BoardDomainError::OutputTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyOutput);
        }
        let length = normalized.chars().count();
        if length > OUTPUT_MAX_CHARS {
            return Err(BoardDomainError::OutputTooLong(length));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the output description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OutputDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Estimated effort in minutes.
///
/// The estimate is bounded to 0–255 minutes by construction; the bound is
/// encoded in the wrapped integer type, so no runtime validation exists
/// for callers to misuse.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EffortMinutes(u8);

impl EffortMinutes {
    /// Creates an effort estimate.
    #[must_use]
    pub const fn new(minutes: u8) -> Self {
        Self(minutes)
    }

    /// Returns the estimate in minutes.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.0
    }
}

impl fmt::Display for EffortMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
