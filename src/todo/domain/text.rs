//! Validated text value types for todo records.

use super::TodoDomainError;
use super::sanitize::sanitize_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in characters, counted after sanitization.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters, counted after sanitization.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Sanitized, validated todo title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Sanitizes raw input and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when nothing remains after
    /// stripping markup and trimming, or [`TodoDomainError::TitleTooLong`]
    /// when the sanitized text exceeds [`TITLE_MAX_CHARS`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let sanitized = sanitize_text(value.as_ref());
        if sanitized.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        if sanitized.chars().count() > TITLE_MAX_CHARS {
            return Err(TodoDomainError::TitleTooLong);
        }
        Ok(Self(sanitized))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the sanitized text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sanitized, validated todo description.
///
/// Unlike titles, descriptions may be empty after sanitization; an empty
/// description is stored as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Sanitizes raw input and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DescriptionTooLong`] when the sanitized
    /// text exceeds [`DESCRIPTION_MAX_CHARS`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let sanitized = sanitize_text(value.as_ref());
        if sanitized.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(TodoDomainError::DescriptionTooLong);
        }
        Ok(Self(sanitized))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the description, returning the sanitized text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
