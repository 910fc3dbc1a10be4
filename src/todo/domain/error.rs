//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing validated todo values.
///
/// Display strings double as the user-facing messages published by the
/// HTTP boundary, so they stay in sentence form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty or whitespace-only after sanitization.
    #[error("Title must not be empty")]
    EmptyTitle,

    /// The sanitized title exceeds the maximum length.
    #[error("Title cannot exceed 100 characters")]
    TitleTooLong,

    /// The sanitized description exceeds the maximum length.
    #[error("Description cannot exceed 500 characters")]
    DescriptionTooLong,
}
