//! Todo aggregate root and partial-update value object.

use super::{TodoDescription, TodoId, TodoTitle};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single task record.
///
/// Fields are private; the store hands out owned clones, so no caller can
/// reach into another caller's view of a record. Wire form is camelCase
/// with the description omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new record with a fresh identifier and clock-driven
    /// timestamps. New records always start incomplete, with
    /// `created_at == updated_at`.
    #[must_use]
    pub fn new(title: TodoTitle, description: Option<TodoDescription>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoId::new(),
            title: title.into_inner(),
            description: description.map(TodoDescription::into_inner),
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the record is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the supplied fields and advances `updated_at`.
    ///
    /// Text fields are trimmed; absent fields keep their prior value. The
    /// identifier and creation timestamp never change. `updated_at` moves
    /// strictly forward even when the clock stands still.
    pub fn apply(&mut self, changes: TodoChanges, now: DateTime<Utc>) {
        let TodoChanges {
            title,
            description,
            completed,
        } = changes;
        if let Some(value) = title {
            self.title = value.trim().to_owned();
        }
        if let Some(value) = description {
            self.description = Some(value.trim().to_owned());
        }
        if let Some(value) = completed {
            self.completed = value;
        }
        self.touch(now);
    }

    /// Advances `updated_at` to `now`, clamped to stay strictly above the
    /// previous value.
    fn touch(&mut self, now: DateTime<Utc>) {
        let minimum = self
            .updated_at
            .checked_add_signed(TimeDelta::nanoseconds(1))
            .unwrap_or(self.updated_at);
        self.updated_at = now.max(minimum);
    }
}

/// Partial field set applied by a repository update.
///
/// Absent fields retain the stored value; there is no way to clear a
/// description through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
}

impl TodoChanges {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            completed: None,
        }
    }

    /// Sets the replacement title text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns the replacement title, if supplied.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement completion flag, if supplied.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }
}
