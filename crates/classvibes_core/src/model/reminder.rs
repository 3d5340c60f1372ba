//! Reminder (alert) domain model.
//!
//! # Responsibility
//! - Define the persisted reminder record and its creation input.
//! - Own the category vocabulary and its stable string ids.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - `read` only transitions `false -> true`.
//! - `title` and `message` are non-blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one reminder.
///
/// UUIDv7 keeps ids time-ordered while staying unique across the store.
pub type ReminderId = Uuid;

/// Closed set of reminder categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderCategory {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl ReminderCategory {
    /// Stable string id used in storage and at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    /// Parses one category from its stable string id.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "success" => Some(Self::Success),
            _ => None,
        }
    }
}

/// Validation failures for reminder input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    EmptyTitle,
    EmptyMessage,
    UnknownCategory(String),
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "reminder title must not be empty"),
            Self::EmptyMessage => write!(f, "reminder message must not be empty"),
            Self::UnknownCategory(value) => {
                write!(
                    f,
                    "unknown reminder category `{value}`; expected info|warning|error|success"
                )
            }
        }
    }
}

impl Error for ReminderValidationError {}

/// Validated creation input for `AlertStore::create`.
///
/// Fields are private so an instance always satisfies the non-blank rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    title: String,
    message: String,
    due_at: i64,
    category: ReminderCategory,
}

impl NewReminder {
    /// Builds creation input, trimming and validating text fields.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        due_at: i64,
        category: ReminderCategory,
    ) -> Result<Self, ReminderValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ReminderValidationError::EmptyTitle);
        }
        let message = message.into().trim().to_string();
        if message.is_empty() {
            return Err(ReminderValidationError::EmptyMessage);
        }

        Ok(Self {
            title,
            message,
            due_at,
            category,
        })
    }

    /// Same as [`NewReminder::new`] but takes the category as a string id.
    pub fn from_parts(
        title: impl Into<String>,
        message: impl Into<String>,
        due_at: i64,
        category: &str,
    ) -> Result<Self, ReminderValidationError> {
        let normalized = category.trim().to_ascii_lowercase();
        let category = ReminderCategory::parse(normalized.as_str())
            .ok_or(ReminderValidationError::UnknownCategory(normalized))?;
        Self::new(title, message, due_at, category)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn due_at(&self) -> i64 {
        self.due_at
    }

    pub fn category(&self) -> ReminderCategory {
        self.category
    }

    /// Materializes a stored record with identity and creation metadata.
    pub(crate) fn into_reminder(self, id: ReminderId, created_at: i64) -> Reminder {
        Reminder {
            id,
            title: self.title,
            message: self.message,
            due_at: self.due_at,
            category: self.category,
            read: false,
            created_at,
        }
    }
}

/// Persisted reminder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    pub message: String,
    /// Unix epoch milliseconds.
    pub due_at: i64,
    pub category: ReminderCategory,
    pub read: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Reminder {
    /// Whether the due instant has been reached at `now`.
    pub fn is_due(&self, now: i64) -> bool {
        self.due_at <= now
    }

    /// Marks the reminder as read. There is no way back to unread.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Generates a fresh time-ordered reminder id.
pub fn new_reminder_id() -> ReminderId {
    Uuid::now_v7()
}
