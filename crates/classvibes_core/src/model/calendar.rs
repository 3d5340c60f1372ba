//! Device calendar records.
//!
//! # Invariants
//! - An event draft always satisfies `start_at < end_at`.
//! - Created events are owned by the device calendar provider afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Calendar as reported by the device provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCalendar {
    pub id: String,
    pub title: String,
    pub allows_modifications: bool,
}

/// Alarm attached to a device event, relative to its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAlarm {
    /// Minutes relative to event start; negative means before.
    pub relative_offset_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarValidationError {
    EmptyTitle,
    /// `start_at` is not strictly before `end_at`.
    InvalidRange { start_at: i64, end_at: i64 },
}

impl Display for CalendarValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::InvalidRange { start_at, end_at } => write!(
                f,
                "event start {start_at} must be earlier than event end {end_at}"
            ),
        }
    }
}

impl Error for CalendarValidationError {}

/// Validated event input for `CalendarBridge::create_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventDraft {
    title: String,
    start_at: i64,
    end_at: i64,
    notes: String,
    time_zone: Option<String>,
}

impl CalendarEventDraft {
    pub fn new(
        title: impl Into<String>,
        start_at: i64,
        end_at: i64,
        notes: impl Into<String>,
    ) -> Result<Self, CalendarValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(CalendarValidationError::EmptyTitle);
        }
        if start_at >= end_at {
            return Err(CalendarValidationError::InvalidRange { start_at, end_at });
        }
        Ok(Self {
            title,
            start_at,
            end_at,
            notes: notes.into(),
            time_zone: None,
        })
    }

    /// Attaches the host time zone id (for example `America/Argentina/Buenos_Aires`).
    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_at(&self) -> i64 {
        self.start_at
    }

    pub fn end_at(&self) -> i64 {
        self.end_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

/// Full event payload handed to the device calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start_at: i64,
    pub end_at: i64,
    pub notes: String,
    pub calendar_id: String,
    pub time_zone: Option<String>,
    pub alarms: Vec<EventAlarm>,
}

/// Event read back from the device provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCalendarEvent {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    pub start_at: i64,
    pub end_at: i64,
}
