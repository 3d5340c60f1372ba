//! Device and remote collaborator seams.
//!
//! # Responsibility
//! - Describe the platform calls this subsystem depends on (positioning,
//!   notifications, calendars, remote course rows, wall clock).
//! - Keep every platform call behind a trait so hosts and tests inject their own.
//!
//! # Invariants
//! - Implementations report failures as `DeviceError`; they never panic.

use crate::model::calendar::{CalendarEvent, DeviceCalendar, StoredCalendarEvent};
use crate::model::geo::{Coordinate, CourseRow};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Failure reported by a platform or remote collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceError {
    pub message: String,
}

impl DeviceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for DeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for DeviceError {}

pub type DeviceResult<T> = Result<T, DeviceError>;

/// Accuracy hint passed to the positioning query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationAccuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
}

/// Current-position query of the device location provider.
pub trait PositionSource {
    fn current_position(&self, accuracy: LocationAccuracy) -> DeviceResult<Coordinate>;
}

/// Android notification channel settings applied before registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    pub id: &'static str,
    pub name: &'static str,
    pub max_importance: bool,
    pub vibration_pattern_ms: &'static [u32],
    pub light_color: &'static str,
}

/// Channel every reminder notification is posted on.
pub const DEFAULT_NOTIFICATION_CHANNEL: NotificationChannel = NotificationChannel {
    id: "default",
    name: "default",
    max_importance: true,
    vibration_pattern_ms: &[0, 250, 250, 250],
    light_color: "#007CF0",
};

/// Content of one local notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: bool,
    pub high_priority: bool,
}

/// Local notification provider of the device.
pub trait NotificationPlatform {
    /// `false` on simulators and emulators, which cannot deliver notifications.
    fn is_physical_device(&self) -> bool;
    fn configure_default_channel(&self, channel: &NotificationChannel) -> DeviceResult<()>;
    fn push_token(&self) -> DeviceResult<String>;
    /// Schedules one firing at `trigger_at` (epoch ms) and returns its platform id.
    fn schedule(&self, content: &NotificationContent, trigger_at: i64) -> DeviceResult<String>;
    fn cancel_all(&self) -> DeviceResult<()>;
}

/// Device calendar provider.
pub trait CalendarPlatform {
    fn calendars(&self) -> DeviceResult<Vec<DeviceCalendar>>;
    /// Creates the event and returns the provider's event id.
    fn create_event(&self, event: &CalendarEvent) -> DeviceResult<String>;
    fn events_between(
        &self,
        calendar_ids: &[String],
        start_at: i64,
        end_at: i64,
    ) -> DeviceResult<Vec<StoredCalendarEvent>>;
}

/// Read side of the remote course repository.
pub trait CourseSource {
    fn list_courses(&self) -> DeviceResult<Vec<CourseRow>>;
}

/// Wall clock in Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
            })
    }
}
