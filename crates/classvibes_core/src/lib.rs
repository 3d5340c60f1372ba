//! Proximity and reminder core for ClassVibes.
//!
//! Location-based course ranking, the persisted reminder store, one-shot
//! notification scheduling and the device calendar bridge. Device APIs are
//! reached only through the traits in [`device`] and [`capability`].

pub mod capability;
pub mod db;
pub mod device;
pub mod error;
pub mod location;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use capability::device_capability::DeviceCapability;
pub use capability::gate::{CapabilityProvider, GateDecision, PermissionGate, PermissionStatus};
pub use device::{
    CalendarPlatform, Clock, CourseSource, DeviceError, DeviceResult, LocationAccuracy,
    NotificationChannel, NotificationContent, NotificationPlatform, PositionSource, SystemClock,
};
pub use error::{ProximityError, ProximityResult};
pub use location::provider::LocationProvider;
pub use location::ranking::{distance_km, rank_by_distance, EARTH_RADIUS_KM};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::calendar::{
    CalendarEvent, CalendarEventDraft, CalendarValidationError, DeviceCalendar, EventAlarm,
    StoredCalendarEvent,
};
pub use model::geo::{Coordinate, CoordinateError, CourseRow, LocatedEntity, PlacedEntity};
pub use model::reminder::{
    NewReminder, Reminder, ReminderCategory, ReminderId, ReminderValidationError,
};
pub use repo::reminder_repo::{ReminderRepository, SqliteReminderRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use repo::{StoreError, StoreResult};
pub use service::alert_store::{AlertStore, CreateOutcome, CreatedReminder};
pub use service::calendar_bridge::{CalendarBridge, CreatedEvent};
pub use service::nearby_courses::{NearbyCourseService, NearbyCourses};
pub use service::notification_scheduler::{
    NotificationScheduler, PushRegistration, ScheduleOutcome, ScheduleRequest, SchedulingAdvisory,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
