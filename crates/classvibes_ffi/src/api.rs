//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose distance ranking and reminder CRUD to Dart via FRB.
//! - Hand notification scheduling back to the host as a pending request,
//!   since the device notification API lives on the Dart side.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Failures are reported inside response envelopes, never thrown.

use classvibes_core::db::open_db;
use classvibes_core::{
    core_version as core_version_inner, distance_km, init_logging as init_logging_inner,
    ping as ping_inner, rank_by_distance, AlertStore, Coordinate, NewReminder, PlacedEntity,
    ProximityResult, Reminder, SqliteReminderRepository, SystemClock,
};
use log::debug;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const REMINDER_DB_FILE_NAME: &str = "classvibes_alerts.sqlite3";
const REMINDER_DB_PATH_ENV: &str = "CLASSVIBES_DB_PATH";
static REMINDER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Course (or any place) to rank, as sent from Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPlace {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Ranked place with its distance from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlace {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// Ranking response; `message` is empty on success.
#[derive(Debug, Clone, PartialEq)]
pub struct RankResponse {
    pub items: Vec<RankedPlace>,
    pub message: String,
}

/// Great-circle distance in kilometres; `None` for out-of-range coordinates.
#[flutter_rust_bridge::frb(sync)]
pub fn geo_distance_km(
    from_latitude: f64,
    from_longitude: f64,
    to_latitude: f64,
    to_longitude: f64,
) -> Option<f64> {
    let from = Coordinate::new(from_latitude, from_longitude).ok()?;
    let to = Coordinate::new(to_latitude, to_longitude).ok()?;
    Some(distance_km(from, to))
}

/// Ranks places by ascending distance from the origin.
///
/// Places with invalid coordinates are rejected as a whole request so the
/// response length always equals the input length.
#[flutter_rust_bridge::frb(sync)]
pub fn geo_rank(origin_latitude: f64, origin_longitude: f64, places: Vec<GeoPlace>) -> RankResponse {
    let origin = match Coordinate::new(origin_latitude, origin_longitude) {
        Ok(origin) => origin,
        Err(err) => return RankResponse::failure(format!("geo_rank failed: origin {err}")),
    };

    let mut placed = Vec::with_capacity(places.len());
    for place in places {
        match Coordinate::new(place.latitude, place.longitude) {
            Ok(coordinate) => placed.push(PlacedEntity {
                id: place.id,
                name: place.name,
                coordinate,
            }),
            Err(err) => {
                return RankResponse::failure(format!("geo_rank failed: place `{}` {err}", place.id))
            }
        }
    }

    let items = rank_by_distance(origin, &placed)
        .into_iter()
        .map(|entity| RankedPlace {
            id: entity.id,
            name: entity.name,
            latitude: entity.coordinate.latitude(),
            longitude: entity.coordinate.longitude(),
            distance_km: entity.distance_km,
        })
        .collect();
    RankResponse {
        items,
        message: String::new(),
    }
}

impl RankResponse {
    fn failure(message: String) -> Self {
        Self {
            items: Vec::new(),
            message,
        }
    }
}

/// Reminder as exposed to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItem {
    pub id: String,
    pub title: String,
    pub message: String,
    pub due_at_epoch_ms: i64,
    /// One of `info|warning|error|success`.
    pub category: String,
    pub read: bool,
    pub created_at_epoch_ms: i64,
}

/// Notification the host should schedule for a newly created reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNotification {
    pub title: String,
    pub body: String,
    pub trigger_at_epoch_ms: i64,
}

/// Envelope for reminder mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    /// Machine-readable failure kind; empty on success.
    pub error_code: String,
    pub message: String,
    pub reminder: Option<ReminderItem>,
    pub pending_notification: Option<PendingNotification>,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            error_code: String::new(),
            message: message.into(),
            reminder: None,
            pending_notification: None,
        }
    }

    fn failure(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_code: error_code.into(),
            message: message.into(),
            reminder: None,
            pending_notification: None,
        }
    }
}

/// Envelope for reminder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderListResponse {
    pub items: Vec<ReminderItem>,
    pub unread: u64,
    pub message: String,
}

/// Creates a reminder; returns the notification to schedule when due later.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_create(
    title: String,
    message: String,
    due_at_epoch_ms: i64,
    category: String,
) -> ReminderActionResponse {
    let input = match NewReminder::from_parts(title, message, due_at_epoch_ms, category.as_str()) {
        Ok(input) => input,
        Err(err) => return ReminderActionResponse::failure("invalid_input", err.to_string()),
    };

    match with_alert_store(|store| store.create(input)) {
        Ok(created) => ReminderActionResponse {
            reminder: Some(to_reminder_item(created.reminder)),
            pending_notification: created.follow_up.map(|request| PendingNotification {
                title: request.title,
                body: request.body,
                trigger_at_epoch_ms: request.trigger_at,
            }),
            ..ReminderActionResponse::success("Reminder created.")
        },
        Err(response) => response,
    }
}

/// Lists all reminders in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_list() -> ReminderListResponse {
    let listed = with_alert_store(|store| Ok((store.list()?, store.unread_count()?)));
    match listed {
        Ok((reminders, unread)) => ReminderListResponse {
            message: format!("Found {} reminder(s).", reminders.len()),
            items: reminders.into_iter().map(to_reminder_item).collect(),
            unread,
        },
        Err(response) => ReminderListResponse {
            items: Vec::new(),
            unread: 0,
            message: response.message,
        },
    }
}

/// Marks a reminder as read. Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_mark_read(reminder_id: String) -> ReminderActionResponse {
    let Some(id) = parse_reminder_id(&reminder_id) else {
        return ReminderActionResponse::success("Reminder marked as read.");
    };
    match with_alert_store(|store| store.mark_read(id)) {
        Ok(()) => ReminderActionResponse::success("Reminder marked as read."),
        Err(response) => response,
    }
}

/// Deletes a reminder. Unknown ids succeed without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_delete(reminder_id: String) -> ReminderActionResponse {
    let Some(id) = parse_reminder_id(&reminder_id) else {
        return ReminderActionResponse::success("Reminder deleted.");
    };
    match with_alert_store(|store| store.delete(id)) {
        Ok(()) => ReminderActionResponse::success("Reminder deleted."),
        Err(response) => response,
    }
}

/// Ids that are not UUIDs can never match a stored reminder, so they resolve
/// to `None` and the caller treats them as unknown.
fn parse_reminder_id(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("event=ffi_reminder_id module=ffi status=unknown id={raw}");
            None
        }
    }
}

fn resolve_reminder_db_path() -> PathBuf {
    REMINDER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(REMINDER_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(REMINDER_DB_FILE_NAME)
        })
        .clone()
}

fn with_alert_store<T>(
    f: impl FnOnce(&AlertStore<'_, SqliteReminderRepository<'_>>) -> ProximityResult<T>,
) -> Result<T, ReminderActionResponse> {
    let conn = open_db(resolve_reminder_db_path()).map_err(|err| {
        ReminderActionResponse::failure("storage_failure", format!("reminder DB open failed: {err}"))
    })?;
    let clock = SystemClock;
    let store = AlertStore::new(SqliteReminderRepository::new(&conn), &clock);
    f(&store).map_err(|err| ReminderActionResponse::failure(err.code(), err.to_string()))
}

fn to_reminder_item(reminder: Reminder) -> ReminderItem {
    ReminderItem {
        id: reminder.id.to_string(),
        title: reminder.title,
        message: reminder.message,
        due_at_epoch_ms: reminder.due_at,
        category: reminder.category.as_str().to_string(),
        read: reminder.read,
        created_at_epoch_ms: reminder.created_at,
    }
}
