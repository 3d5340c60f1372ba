//! Device calendar bridge.
//!
//! # Responsibility
//! - List writable device calendars and create events on them.
//! - Describe the companion app-level reminder without scheduling it.
//!
//! # Invariants
//! - Every created event carries exactly one alarm, 15 minutes before start.
//! - Event creation and its companion reminder are not transactional; the
//!   caller owns the companion request.

use crate::capability::device_capability::DeviceCapability;
use crate::capability::gate::PermissionGate;
use crate::device::CalendarPlatform;
use crate::error::{ProximityError, ProximityResult};
use crate::model::calendar::{
    CalendarEvent, CalendarEventDraft, DeviceCalendar, EventAlarm, StoredCalendarEvent,
};
use crate::service::notification_scheduler::ScheduleRequest;
use log::{error, info, warn};

/// Alarm offset attached to every created event.
pub const EVENT_ALARM_OFFSET_MINUTES: i32 = -15;
/// Prefix of the companion notification body.
pub const COMPANION_BODY_PREFIX: &str = "Clase: ";

/// Result of a successful `create_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    pub event_id: String,
    pub calendar_id: String,
    /// App-level reminder the caller may schedule for this event.
    pub companion: ScheduleRequest,
}

pub struct CalendarBridge<'a> {
    gate: PermissionGate<'a>,
    platform: &'a dyn CalendarPlatform,
}

impl<'a> CalendarBridge<'a> {
    pub fn new(gate: PermissionGate<'a>, platform: &'a dyn CalendarPlatform) -> Self {
        Self { gate, platform }
    }

    /// Calendars the app may write to; empty when permission is denied.
    pub fn list_writable_calendars(&self) -> ProximityResult<Vec<DeviceCalendar>> {
        if !self.gate.ensure(DeviceCapability::Calendar).is_granted() {
            return Ok(Vec::new());
        }
        self.writable_calendars()
    }

    /// Creates one event, on `calendar_id` or on the first writable calendar.
    pub fn create_event(
        &self,
        draft: &CalendarEventDraft,
        calendar_id: Option<&str>,
    ) -> ProximityResult<CreatedEvent> {
        if !self.gate.ensure(DeviceCapability::Calendar).is_granted() {
            return Err(ProximityError::PermissionDenied(DeviceCapability::Calendar));
        }

        let calendar_id = match calendar_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => self
                .writable_calendars()?
                .into_iter()
                .next()
                .map(|calendar| calendar.id)
                .ok_or_else(|| {
                    warn!("event=calendar_event_create module=calendar status=error error_code=no_calendar_available");
                    ProximityError::NoCalendarAvailable
                })?,
        };

        let event = CalendarEvent {
            title: draft.title().to_string(),
            start_at: draft.start_at(),
            end_at: draft.end_at(),
            notes: draft.notes().to_string(),
            calendar_id: calendar_id.clone(),
            time_zone: draft.time_zone().map(str::to_string),
            alarms: vec![EventAlarm {
                relative_offset_minutes: EVENT_ALARM_OFFSET_MINUTES,
            }],
        };

        let event_id = self.platform.create_event(&event).map_err(|err| {
            error!(
                "event=calendar_event_create module=calendar status=error calendar_id={calendar_id} error_code=platform_create_failed error={err}"
            );
            ProximityError::from(err)
        })?;
        info!(
            "event=calendar_event_create module=calendar status=ok calendar_id={calendar_id} event_id={event_id}"
        );

        Ok(CreatedEvent {
            event_id,
            calendar_id,
            companion: ScheduleRequest {
                title: event.title.clone(),
                body: format!("{COMPANION_BODY_PREFIX}{}", event.title),
                trigger_at: event.start_at,
            },
        })
    }

    /// Events on all writable calendars overlapping `[start_at, end_at]`.
    ///
    /// Returns an empty list when permission is denied or the range is empty.
    pub fn events_in_range(
        &self,
        start_at: i64,
        end_at: i64,
    ) -> ProximityResult<Vec<StoredCalendarEvent>> {
        if start_at >= end_at {
            warn!("event=calendar_events_query module=calendar status=skipped reason=empty_range");
            return Ok(Vec::new());
        }
        if !self.gate.ensure(DeviceCapability::Calendar).is_granted() {
            return Ok(Vec::new());
        }

        let calendar_ids = self
            .writable_calendars()?
            .into_iter()
            .map(|calendar| calendar.id)
            .collect::<Vec<_>>();
        if calendar_ids.is_empty() {
            return Ok(Vec::new());
        }

        let events = self
            .platform
            .events_between(&calendar_ids, start_at, end_at)
            .map_err(|err| {
                error!("event=calendar_events_query module=calendar status=error error={err}");
                ProximityError::from(err)
            })?;
        info!(
            "event=calendar_events_query module=calendar status=ok calendars={} events={}",
            calendar_ids.len(),
            events.len()
        );
        Ok(events)
    }

    fn writable_calendars(&self) -> ProximityResult<Vec<DeviceCalendar>> {
        let calendars = self.platform.calendars().map_err(|err| {
            error!("event=calendar_list module=calendar status=error error={err}");
            ProximityError::from(err)
        })?;
        Ok(calendars
            .into_iter()
            .filter(|calendar| calendar.allows_modifications)
            .collect())
    }
}
