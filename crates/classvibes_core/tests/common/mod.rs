#![allow(dead_code)]

use classvibes_core::{
    CalendarEvent, CalendarPlatform, CapabilityProvider, Clock, Coordinate, CourseRow,
    CourseSource, DeviceCalendar, DeviceCapability, DeviceError, DeviceResult, LocationAccuracy,
    NotificationChannel, NotificationContent, NotificationPlatform, PermissionStatus,
    PositionSource, StoredCalendarEvent,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub const NOW_MS: i64 = 1_760_000_000_000;
pub const HOUR_MS: i64 = 60 * 60 * 1000;

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Permission fake with a scripted status and prompt answer per capability.
#[derive(Default)]
pub struct FakeCapabilities {
    statuses: HashMap<DeviceCapability, PermissionStatus>,
    answers: HashMap<DeviceCapability, PermissionStatus>,
    pub requests: RefCell<Vec<DeviceCapability>>,
}

impl FakeCapabilities {
    pub fn granting_all() -> Self {
        let mut caps = Self::default();
        for capability in DeviceCapability::all() {
            caps.statuses.insert(capability, PermissionStatus::Granted);
        }
        caps
    }

    pub fn denying_all() -> Self {
        Self::default()
    }

    /// Not granted yet; the prompt returns `answer`.
    pub fn prompting(mut self, capability: DeviceCapability, answer: PermissionStatus) -> Self {
        self.statuses.insert(capability, PermissionStatus::Denied);
        self.answers.insert(capability, answer);
        self
    }

    pub fn with_status(mut self, capability: DeviceCapability, status: PermissionStatus) -> Self {
        self.statuses.insert(capability, status);
        self
    }
}

impl CapabilityProvider for FakeCapabilities {
    fn status(&self, capability: DeviceCapability) -> PermissionStatus {
        self.statuses
            .get(&capability)
            .copied()
            .unwrap_or(PermissionStatus::Denied)
    }

    fn request(&self, capability: DeviceCapability) -> PermissionStatus {
        self.requests.borrow_mut().push(capability);
        self.answers
            .get(&capability)
            .copied()
            .unwrap_or(PermissionStatus::Denied)
    }
}

pub struct FakePosition {
    pub result: DeviceResult<Coordinate>,
    pub last_accuracy: Cell<Option<LocationAccuracy>>,
    pub queries: Cell<u32>,
}

impl FakePosition {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinate::new(latitude, longitude).unwrap()),
            last_accuracy: Cell::new(None),
            queries: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(DeviceError::new(message)),
            last_accuracy: Cell::new(None),
            queries: Cell::new(0),
        }
    }
}

impl PositionSource for FakePosition {
    fn current_position(&self, accuracy: LocationAccuracy) -> DeviceResult<Coordinate> {
        self.queries.set(self.queries.get() + 1);
        self.last_accuracy.set(Some(accuracy));
        self.result.clone()
    }
}

pub struct FakeNotifications {
    pub physical: bool,
    pub fail_schedule: bool,
    pub token: String,
    pub scheduled: RefCell<Vec<(NotificationContent, i64)>>,
    pub channels: RefCell<Vec<String>>,
    pub cancel_calls: Cell<u32>,
}

impl FakeNotifications {
    pub fn new() -> Self {
        Self {
            physical: true,
            fail_schedule: false,
            token: "ExponentPushToken[test-token]".to_string(),
            scheduled: RefCell::new(Vec::new()),
            channels: RefCell::new(Vec::new()),
            cancel_calls: Cell::new(0),
        }
    }

    pub fn simulator() -> Self {
        Self {
            physical: false,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_schedule: true,
            ..Self::new()
        }
    }

    pub fn schedule_count(&self) -> usize {
        self.scheduled.borrow().len()
    }
}

impl NotificationPlatform for FakeNotifications {
    fn is_physical_device(&self) -> bool {
        self.physical
    }

    fn configure_default_channel(&self, channel: &NotificationChannel) -> DeviceResult<()> {
        self.channels.borrow_mut().push(channel.id.to_string());
        Ok(())
    }

    fn push_token(&self) -> DeviceResult<String> {
        Ok(self.token.clone())
    }

    fn schedule(&self, content: &NotificationContent, trigger_at: i64) -> DeviceResult<String> {
        if self.fail_schedule {
            return Err(DeviceError::new("notification service unavailable"));
        }
        let mut scheduled = self.scheduled.borrow_mut();
        scheduled.push((content.clone(), trigger_at));
        Ok(format!("notification-{}", scheduled.len()))
    }

    fn cancel_all(&self) -> DeviceResult<()> {
        self.cancel_calls.set(self.cancel_calls.get() + 1);
        self.scheduled.borrow_mut().clear();
        Ok(())
    }
}

pub struct FakeCalendars {
    pub calendars: Vec<DeviceCalendar>,
    pub created: RefCell<Vec<CalendarEvent>>,
    pub stored: Vec<StoredCalendarEvent>,
    pub queried_ids: RefCell<Vec<String>>,
}

impl FakeCalendars {
    pub fn with(calendars: Vec<DeviceCalendar>) -> Self {
        Self {
            calendars,
            created: RefCell::new(Vec::new()),
            stored: Vec::new(),
            queried_ids: RefCell::new(Vec::new()),
        }
    }
}

pub fn calendar(id: &str, writable: bool) -> DeviceCalendar {
    DeviceCalendar {
        id: id.to_string(),
        title: format!("Calendar {id}"),
        allows_modifications: writable,
    }
}

impl CalendarPlatform for FakeCalendars {
    fn calendars(&self) -> DeviceResult<Vec<DeviceCalendar>> {
        Ok(self.calendars.clone())
    }

    fn create_event(&self, event: &CalendarEvent) -> DeviceResult<String> {
        let mut created = self.created.borrow_mut();
        created.push(event.clone());
        Ok(format!("event-{}", created.len()))
    }

    fn events_between(
        &self,
        calendar_ids: &[String],
        start_at: i64,
        end_at: i64,
    ) -> DeviceResult<Vec<StoredCalendarEvent>> {
        self.queried_ids
            .borrow_mut()
            .extend(calendar_ids.iter().cloned());
        Ok(self
            .stored
            .iter()
            .filter(|event| calendar_ids.contains(&event.calendar_id))
            .filter(|event| event.start_at <= end_at && event.end_at >= start_at)
            .cloned()
            .collect())
    }
}

pub struct FakeCourses(pub DeviceResult<Vec<CourseRow>>);

impl CourseSource for FakeCourses {
    fn list_courses(&self) -> DeviceResult<Vec<CourseRow>> {
        self.0.clone()
    }
}

pub fn course(id: &str, coordinate: Option<(f64, f64)>) -> CourseRow {
    CourseRow {
        id: id.to_string(),
        name: format!("Course {id}"),
        subject: "general".to_string(),
        professor_name: Some("Prof. Díaz".to_string()),
        coordinate: coordinate.map(|(lat, lon)| Coordinate::new(lat, lon).unwrap()),
    }
}
