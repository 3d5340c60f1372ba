mod common;

use classvibes_core::{
    CalendarBridge, CalendarEventDraft, DeviceCapability, NotificationScheduler, PermissionGate,
    PermissionStatus, ProximityError, ScheduleOutcome, StoredCalendarEvent,
};
use common::{
    calendar, FakeCalendars, FakeCapabilities, FakeNotifications, FixedClock, HOUR_MS, NOW_MS,
};

fn draft(title: &str) -> CalendarEventDraft {
    CalendarEventDraft::new(title, NOW_MS + HOUR_MS, NOW_MS + 2 * HOUR_MS, "bring notes").unwrap()
}

#[test]
fn lists_only_modifiable_calendars() {
    let caps = FakeCapabilities::granting_all();
    let platform = FakeCalendars::with(vec![
        calendar("holidays", false),
        calendar("personal", true),
        calendar("work", true),
    ]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    let ids = bridge
        .list_writable_calendars()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["personal", "work"]);
}

#[test]
fn listing_with_denied_permission_is_empty() {
    let caps = FakeCapabilities::denying_all();
    let platform = FakeCalendars::with(vec![calendar("personal", true)]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    assert!(bridge.list_writable_calendars().unwrap().is_empty());
}

#[test]
fn create_event_defaults_to_first_writable_calendar_with_fixed_alarm() {
    let caps = FakeCapabilities::granting_all();
    let platform = FakeCalendars::with(vec![calendar("readonly", false), calendar("main", true)]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    let created = bridge
        .create_event(&draft("Física").with_time_zone("America/Argentina/Buenos_Aires"), None)
        .unwrap();

    assert_eq!(created.event_id, "event-1");
    assert_eq!(created.calendar_id, "main");
    let events = platform.created.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].calendar_id, "main");
    assert_eq!(events[0].notes, "bring notes");
    assert_eq!(
        events[0].time_zone.as_deref(),
        Some("America/Argentina/Buenos_Aires")
    );
    assert_eq!(events[0].alarms.len(), 1);
    assert_eq!(events[0].alarms[0].relative_offset_minutes, -15);
}

#[test]
fn explicit_calendar_id_is_used_as_given() {
    let caps = FakeCapabilities::granting_all();
    let platform = FakeCalendars::with(vec![calendar("main", true)]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    let created = bridge.create_event(&draft("Química"), Some("shared")).unwrap();
    assert_eq!(created.calendar_id, "shared");
    assert_eq!(platform.created.borrow()[0].calendar_id, "shared");
}

#[test]
fn no_writable_calendar_fails_and_schedules_nothing() {
    let clock = FixedClock(NOW_MS);
    let caps = FakeCapabilities::granting_all();
    let platform = FakeCalendars::with(vec![calendar("readonly", false)]);
    let notifications = FakeNotifications::new();
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);
    let scheduler = NotificationScheduler::new(PermissionGate::new(&caps), &notifications, &clock);

    let result = bridge
        .create_event(&draft("Historia"), None)
        .and_then(|created| scheduler.schedule(&created.companion));

    assert!(matches!(result, Err(ProximityError::NoCalendarAvailable)));
    assert!(platform.created.borrow().is_empty());
    assert_eq!(notifications.schedule_count(), 0);
}

#[test]
fn denied_calendar_permission_fails_create() {
    let caps = FakeCapabilities::granting_all()
        .prompting(DeviceCapability::Calendar, PermissionStatus::Denied);
    let platform = FakeCalendars::with(vec![calendar("main", true)]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    let err = bridge.create_event(&draft("Arte"), None).unwrap_err();
    assert!(matches!(
        err,
        ProximityError::PermissionDenied(DeviceCapability::Calendar)
    ));
    assert!(platform.created.borrow().is_empty());
}

#[test]
fn companion_reminder_targets_event_start() {
    let clock = FixedClock(NOW_MS);
    let caps = FakeCapabilities::granting_all();
    let platform = FakeCalendars::with(vec![calendar("main", true)]);
    let notifications = FakeNotifications::new();
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);
    let scheduler = NotificationScheduler::new(PermissionGate::new(&caps), &notifications, &clock);

    let created = bridge.create_event(&draft("Biología"), None).unwrap();
    assert_eq!(created.companion.title, "Biología");
    assert_eq!(created.companion.body, "Clase: Biología");
    assert_eq!(created.companion.trigger_at, NOW_MS + HOUR_MS);

    let outcome = scheduler.schedule(&created.companion).unwrap();
    assert!(matches!(outcome, ScheduleOutcome::Scheduled { .. }));
    assert_eq!(notifications.schedule_count(), 1);
}

#[test]
fn events_in_range_queries_writable_calendars_only() {
    let caps = FakeCapabilities::granting_all();
    let mut platform = FakeCalendars::with(vec![calendar("main", true), calendar("ro", false)]);
    platform.stored = vec![
        StoredCalendarEvent {
            id: "a".to_string(),
            calendar_id: "main".to_string(),
            title: "inside".to_string(),
            start_at: 100,
            end_at: 200,
        },
        StoredCalendarEvent {
            id: "b".to_string(),
            calendar_id: "main".to_string(),
            title: "outside".to_string(),
            start_at: 5_000,
            end_at: 6_000,
        },
        StoredCalendarEvent {
            id: "c".to_string(),
            calendar_id: "ro".to_string(),
            title: "readonly".to_string(),
            start_at: 100,
            end_at: 200,
        },
    ];
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    let events = bridge.events_in_range(0, 1_000).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "a");
    assert_eq!(*platform.queried_ids.borrow(), vec!["main".to_string()]);

    assert!(bridge.events_in_range(1_000, 1_000).unwrap().is_empty());
}

#[test]
fn events_in_range_with_denied_permission_is_empty() {
    let caps = FakeCapabilities::denying_all();
    let platform = FakeCalendars::with(vec![calendar("main", true)]);
    let bridge = CalendarBridge::new(PermissionGate::new(&caps), &platform);

    assert!(bridge.events_in_range(0, 1_000).unwrap().is_empty());
    assert!(platform.queried_ids.borrow().is_empty());
}
