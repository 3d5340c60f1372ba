//! Persisted reminder (alert) store with read/unread lifecycle.
//!
//! # Responsibility
//! - Create, list, mark-read and delete reminders.
//! - Hand back a pending notification request for reminders due in the future.
//!
//! # Invariants
//! - `create` assigns a fresh id, `created_at = now` and `read = false`.
//! - `mark_read` and `delete` on an unknown id leave the store unchanged and
//!   return `Ok`.
//! - Each mutation is one row-level statement; concurrent writers cannot lose
//!   each other's updates.
//! - A failed write leaves no partial state behind.

use crate::device::Clock;
use crate::error::{ProximityError, ProximityResult};
use crate::model::reminder::{new_reminder_id, NewReminder, Reminder, ReminderId};
use crate::repo::reminder_repo::ReminderRepository;
use crate::service::notification_scheduler::{
    NotificationScheduler, ScheduleOutcome, ScheduleRequest,
};
use log::{debug, error, info};

/// Logical store name reported in diagnostics.
pub const ALERTS_NAMESPACE: &str = "classvibes_alerts";

/// Result of `AlertStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedReminder {
    pub reminder: Reminder,
    /// Present iff `due_at` was in the future at creation time.
    pub follow_up: Option<ScheduleRequest>,
}

/// Result of the composed create-then-schedule flow.
///
/// The reminder is persisted even when scheduling fails; `schedule` tells the
/// caller whether a compensating delete is wanted.
#[derive(Debug)]
pub struct CreateOutcome {
    pub reminder: Reminder,
    /// `None` when nothing needed scheduling.
    pub schedule: Option<ProximityResult<ScheduleOutcome>>,
}

pub struct AlertStore<'a, R: ReminderRepository> {
    repo: R,
    clock: &'a dyn Clock,
}

impl<'a, R: ReminderRepository> AlertStore<'a, R> {
    pub fn new(repo: R, clock: &'a dyn Clock) -> Self {
        Self { repo, clock }
    }

    /// Persists a new reminder and returns it with its pending follow-up.
    pub fn create(&self, input: NewReminder) -> ProximityResult<CreatedReminder> {
        let now = self.clock.now_ms();
        let reminder = input.into_reminder(new_reminder_id(), now);

        if let Err(err) = self.repo.insert_reminder(&reminder) {
            error!(
                "event=reminder_create module=alerts status=error namespace={ALERTS_NAMESPACE} error_code=insert_failed error={err}"
            );
            return Err(err.into());
        }

        let follow_up = (reminder.due_at > now).then(|| ScheduleRequest {
            title: reminder.title.clone(),
            body: reminder.message.clone(),
            trigger_at: reminder.due_at,
        });
        info!(
            "event=reminder_create module=alerts status=ok namespace={ALERTS_NAMESPACE} reminder_id={} category={} follow_up={}",
            reminder.id,
            reminder.category.as_str(),
            follow_up.is_some()
        );

        Ok(CreatedReminder {
            reminder,
            follow_up,
        })
    }

    /// Creates a reminder and runs its follow-up through `scheduler`.
    ///
    /// Scheduling runs at most once and only for reminders due in the future.
    pub fn create_and_schedule(
        &self,
        input: NewReminder,
        scheduler: &NotificationScheduler<'_>,
    ) -> ProximityResult<CreateOutcome> {
        let CreatedReminder {
            reminder,
            follow_up,
        } = self.create(input)?;

        let schedule = follow_up.map(|request| {
            let result = scheduler.schedule(&request);
            if let Err(err) = &result {
                error!(
                    "event=reminder_schedule module=alerts status=error reminder_id={} error_code={} error={err}",
                    reminder.id,
                    err.code()
                );
            }
            result
        });

        Ok(CreateOutcome { reminder, schedule })
    }

    /// All reminders in insertion order.
    pub fn list(&self) -> ProximityResult<Vec<Reminder>> {
        self.repo.list_reminders().map_err(|err| {
            error!("event=reminder_list module=alerts status=error error={err}");
            ProximityError::from(err)
        })
    }

    pub fn get(&self, id: ReminderId) -> ProximityResult<Option<Reminder>> {
        self.repo.get_reminder(id).map_err(|err| {
            error!("event=reminder_get module=alerts status=error reminder_id={id} error={err}");
            ProximityError::from(err)
        })
    }

    /// Marks one reminder as read. Unknown ids are ignored.
    pub fn mark_read(&self, id: ReminderId) -> ProximityResult<()> {
        let matched = self.repo.mark_read(id).map_err(|err| {
            error!(
                "event=reminder_mark_read module=alerts status=error reminder_id={id} error={err}"
            );
            ProximityError::from(err)
        })?;
        debug!("event=reminder_mark_read module=alerts status=ok reminder_id={id} matched={matched}");
        Ok(())
    }

    /// Deletes one reminder. Unknown ids are ignored.
    pub fn delete(&self, id: ReminderId) -> ProximityResult<()> {
        let removed = self.repo.delete_reminder(id).map_err(|err| {
            error!("event=reminder_delete module=alerts status=error reminder_id={id} error={err}");
            ProximityError::from(err)
        })?;
        info!("event=reminder_delete module=alerts status=ok reminder_id={id} removed={removed}");
        Ok(())
    }

    pub fn unread_count(&self) -> ProximityResult<u64> {
        self.repo.count_unread().map_err(|err| {
            error!("event=reminder_unread_count module=alerts status=error error={err}");
            ProximityError::from(err)
        })
    }
}
