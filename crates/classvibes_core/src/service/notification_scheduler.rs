//! One-shot local notification scheduling.
//!
//! # Responsibility
//! - Schedule and cancel local notifications through the permission gate.
//! - Register the device for push delivery and remember its token.
//!
//! # Invariants
//! - One `schedule` call produces at most one future firing.
//! - A trigger instant at or before `now` is never handed to the platform.
//! - A device without notification support yields an advisory, not an error.

use crate::capability::device_capability::DeviceCapability;
use crate::capability::gate::PermissionGate;
use crate::device::{
    Clock, NotificationContent, NotificationPlatform, DEFAULT_NOTIFICATION_CHANNEL,
};
use crate::error::{ProximityError, ProximityResult};
use crate::repo::settings_repo::{SettingsRepository, NOTIFICATION_TOKEN_KEY};
use log::{error, info, warn};

/// Pending request to schedule one notification.
///
/// Returned by store and calendar operations so the caller decides when (and
/// whether) to run it, and can compensate if it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub title: String,
    pub body: String,
    /// Unix epoch milliseconds.
    pub trigger_at: i64,
}

/// Non-fatal reasons a scheduling or registration step was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingAdvisory {
    /// Simulators and emulators cannot show local notifications.
    NoPhysicalDevice,
    /// The trigger instant is not in the future.
    TriggerNotInFuture,
}

impl SchedulingAdvisory {
    /// User-facing advisory text.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoPhysicalDevice => "A physical device is required to receive notifications.",
            Self::TriggerNotInFuture => "The reminder time has already passed; no notification was scheduled.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Scheduled { notification_id: String },
    Skipped(SchedulingAdvisory),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushRegistration {
    Registered { token: String },
    Skipped(SchedulingAdvisory),
}

pub struct NotificationScheduler<'a> {
    gate: PermissionGate<'a>,
    platform: &'a dyn NotificationPlatform,
    clock: &'a dyn Clock,
}

impl<'a> NotificationScheduler<'a> {
    pub fn new(
        gate: PermissionGate<'a>,
        platform: &'a dyn NotificationPlatform,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            gate,
            platform,
            clock,
        }
    }

    /// Schedules one notification firing at `request.trigger_at`.
    pub fn schedule(&self, request: &ScheduleRequest) -> ProximityResult<ScheduleOutcome> {
        if !self.platform.is_physical_device() {
            warn!("event=notification_schedule module=notifications status=skipped reason=no_physical_device");
            return Ok(ScheduleOutcome::Skipped(SchedulingAdvisory::NoPhysicalDevice));
        }
        if !self.gate.ensure(DeviceCapability::Notification).is_granted() {
            return Err(ProximityError::PermissionDenied(
                DeviceCapability::Notification,
            ));
        }

        let now = self.clock.now_ms();
        if request.trigger_at <= now {
            warn!(
                "event=notification_schedule module=notifications status=skipped reason=trigger_not_in_future trigger_at={} now={now}",
                request.trigger_at
            );
            return Ok(ScheduleOutcome::Skipped(
                SchedulingAdvisory::TriggerNotInFuture,
            ));
        }

        let content = NotificationContent {
            title: request.title.clone(),
            body: request.body.clone(),
            sound: true,
            high_priority: true,
        };
        match self.platform.schedule(&content, request.trigger_at) {
            Ok(notification_id) => {
                info!(
                    "event=notification_schedule module=notifications status=ok notification_id={notification_id} trigger_at={}",
                    request.trigger_at
                );
                Ok(ScheduleOutcome::Scheduled { notification_id })
            }
            Err(err) => {
                error!(
                    "event=notification_schedule module=notifications status=error error_code=platform_schedule_failed error={err}"
                );
                Err(err.into())
            }
        }
    }

    /// Convenience wrapper building the request from parts.
    pub fn schedule_at(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        trigger_at: i64,
    ) -> ProximityResult<ScheduleOutcome> {
        self.schedule(&ScheduleRequest {
            title: title.into(),
            body: body.into(),
            trigger_at,
        })
    }

    /// Clears every pending notification. Not selective and not reversible.
    pub fn cancel_all(&self) -> ProximityResult<()> {
        self.platform.cancel_all().map_err(|err| {
            error!(
                "event=notification_cancel_all module=notifications status=error error={err}"
            );
            ProximityError::from(err)
        })?;
        info!("event=notification_cancel_all module=notifications status=ok");
        Ok(())
    }

    /// Prepares the default channel, obtains the push token and stores it.
    pub fn register_for_push(
        &self,
        settings: &dyn SettingsRepository,
    ) -> ProximityResult<PushRegistration> {
        self.platform
            .configure_default_channel(&DEFAULT_NOTIFICATION_CHANNEL)
            .map_err(|err| {
                error!(
                    "event=push_register module=notifications status=error error_code=channel_setup_failed error={err}"
                );
                ProximityError::from(err)
            })?;

        if !self.platform.is_physical_device() {
            warn!("event=push_register module=notifications status=skipped reason=no_physical_device");
            return Ok(PushRegistration::Skipped(
                SchedulingAdvisory::NoPhysicalDevice,
            ));
        }
        if !self.gate.ensure(DeviceCapability::Notification).is_granted() {
            return Err(ProximityError::PermissionDenied(
                DeviceCapability::Notification,
            ));
        }

        let token = self.platform.push_token().map_err(|err| {
            error!(
                "event=push_register module=notifications status=error error_code=push_token_failed error={err}"
            );
            ProximityError::from(err)
        })?;
        settings
            .put_setting(NOTIFICATION_TOKEN_KEY, token.as_str())
            .map_err(|err| {
                error!(
                    "event=push_register module=notifications status=error error_code=token_store_failed error={err}"
                );
                ProximityError::from(err)
            })?;
        info!("event=push_register module=notifications status=ok");
        Ok(PushRegistration::Registered { token })
    }

    /// Returns the token saved by the last successful registration.
    pub fn stored_push_token(
        &self,
        settings: &dyn SettingsRepository,
    ) -> ProximityResult<Option<String>> {
        settings.get_setting(NOTIFICATION_TOKEN_KEY).map_err(|err| {
            error!("event=push_token_read module=notifications status=error error={err}");
            ProximityError::from(err)
        })
    }
}
