//! Device capabilities that require a user grant.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceCapability {
    Location,
    Calendar,
    Notification,
}

impl DeviceCapability {
    /// Stable string id used in logs and at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Calendar => "calendar",
            Self::Notification => "notification",
        }
    }

    /// User-facing explanation shown when the grant is missing.
    pub fn description(self) -> &'static str {
        match self {
            Self::Location => "Location permission is needed to rank courses near you.",
            Self::Calendar => "Calendar permission is needed to add classes to your calendar.",
            Self::Notification => "Notification permission is needed to send class reminders.",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Location, Self::Calendar, Self::Notification]
    }
}

impl Display for DeviceCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceCapability;

    #[test]
    fn display_uses_stable_id() {
        assert_eq!(DeviceCapability::Calendar.to_string(), "calendar");
        assert_eq!(DeviceCapability::Notification.as_str(), "notification");
    }

    #[test]
    fn descriptions_mention_their_subject() {
        assert!(DeviceCapability::Location.description().contains("Location"));
        assert!(DeviceCapability::Calendar.description().contains("Calendar"));
        assert!(DeviceCapability::Notification
            .description()
            .contains("Notification"));
    }
}
