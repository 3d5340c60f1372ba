//! Subsystem boundary error taxonomy.
//!
//! # Invariants
//! - Every collaborator failure is converted to one of these kinds before it
//!   reaches a caller.
//! - There is no not-found kind; unknown reminder ids are silent no-ops.

use crate::capability::device_capability::DeviceCapability;
use crate::db::DbError;
use crate::device::DeviceError;
use crate::repo::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProximityResult<T> = Result<T, ProximityError>;

#[derive(Debug)]
pub enum ProximityError {
    /// The user refused (or the device lacks) the named capability.
    PermissionDenied(DeviceCapability),
    /// Positioning hardware/query failure, or a platform call that failed.
    DeviceUnavailable(String),
    /// Persisted read or write failed.
    StorageFailure(StoreError),
    /// No writable calendar exists on the device.
    NoCalendarAvailable,
}

impl ProximityError {
    /// Stable machine-readable code used in logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "permission_denied",
            Self::DeviceUnavailable(_) => "device_unavailable",
            Self::StorageFailure(_) => "storage_failure",
            Self::NoCalendarAvailable => "no_calendar_available",
        }
    }
}

impl Display for ProximityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied(capability) => {
                write!(f, "permission denied: {}", capability.description())
            }
            Self::DeviceUnavailable(message) => write!(f, "device unavailable: {message}"),
            Self::StorageFailure(err) => write!(f, "storage failure: {err}"),
            Self::NoCalendarAvailable => write!(f, "no writable calendar is available"),
        }
    }
}

impl Error for ProximityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ProximityError {
    fn from(value: StoreError) -> Self {
        Self::StorageFailure(value)
    }
}

impl From<DbError> for ProximityError {
    fn from(value: DbError) -> Self {
        Self::StorageFailure(StoreError::Db(value))
    }
}

impl From<DeviceError> for ProximityError {
    fn from(value: DeviceError) -> Self {
        Self::DeviceUnavailable(value.message)
    }
}
