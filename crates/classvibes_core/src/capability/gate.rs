//! Uniform check-then-request permission gate.
//!
//! # Invariants
//! - `ensure` prompts the user at most once per call.
//! - `ensure` never fails; `Unavailable` collapses into `Denied`.

use crate::capability::device_capability::DeviceCapability;
use log::{info, warn};

/// Grant state reported by the platform for one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The device cannot offer this capability at all.
    Unavailable,
}

/// Platform seam for permission queries and prompts.
///
/// Injected into `PermissionGate` so tests can substitute a fake.
pub trait CapabilityProvider {
    /// Current grant without prompting.
    fn status(&self, capability: DeviceCapability) -> PermissionStatus;
    /// Prompts the user and returns the resulting grant.
    fn request(&self, capability: DeviceCapability) -> PermissionStatus;
}

/// Final gate decision returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Granted,
    Denied,
}

impl GateDecision {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Shared gate handle; cheap to copy into every device-facing component.
#[derive(Clone, Copy)]
pub struct PermissionGate<'a> {
    provider: &'a dyn CapabilityProvider,
}

impl<'a> PermissionGate<'a> {
    pub fn new(provider: &'a dyn CapabilityProvider) -> Self {
        Self { provider }
    }

    /// Checks the current grant and requests it once when missing.
    pub fn ensure(&self, capability: DeviceCapability) -> GateDecision {
        let status = match self.provider.status(capability) {
            PermissionStatus::Granted => return GateDecision::Granted,
            PermissionStatus::Unavailable => PermissionStatus::Unavailable,
            PermissionStatus::Denied => self.provider.request(capability),
        };

        match status {
            PermissionStatus::Granted => {
                info!(
                    "event=permission_request module=capability status=ok capability={capability}"
                );
                GateDecision::Granted
            }
            PermissionStatus::Denied => {
                warn!(
                    "event=permission_request module=capability status=denied capability={capability}"
                );
                GateDecision::Denied
            }
            PermissionStatus::Unavailable => {
                warn!(
                    "event=permission_request module=capability status=unavailable capability={capability}"
                );
                GateDecision::Denied
            }
        }
    }
}
