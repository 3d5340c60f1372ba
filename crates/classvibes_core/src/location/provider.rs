//! Current-position acquisition through the permission gate.
//!
//! There is no internal timeout: the positioning call may wait on a user
//! prompt for as long as the host keeps it open.

use crate::capability::device_capability::DeviceCapability;
use crate::capability::gate::PermissionGate;
use crate::device::{LocationAccuracy, PositionSource};
use crate::error::{ProximityError, ProximityResult};
use crate::model::geo::Coordinate;
use log::{error, info, warn};

pub struct LocationProvider<'a> {
    gate: PermissionGate<'a>,
    source: &'a dyn PositionSource,
    accuracy: LocationAccuracy,
}

impl<'a> LocationProvider<'a> {
    pub fn new(gate: PermissionGate<'a>, source: &'a dyn PositionSource) -> Self {
        Self {
            gate,
            source,
            accuracy: LocationAccuracy::default(),
        }
    }

    pub fn with_accuracy(mut self, accuracy: LocationAccuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Returns the device position, or the reason it is not available.
    ///
    /// No previous fix is cached between calls.
    pub fn current_location(&self) -> ProximityResult<Coordinate> {
        if !self.gate.ensure(DeviceCapability::Location).is_granted() {
            warn!("event=location_fix module=location status=denied");
            return Err(ProximityError::PermissionDenied(DeviceCapability::Location));
        }

        match self.source.current_position(self.accuracy) {
            Ok(coordinate) => {
                info!(
                    "event=location_fix module=location status=ok accuracy={:?}",
                    self.accuracy
                );
                Ok(coordinate)
            }
            Err(err) => {
                error!(
                    "event=location_fix module=location status=error error_code=position_query_failed error={err}"
                );
                Err(err.into())
            }
        }
    }
}
