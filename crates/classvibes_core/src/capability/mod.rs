//! Device capability declarations and the permission gate.
//!
//! Every device-facing component asks the gate before touching the platform;
//! denial is an expected outcome, never an error.

pub mod device_capability;
pub mod gate;
