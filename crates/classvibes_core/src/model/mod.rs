//! Domain records for the proximity and reminder subsystem.
//!
//! # Responsibility
//! - Define closed, validated shapes for reminders, coordinates and calendar
//!   events.
//! - Keep validation at construction time so downstream code never re-checks.
//!
//! # Invariants
//! - Instants are Unix epoch milliseconds.
//! - `LocatedEntity::distance_km` is derived per query and never persisted.

pub mod calendar;
pub mod geo;
pub mod reminder;
