//! Use-case services composing gate, device seams and persistence.
//!
//! # Responsibility
//! - Orchestrate collaborators into the operations the host UI calls.
//! - Convert every collaborator failure into `ProximityError`.
//! - Return follow-up side effects as explicit pending requests.

pub mod alert_store;
pub mod calendar_bridge;
pub mod nearby_courses;
pub mod notification_scheduler;
