//! Location acquisition and distance ranking.

pub mod provider;
pub mod ranking;
