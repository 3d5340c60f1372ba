//! Flutter-facing bindings for `classvibes_core`.

pub mod api;
