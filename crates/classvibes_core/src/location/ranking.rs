//! Great-circle distance and stable distance ranking.
//!
//! # Invariants
//! - `distance_km` is symmetric and zero for identical points.
//! - `rank_by_distance` keeps input length and breaks ties by input order.

use crate::model::geo::{Coordinate, LocatedEntity, PlacedEntity};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometres.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();

    let h = half_lat * half_lat
        + a.latitude().to_radians().cos() * b.latitude().to_radians().cos() * half_lon * half_lon;
    // Rounding can push `h` a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Ranks entities by ascending distance from `origin`.
///
/// Returns a new sequence; the input is left untouched.
pub fn rank_by_distance(origin: Coordinate, entities: &[PlacedEntity]) -> Vec<LocatedEntity> {
    let mut ranked = entities
        .iter()
        .map(|entity| LocatedEntity {
            id: entity.id.clone(),
            name: entity.name.clone(),
            coordinate: entity.coordinate,
            distance_km: distance_km(origin, entity.coordinate),
        })
        .collect::<Vec<_>>();

    // `sort_by` is stable, so equal distances keep their input order.
    ranked.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    ranked
}
