//! Nearby-course ranking flow: position, remote rows, distance ranking.

use crate::device::CourseSource;
use crate::error::{ProximityError, ProximityResult};
use crate::location::provider::LocationProvider;
use crate::location::ranking::rank_by_distance;
use crate::model::geo::{Coordinate, LocatedEntity, PlacedEntity};
use log::{error, info};

/// Ranked course list for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCourses {
    pub origin: Coordinate,
    /// Ascending by distance from `origin`.
    pub courses: Vec<LocatedEntity>,
    /// Rows skipped because the repository had no position for them.
    pub unplaced: usize,
}

pub struct NearbyCourseService<'a> {
    location: LocationProvider<'a>,
    courses: &'a dyn CourseSource,
}

impl<'a> NearbyCourseService<'a> {
    pub fn new(location: LocationProvider<'a>, courses: &'a dyn CourseSource) -> Self {
        Self { location, courses }
    }

    /// Acquires the device position and ranks every placed course by distance.
    pub fn ranked_courses(&self) -> ProximityResult<NearbyCourses> {
        let origin = self.location.current_location()?;
        let rows = self.courses.list_courses().map_err(|err| {
            error!("event=courses_fetch module=location status=error error={err}");
            ProximityError::from(err)
        })?;

        let placed = rows.iter().filter_map(|row| row.placed()).collect::<Vec<PlacedEntity>>();
        let unplaced = rows.len() - placed.len();
        let courses = rank_by_distance(origin, &placed);

        info!(
            "event=courses_rank module=location status=ok ranked={} unplaced={unplaced}",
            courses.len()
        );
        Ok(NearbyCourses {
            origin,
            courses,
            unplaced,
        })
    }
}
