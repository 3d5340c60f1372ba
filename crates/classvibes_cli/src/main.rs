//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `classvibes_core` linkage without the mobile host.
//! - Print deterministic output for quick local sanity checks.

use classvibes_core::{distance_km, Coordinate, CoordinateError};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("classvibes_core ping={}", classvibes_core::ping());
    println!("classvibes_core version={}", classvibes_core::core_version());

    match sample_distance_km() {
        Ok(distance) => {
            println!("classvibes_core sample_distance_km={distance:.2}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("classvibes_core sample_distance_error={err}");
            ExitCode::FAILURE
        }
    }
}

fn sample_distance_km() -> Result<f64, CoordinateError> {
    let obelisco = Coordinate::new(-34.6037, -58.3816)?;
    let east = Coordinate::new(-34.6037, -58.2816)?;
    Ok(distance_km(obelisco, east))
}
