//! Trip metrics: travel time and fuel consumption for one car.
//!
//! Everything here is pure. Inputs are trusted; a non-finite result is
//! carried through to formatting, which shows [`format::SENTINEL`].

pub mod consumption;
pub mod duration;
pub mod format;

pub use consumption::{CONSUMPTION_GROWTH, Consumption, compute_consumption};
pub use duration::{Duration, compute_duration};

use crate::vehicle::{RateTable, VehicleClass};

/// Immutable constants the calculators close over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripModel {
    pub consumption_growth: f64,
    pub rates: RateTable,
}

impl Default for TripModel {
    fn default() -> Self {
        Self {
            consumption_growth: CONSUMPTION_GROWTH,
            rates: RateTable::default(),
        }
    }
}

/// Both metrics for a single car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripMetrics {
    pub duration: Duration,
    pub consumption: Consumption,
}

impl TripModel {
    pub fn duration(&self, distance: f64, speed: f64) -> Duration {
        compute_duration(distance, speed)
    }

    pub fn consumption(&self, vehicle: VehicleClass, speed: f64, distance: f64) -> Consumption {
        consumption::compute_consumption_with_growth(
            self.consumption_growth,
            self.rates.base_rate(vehicle),
            speed,
            distance,
        )
    }

    pub fn metrics(&self, vehicle: VehicleClass, distance: f64, speed: f64) -> TripMetrics {
        TripMetrics {
            duration: self.duration(distance, speed),
            consumption: self.consumption(vehicle, speed, distance),
        }
    }
}
