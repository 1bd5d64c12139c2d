//! Two cars over a shared distance with the same vehicle model.

use crate::config::AnimationConfig;
use crate::trip::{Consumption, Duration, TripModel};
use crate::vehicle::VehicleClass;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceInput {
    pub vehicle: VehicleClass,
    pub distance: f64,
    pub speed1: f64,
    pub speed2: f64,
}

/// One car's results, each metric paired with its delta against the rival.
#[derive(Debug, Clone, Serialize)]
pub struct CarReport {
    pub speed: f64,
    pub duration: Duration,
    #[serde(serialize_with = "serialize_delta")]
    pub duration_delta: Duration,
    pub consumption: Consumption,
    #[serde(serialize_with = "serialize_consumption_delta")]
    pub consumption_delta: Consumption,
    pub lane_ms: u64,
}

fn serialize_delta<S: serde::Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.format(true))
}

fn serialize_consumption_delta<S: serde::Serializer>(
    value: &Consumption,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.format(true))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Car1,
    Car2,
    Tie,
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    pub vehicle: VehicleClass,
    pub distance: f64,
    pub start_delay_ms: u64,
    pub cars: [CarReport; 2],
    pub finish: Finish,
}

/// Animation length for a car, scaled by how much faster the rival is.
///
/// The result is clamped to `[min_ms, max_ms]`, so the faster car never gets
/// the longer lane time.
pub fn lane_duration_ms(animation: &AnimationConfig, own_speed: f64, other_speed: f64) -> u64 {
    let scaled = other_speed / own_speed * animation.base_ms as f64;
    if scaled.is_nan() {
        return animation.max_ms;
    }
    scaled
        .max(animation.min_ms as f64)
        .min(animation.max_ms as f64)
        .round() as u64
}

fn car_report(
    model: &TripModel,
    animation: &AnimationConfig,
    input: &RaceInput,
    own_speed: f64,
    other_speed: f64,
) -> CarReport {
    let own = model.metrics(input.vehicle, input.distance, own_speed);
    let other = model.metrics(input.vehicle, input.distance, other_speed);

    CarReport {
        speed: own_speed,
        duration: own.duration,
        duration_delta: own.duration.delta(&other.duration),
        consumption: own.consumption,
        consumption_delta: own.consumption.delta(&other.consumption),
        lane_ms: lane_duration_ms(animation, own_speed, other_speed),
    }
}

pub fn run(model: &TripModel, animation: &AnimationConfig, input: &RaceInput) -> RaceReport {
    let car1 = car_report(model, animation, input, input.speed1, input.speed2);
    let car2 = car_report(model, animation, input, input.speed2, input.speed1);

    let finish = match input.speed1.partial_cmp(&input.speed2) {
        Some(Ordering::Greater) => Finish::Car1,
        Some(Ordering::Less) => Finish::Car2,
        _ => Finish::Tie,
    };

    debug!(
        "Race {} over {}: car1 {} ({}), car2 {} ({})",
        input.vehicle,
        input.distance,
        car1.duration,
        car1.consumption,
        car2.duration,
        car2.consumption
    );

    RaceReport {
        vehicle: input.vehicle,
        distance: input.distance,
        start_delay_ms: animation.delay_ms,
        cars: [car1, car2],
        finish,
    }
}

impl CarReport {
    /// Result panel lines, e.g. `Duration: 1h, 30min (+18min)`.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Duration: {} ({})",
                self.duration.format(false),
                self.duration_delta.format(true)
            ),
            format!(
                "Consumption: {} ({})",
                self.consumption.format(false),
                self.consumption_delta.format(true)
            ),
            format!("Speed: {} km/h", self.speed),
        ]
    }
}
