use super::format::{SENTINEL, sign_prefix, two_decimals};
use serde::Serialize;
use std::fmt;

/// Extra fuel burned per unit of speed above the reference speed of 1
/// (about 0.9% per km/h).
pub const CONSUMPTION_GROWTH: f64 = 1.009;

/// Signed fuel volume in liters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumption {
    negative: bool,
    liters: f64,
}

impl Consumption {
    pub fn new(liters: f64) -> Self {
        Self {
            negative: liters < 0.0,
            liters,
        }
    }

    pub fn liters(&self) -> f64 {
        self.liters
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_finite(&self) -> bool {
        self.liters.is_finite()
    }

    /// Difference `self - other`. The sign comes from the result alone.
    pub fn delta(&self, other: &Consumption) -> Consumption {
        Consumption::new(self.liters - other.liters)
    }

    /// Renders as `"{liters} l"` with two decimals, or [`SENTINEL`] when not finite.
    pub fn format(&self, as_delta: bool) -> String {
        if !self.is_finite() {
            return SENTINEL.to_string();
        }
        format!(
            "{}{} l",
            sign_prefix(self.negative, as_delta),
            two_decimals(self.liters.abs())
        )
    }
}

impl fmt::Display for Consumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

impl Serialize for Consumption {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(false))
    }
}

/// Fuel used over `distance` at `speed`, for a vehicle burning `base_rate`
/// liters per 100 units at the reference speed.
pub fn compute_consumption(base_rate: f64, speed: f64, distance: f64) -> Consumption {
    compute_consumption_with_growth(CONSUMPTION_GROWTH, base_rate, speed, distance)
}

pub fn compute_consumption_with_growth(
    growth: f64,
    base_rate: f64,
    speed: f64,
    distance: f64,
) -> Consumption {
    let effective_rate = base_rate * growth.powf(speed - 1.0);
    Consumption::new(distance / 100.0 * effective_rate)
}
