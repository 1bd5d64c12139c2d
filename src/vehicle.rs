use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle model selected for both cars in a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleClass {
    A,
    B,
    C,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::A, VehicleClass::B, VehicleClass::C];

    /// Key of this class under `[vehicles]` in the config file.
    pub fn config_key(&self) -> &'static str {
        match self {
            VehicleClass::A => "a",
            VehicleClass::B => "b",
            VehicleClass::C => "c",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            VehicleClass::A => "A",
            VehicleClass::B => "B",
            VehicleClass::C => "C",
        };
        f.pad(tag)
    }
}

/// Base consumption in liters per 100 km at the reference speed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RateTable {
    #[serde(alias = "A", default = "default_rate_a")]
    pub a: f64,
    #[serde(alias = "B", default = "default_rate_b")]
    pub b: f64,
    #[serde(alias = "C", default = "default_rate_c")]
    pub c: f64,
}

fn default_rate_a() -> f64 {
    3.0
}

fn default_rate_b() -> f64 {
    3.5
}

fn default_rate_c() -> f64 {
    4.0
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            a: default_rate_a(),
            b: default_rate_b(),
            c: default_rate_c(),
        }
    }
}

impl RateTable {
    pub fn base_rate(&self, vehicle: VehicleClass) -> f64 {
        match vehicle {
            VehicleClass::A => self.a,
            VehicleClass::B => self.b,
            VehicleClass::C => self.c,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (VehicleClass, f64)> + '_ {
        VehicleClass::ALL
            .into_iter()
            .map(move |vehicle| (vehicle, self.base_rate(vehicle)))
    }
}
