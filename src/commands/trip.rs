use crate::OutputFormat;
use crate::config::Config;
use crate::vehicle::VehicleClass;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TripSummary {
    vehicle: VehicleClass,
    distance: f64,
    speed: f64,
    duration: String,
    consumption: String,
}

/// Metrics for a single car, without comparison.
pub fn run(
    config: &Config,
    vehicle: VehicleClass,
    distance: f64,
    speed: f64,
    format: OutputFormat,
) -> Result<()> {
    let metrics = config.trip_model().metrics(vehicle, distance, speed);

    let summary = TripSummary {
        vehicle,
        distance,
        speed,
        duration: metrics.duration.format(false),
        consumption: metrics.consumption.format(false),
    };

    match format {
        OutputFormat::Text => {
            println!("Duration: {}", summary.duration);
            println!("Consumption: {}", summary.consumption);
            println!("Speed: {} km/h", summary.speed);
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize trip")?;
            println!("{}", json);
        }
    }

    Ok(())
}
