use crate::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};
use serde_json::json;

pub fn list(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{:<8} {:<12}", "Vehicle", "l/100 km");
            println!("{}", "-".repeat(20));
            for (vehicle, rate) in config.vehicles.entries() {
                println!("{:<8} {:<12.2}", vehicle, rate);
            }
            println!("\nGrowth: x{} per km/h", config.consumption_growth);
        }
        OutputFormat::Json => {
            let rows: Vec<_> = config
                .vehicles
                .entries()
                .map(|(vehicle, rate)| json!({ "vehicle": vehicle, "base_rate": rate }))
                .collect();
            let body = json!({
                "consumption_growth": config.consumption_growth,
                "vehicles": rows,
            });
            let text = serde_json::to_string_pretty(&body).context("Failed to serialize vehicles")?;
            println!("{}", text);
        }
    }
    Ok(())
}
