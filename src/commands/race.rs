use crate::OutputFormat;
use crate::config::Config;
use crate::race::{self, Finish, RaceInput, RaceReport};
use anyhow::{Context, Result};

pub fn render_text(report: &RaceReport) -> String {
    let mut out = format!(
        "Vehicle {} over {} km (start after {} ms)\n",
        report.vehicle, report.distance, report.start_delay_ms
    );

    for (index, car) in report.cars.iter().enumerate() {
        out.push_str(&format!("\nCar {}\n", index + 1));
        for line in car.lines() {
            out.push_str(&format!("  {}\n", line));
        }
        out.push_str(&format!("  Lane: {} ms\n", car.lane_ms));
    }

    let verdict = match report.finish {
        Finish::Car1 => "Car 1 finishes first",
        Finish::Car2 => "Car 2 finishes first",
        Finish::Tie => "Both cars finish together",
    };
    out.push_str(&format!("\n{}\n", verdict));
    out
}

/// Race two cars and print both result panels.
pub fn run(config: &Config, input: RaceInput, format: OutputFormat) -> Result<()> {
    let report = race::run(&config.trip_model(), &config.animation, &input);

    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize race report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
