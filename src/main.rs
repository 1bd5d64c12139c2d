use anyhow::Result;
use car_race::OutputFormat;
use car_race::commands;
use car_race::config;
use car_race::error::parse_positive;
use car_race::race::RaceInput;
use car_race::vehicle::VehicleClass;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "race")]
#[command(about = "Race two cars and compare travel time and fuel consumption")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file (default ~/.car-race/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Race two cars of the same model at different speeds
    Run {
        #[arg(long, value_parser = parse_positive, help = "Distance in km")]
        distance: f64,
        #[arg(long, value_enum, ignore_case = true, help = "Vehicle model")]
        vehicle: VehicleClass,
        #[arg(long, value_parser = parse_positive, help = "Speed of car 1 in km/h")]
        speed1: f64,
        #[arg(long, value_parser = parse_positive, help = "Speed of car 2 in km/h")]
        speed2: f64,
    },

    /// Compute duration and consumption for a single car
    Trip {
        #[arg(long, value_parser = parse_positive, help = "Distance in km")]
        distance: f64,
        #[arg(long, value_enum, ignore_case = true, help = "Vehicle model")]
        vehicle: VehicleClass,
        #[arg(long, value_parser = parse_positive, help = "Speed in km/h")]
        speed: f64,
    },

    /// List vehicle models and their base consumption
    Vehicles,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    /// Write a config file with default values
    Init,
    /// Show which config file is used
    Path,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_path()?,
    };

    let load = || config::load_from_path(&config_path);

    match &cli.command {
        Commands::Run {
            distance,
            vehicle,
            speed1,
            speed2,
        } => {
            let input = RaceInput {
                vehicle: *vehicle,
                distance: *distance,
                speed1: *speed1,
                speed2: *speed2,
            };
            commands::race::run(&load()?, input, cli.format)?;
        }
        Commands::Trip {
            distance,
            vehicle,
            speed,
        } => {
            commands::trip::run(&load()?, *vehicle, *distance, *speed, cli.format)?;
        }
        Commands::Vehicles => {
            commands::vehicles::list(&load()?, cli.format)?;
        }
        // init and path must work even when the file on disk is invalid
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&load()?, &config_path)?,
            ConfigAction::Get { key } => commands::config::get(key, &load()?)?,
            ConfigAction::Init => commands::config::init(&config_path)?,
            ConfigAction::Path => println!("{}", config_path.display()),
        },
    }

    Ok(())
}
