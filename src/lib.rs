pub mod commands;
pub mod config;
pub mod error;
pub mod race;
pub mod trip;
pub mod vehicle;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
