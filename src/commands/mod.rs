pub mod config;
pub mod race;
pub mod trip;
pub mod vehicles;
