pub mod config;
pub mod estimate;
pub mod output;
pub mod telemetry;
