pub mod config;
pub mod error;
pub mod sustainability;
pub mod telemetry;
