pub mod catalog;
pub mod config;
pub mod distribution;
pub mod error;
pub mod money;
pub mod telemetry;
