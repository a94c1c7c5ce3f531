//! # Users Shared
//! 
//! Configuration and telemetry shared by the users service crates.

pub mod config;
pub mod telemetry;

pub use config::AppConfig;
