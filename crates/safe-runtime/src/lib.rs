//! SAFE Runtime - drives the AMR simulator and feeds a display
//!
//! This crate provides:
//! - A periodic driver with explicit start/stop
//! - Snapshot subscription for observers
//! - The status readout consumed by display layers
//! - Runtime configuration and logging setup

pub mod config;
pub mod driver;
pub mod error;
pub mod readout;
pub mod telemetry;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use readout::*;
pub use telemetry::*;
