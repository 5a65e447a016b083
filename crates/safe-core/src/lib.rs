//! SAFE Core - Fundamental types for adaptive monitoring
//!
//! This crate defines the primitives shared by the simulator and its runtime:
//! - Severity modes (Moderate, Critical, Catastrophic)
//! - Sampling intervals and history samples
//! - Rate constants and simulator configuration
//! - Error types

pub mod config;
pub mod error;
pub mod interval;
pub mod mode;

pub use config::*;
pub use error::*;
pub use interval::*;
pub use mode::*;
