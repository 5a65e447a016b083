//! SAFE AMR - Adaptive Monitoring Rate simulator
//!
//! This crate implements the simulator core:
//! - Rate law: per-mode exponential growth/decay with clamp bounds
//! - History window: fixed-capacity FIFO of recent samples
//! - Simulator: mode changes, ticks and read-only snapshots

pub mod engine;
pub mod history;
pub mod rate;

pub use engine::*;
pub use history::*;
pub use rate::*;
