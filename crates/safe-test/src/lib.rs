//! SAFE Test Harness - deterministic scenarios for the AMR simulator
//!
//! This crate provides:
//! - A scenario builder scripting mode changes and tick counts
//! - Traces of every post-tick snapshot with monotonicity and bound checks

pub mod scenario;

pub use scenario::*;
