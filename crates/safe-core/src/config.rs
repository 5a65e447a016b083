//! Rate constants and simulator configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{AmrError, AmrResult};

/// Lowest interval any mode may reach (seconds)
pub const MIN_INTERVAL: f64 = 0.5;
/// Highest interval any mode may reach (seconds)
pub const MAX_INTERVAL: f64 = 2.5;
/// Floor held by the Critical mode (seconds)
pub const CRITICAL_FLOOR: f64 = 1.0;
/// Interval a fresh simulator starts at (seconds)
pub const INITIAL_INTERVAL: f64 = 1.5;
/// λ: per-tick exponent for the decaying modes
pub const DECAY_RATE: f64 = -0.0953;
/// γ: per-tick exponent for the Moderate mode
pub const GROWTH_RATE: f64 = 0.0953;
/// Number of samples kept in the history window
pub const HISTORY_WINDOW: usize = 30;
/// Largest history window a configuration may request
pub const MAX_HISTORY_WINDOW: usize = 100_000;
/// Refresh period of the live driver
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(500);

/// AMR simulator configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmrConfig {
    /// Global interval floor
    pub min_interval: f64,
    /// Global interval ceiling
    pub max_interval: f64,
    /// Floor used while in Critical mode
    pub critical_floor: f64,
    /// Starting interval
    pub initial_interval: f64,
    /// λ, applied as `I · e^λ` by Critical and Catastrophic
    pub decay_rate: f64,
    /// γ, applied as `I · e^γ` by Moderate
    pub growth_rate: f64,
    /// History window capacity
    pub history_window: usize,
}

impl Default for AmrConfig {
    fn default() -> Self {
        AmrConfig {
            min_interval: MIN_INTERVAL,
            max_interval: MAX_INTERVAL,
            critical_floor: CRITICAL_FLOOR,
            initial_interval: INITIAL_INTERVAL,
            decay_rate: DECAY_RATE,
            growth_rate: GROWTH_RATE,
            history_window: HISTORY_WINDOW,
        }
    }
}

impl AmrConfig {
    /// Start from a different interval, keeping everything else
    pub fn with_initial_interval(mut self, secs: f64) -> Self {
        self.initial_interval = secs;
        self
    }

    /// Check that the configuration describes a reachable, bounded state space
    pub fn validate(&self) -> AmrResult<()> {
        let fields = [
            ("min_interval", self.min_interval),
            ("max_interval", self.max_interval),
            ("critical_floor", self.critical_floor),
            ("initial_interval", self.initial_interval),
            ("decay_rate", self.decay_rate),
            ("growth_rate", self.growth_rate),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AmrError::NonFinite { field });
        }

        if self.min_interval <= 0.0 {
            return Err(AmrError::NonPositiveMinimum(self.min_interval));
        }

        if self.min_interval > self.critical_floor || self.critical_floor > self.max_interval {
            return Err(AmrError::BoundsOutOfOrder {
                min: self.min_interval,
                critical_floor: self.critical_floor,
                max: self.max_interval,
            });
        }

        if !(self.min_interval..=self.max_interval).contains(&self.initial_interval) {
            return Err(AmrError::InitialOutOfBounds {
                initial: self.initial_interval,
                min: self.min_interval,
                max: self.max_interval,
            });
        }

        if self.decay_rate >= 0.0 {
            return Err(AmrError::DecayNotNegative(self.decay_rate));
        }

        if self.growth_rate <= 0.0 {
            return Err(AmrError::GrowthNotPositive(self.growth_rate));
        }

        if self.history_window == 0 {
            return Err(AmrError::EmptyHistoryWindow);
        }

        if self.history_window > MAX_HISTORY_WINDOW {
            return Err(AmrError::HistoryWindowTooLarge {
                requested: self.history_window,
                limit: MAX_HISTORY_WINDOW,
            });
        }

        Ok(())
    }
}
