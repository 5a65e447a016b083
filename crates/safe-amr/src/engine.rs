//! AMR Simulator - owns the simulation state and advances it one tick at a time

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use safe_core::{AmrConfig, AmrResult, Interval, Sample, SeverityMode};

use crate::{HistoryWindow, RateLaw};

/// Live simulator state
#[derive(Clone, Debug)]
pub struct SimulationState {
    /// Interval in force, always within `[min_interval, max_interval]`
    pub current_interval: Interval,
    /// Ticks applied since creation
    pub tick: u64,
    /// Recent `(tick, interval)` samples
    pub history: HistoryWindow,
    /// Declared severity
    pub mode: SeverityMode,
}

impl SimulationState {
    fn new(config: &AmrConfig) -> Self {
        SimulationState {
            current_interval: Interval(config.initial_interval),
            tick: 0,
            history: HistoryWindow::new(config.history_window),
            mode: SeverityMode::Moderate,
        }
    }
}

/// Read-only copy of the simulator state for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub interval: Interval,
    pub mode: SeverityMode,
    pub tick: u64,
    /// Oldest first
    pub history: Vec<Sample>,
}

/// Adaptive Monitoring Rate simulator
pub struct AmrSimulator {
    state: SimulationState,
    law: RateLaw,
    config: AmrConfig,
    /// Clamp has engaged since the last mode change
    saturated: bool,
}

impl AmrSimulator {
    /// Create a simulator with the default constants
    pub fn new() -> Self {
        let config = AmrConfig::default();
        AmrSimulator {
            state: SimulationState::new(&config),
            law: RateLaw::new(&config),
            config,
            saturated: false,
        }
    }

    /// Create a simulator with a custom configuration
    pub fn with_config(config: AmrConfig) -> AmrResult<Self> {
        config.validate()?;
        Ok(AmrSimulator {
            state: SimulationState::new(&config),
            law: RateLaw::new(&config),
            config,
            saturated: false,
        })
    }

    /// Change the severity mode. Takes effect on the next tick.
    pub fn set_mode(&mut self, mode: SeverityMode) {
        if mode == self.state.mode {
            return;
        }
        info!(
            from = %self.state.mode,
            to = %mode,
            interval = self.state.current_interval.0,
            "severity mode changed"
        );
        self.state.mode = mode;
        self.saturated = false;
    }

    /// Advance one step and return the appended sample
    pub fn tick(&mut self) -> Sample {
        let mode = self.state.mode;
        let next = self.law.next(self.state.current_interval, mode);

        self.state.tick += 1;
        let sample = Sample::new(self.state.tick, next);
        self.state.history.push(sample);
        self.state.current_interval = next;

        trace!(tick = sample.tick, interval = next.0, %mode, "amr tick");

        // Exact match: the clamp returns the bound value itself
        if !self.saturated && next == self.law.bound(mode).value() {
            self.saturated = true;
            debug!(tick = sample.tick, interval = next.0, %mode, "interval reached clamp bound");
        }

        sample
    }

    /// Advance `n` steps
    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn mode(&self) -> SeverityMode {
        self.state.mode
    }

    pub fn current_interval(&self) -> Interval {
        self.state.current_interval
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick
    }

    pub fn history(&self) -> &HistoryWindow {
        &self.state.history
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &AmrConfig {
        &self.config
    }

    /// True once the interval has settled on the current mode's bound
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Copy out the current state without advancing it
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            interval: self.state.current_interval,
            mode: self.state.mode,
            tick: self.state.tick,
            history: self.state.history.to_vec(),
        }
    }
}

impl Default for AmrSimulator {
    fn default() -> Self {
        Self::new()
    }
}
