//! Scenario runner
//!
//! A scenario is a list of steps applied to a fresh simulator, with no
//! timer involved. The result is a trace of one snapshot per tick.

use std::ops::Range;

use tracing::debug;

use safe_amr::{AmrSimulator, Snapshot};
use safe_core::{AmrConfig, AmrResult, Interval, SeverityMode};

/// One scripted action
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    SetMode(SeverityMode),
    Ticks(u64),
}

/// Scenario builder
#[derive(Clone, Debug, Default)]
pub struct Scenario {
    config: AmrConfig,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AmrConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from `secs` instead of the default initial interval
    pub fn starting_at(mut self, secs: f64) -> Self {
        self.config.initial_interval = secs;
        self
    }

    pub fn mode(mut self, mode: SeverityMode) -> Self {
        self.steps.push(Step::SetMode(mode));
        self
    }

    pub fn ticks(mut self, n: u64) -> Self {
        self.steps.push(Step::Ticks(n));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run on a fresh simulator
    pub fn run(&self) -> AmrResult<Trace> {
        let mut sim = AmrSimulator::with_config(self.config.clone())?;
        let initial = sim.snapshot();
        let mut snapshots = Vec::new();

        for step in &self.steps {
            match *step {
                Step::SetMode(mode) => sim.set_mode(mode),
                Step::Ticks(n) => {
                    for _ in 0..n {
                        sim.tick();
                        snapshots.push(sim.snapshot());
                    }
                }
            }
        }

        debug!(steps = self.steps.len(), ticks = snapshots.len(), "scenario finished");
        Ok(Trace {
            initial,
            snapshots,
        })
    }
}

/// Result of a scenario run
#[derive(Clone, Debug)]
pub struct Trace {
    /// State before any step
    pub initial: Snapshot,
    /// One snapshot per tick, in order
    pub snapshots: Vec<Snapshot>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Interval sequence including the initial value
    pub fn intervals(&self) -> Vec<Interval> {
        std::iter::once(self.initial.interval)
            .chain(self.snapshots.iter().map(|s| s.interval))
            .collect()
    }

    pub fn last(&self) -> &Snapshot {
        self.snapshots.last().unwrap_or(&self.initial)
    }

    pub fn final_interval(&self) -> Interval {
        self.last().interval
    }

    pub fn min_interval(&self) -> Interval {
        self.intervals()
            .into_iter()
            .fold(Interval(f64::INFINITY), Interval::min)
    }

    pub fn max_interval(&self) -> Interval {
        self.intervals()
            .into_iter()
            .fold(Interval(f64::NEG_INFINITY), Interval::max)
    }

    /// Every interval lies in `[lo, hi]`
    pub fn within_bounds(&self, lo: f64, hi: f64) -> bool {
        self.intervals().iter().all(|i| i.0 >= lo && i.0 <= hi)
    }

    /// Intervals over the tick range never decrease (tick 0 is the initial state)
    pub fn is_monotone_non_decreasing(&self, ticks: Range<usize>) -> bool {
        self.window(ticks).windows(2).all(|w| w[1] >= w[0])
    }

    /// Intervals over the tick range never increase
    pub fn is_monotone_non_increasing(&self, ticks: Range<usize>) -> bool {
        self.window(ticks).windows(2).all(|w| w[1] <= w[0])
    }

    fn window(&self, ticks: Range<usize>) -> Vec<Interval> {
        let all = self.intervals();
        let end = ticks.end.min(all.len());
        let start = ticks.start.min(end);
        all[start..end].to_vec()
    }
}
