//! Status readout - the display payload derived from a snapshot
//!
//! Nothing here feeds back into the simulator. The sampling bar is a
//! presentation heuristic (`1 / interval`, capped at full width), not a
//! modelled frequency.

use safe_amr::Snapshot;
use safe_core::{Sample, SeverityMode};

/// Vertical range of the interval chart, in seconds
pub const CHART_DOMAIN: (f64, f64) = (0.0, 3.0);

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Colour family for the current mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Catastrophic events
    Alert,
    Calm,
}

impl From<SeverityMode> for Tone {
    fn from(mode: SeverityMode) -> Self {
        match mode {
            SeverityMode::Catastrophic => Tone::Alert,
            SeverityMode::Moderate | SeverityMode::Critical => Tone::Calm,
        }
    }
}

/// Everything a display needs to show the simulator status
#[derive(Clone, Debug, PartialEq)]
pub struct StatusReadout {
    pub mode_label: &'static str,
    /// Current interval, two decimals, e.g. `1.65s`
    pub interval_text: String,
    /// Fill fraction of the sampling-rate bar, in `[0, 1]`
    pub sampling_bar: f64,
    pub tone: Tone,
    /// `(tick, interval seconds)` points, oldest first
    pub series: Vec<(u64, f64)>,
}

impl StatusReadout {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let rate = snapshot.interval.sampling_rate_hz();
        let sampling_bar = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 1.0 };

        StatusReadout {
            mode_label: snapshot.mode.label(),
            interval_text: snapshot.interval.to_string(),
            sampling_bar,
            tone: Tone::from(snapshot.mode),
            series: snapshot
                .history
                .iter()
                .map(|s| (s.tick, s.interval.as_secs_f64()))
                .collect(),
        }
    }

    /// Render the sampling bar as `width` cells
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.sampling_bar * width as f64).round() as usize).min(width);
        let mut out = "█".repeat(filled);
        out.push_str(&"░".repeat(width - filled));
        out
    }
}

/// One character per sample, scaled to `CHART_DOMAIN`
pub fn sparkline(samples: &[Sample]) -> String {
    let (lo, hi) = CHART_DOMAIN;
    let top = (SPARK_LEVELS.len() - 1) as f64;
    samples
        .iter()
        .map(|s| {
            let norm = ((s.interval.as_secs_f64() - lo) / (hi - lo)).clamp(0.0, 1.0);
            SPARK_LEVELS[(norm * top).round() as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_amr::AmrSimulator;
    use safe_core::Interval;

    #[test]
    fn test_readout_after_first_tick() {
        let mut sim = AmrSimulator::new();
        sim.tick();
        let readout = StatusReadout::from_snapshot(&sim.snapshot());

        assert_eq!(readout.mode_label, "MODERATE");
        assert_eq!(readout.interval_text, "1.65s");
        assert_eq!(readout.tone, Tone::Calm);
        assert_eq!(readout.series.len(), 1);
        assert_eq!(readout.series[0].0, 1);
        assert!((readout.sampling_bar - 1.0 / readout.series[0].1).abs() < 1e-12);
    }

    #[test]
    fn test_bar_saturates_at_fast_sampling() {
        let mut sim = AmrSimulator::new();
        sim.set_mode(SeverityMode::Catastrophic);
        sim.tick_n(50);
        let readout = StatusReadout::from_snapshot(&sim.snapshot());

        assert_eq!(readout.interval_text, "0.50s");
        assert_eq!(readout.sampling_bar, 1.0);
        assert_eq!(readout.tone, Tone::Alert);
        assert_eq!(readout.bar(10), "██████████");
    }

    #[test]
    fn test_bar_partial() {
        let mut sim = AmrSimulator::new();
        sim.tick_n(50);
        let readout = StatusReadout::from_snapshot(&sim.snapshot());

        assert_eq!(readout.sampling_bar, 0.4);
        assert_eq!(readout.bar(10), "████░░░░░░");
    }

    #[test]
    fn test_critical_tone_is_calm() {
        assert_eq!(Tone::from(SeverityMode::Critical), Tone::Calm);
    }

    #[test]
    fn test_sparkline_levels() {
        let samples = [
            Sample::new(1, Interval(0.0)),
            Sample::new(2, Interval(1.5)),
            Sample::new(3, Interval(3.0)),
            Sample::new(4, Interval(9.0)),
        ];
        assert_eq!(sparkline(&samples), "▁▅██");
    }
}
