//! Rate law - the interval recurrence for each severity mode
//!
//! Each tick multiplies the interval by a fixed exponential factor and clamps
//! the result, so the interval converges geometrically onto the mode's bound
//! and then stays there.

use safe_core::{AmrConfig, Interval, SeverityMode};

/// Clamp bound applied after a step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// Interval may not drop below this value
    Floor(Interval),
    /// Interval may not rise above this value
    Ceiling(Interval),
}

impl Bound {
    #[inline]
    pub fn apply(self, interval: Interval) -> Interval {
        match self {
            Bound::Floor(floor) => interval.max(floor),
            Bound::Ceiling(ceiling) => interval.min(ceiling),
        }
    }

    #[inline]
    pub fn value(self) -> Interval {
        match self {
            Bound::Floor(v) | Bound::Ceiling(v) => v,
        }
    }
}

/// Per-mode recurrence: `I' = clamp(I · e^k)`
#[derive(Clone, Debug, PartialEq)]
pub struct RateLaw {
    /// e^λ
    decay_factor: f64,
    /// e^γ
    growth_factor: f64,
    min: Interval,
    max: Interval,
    critical_floor: Interval,
}

impl RateLaw {
    pub fn new(config: &AmrConfig) -> Self {
        RateLaw {
            decay_factor: config.decay_rate.exp(),
            growth_factor: config.growth_rate.exp(),
            min: Interval(config.min_interval),
            max: Interval(config.max_interval),
            critical_floor: Interval(config.critical_floor),
        }
    }

    /// Multiplicative factor for one tick in `mode`
    #[inline]
    pub fn factor(&self, mode: SeverityMode) -> f64 {
        match mode {
            SeverityMode::Moderate => self.growth_factor,
            SeverityMode::Critical | SeverityMode::Catastrophic => self.decay_factor,
        }
    }

    pub fn bound(&self, mode: SeverityMode) -> Bound {
        match mode {
            SeverityMode::Moderate => Bound::Ceiling(self.max),
            SeverityMode::Critical => Bound::Floor(self.critical_floor),
            SeverityMode::Catastrophic => Bound::Floor(self.min),
        }
    }

    /// Interval after one tick in `mode`
    #[inline]
    pub fn next(&self, current: Interval, mode: SeverityMode) -> Interval {
        self.bound(mode).apply(current * self.factor(mode))
    }
}

impl Default for RateLaw {
    fn default() -> Self {
        Self::new(&AmrConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_values() {
        let law = RateLaw::default();

        let up = law.next(Interval(1.5), SeverityMode::Moderate);
        assert!((up.0 - 1.5 * 0.0953f64.exp()).abs() < 1e-12);
        assert!((up.0 - 1.65).abs() < 1e-3);

        let down = law.next(Interval(1.5), SeverityMode::Catastrophic);
        assert!((down.0 - 1.5 * (-0.0953f64).exp()).abs() < 1e-12);
        assert!((down.0 - 1.3637).abs() < 1e-3);
    }

    #[test]
    fn test_critical_and_catastrophic_share_factor() {
        let law = RateLaw::default();
        assert_eq!(
            law.next(Interval(2.0), SeverityMode::Critical),
            law.next(Interval(2.0), SeverityMode::Catastrophic)
        );
    }

    #[test]
    fn test_bounds_per_mode() {
        let law = RateLaw::default();
        assert_eq!(law.bound(SeverityMode::Moderate), Bound::Ceiling(Interval(2.5)));
        assert_eq!(law.bound(SeverityMode::Critical), Bound::Floor(Interval(1.0)));
        assert_eq!(law.bound(SeverityMode::Catastrophic), Bound::Floor(Interval(0.5)));
    }

    #[test]
    fn test_clamp_is_exact() {
        let law = RateLaw::default();
        assert_eq!(law.next(Interval(0.52), SeverityMode::Catastrophic), Interval(0.5));
        assert_eq!(law.next(Interval(2.4), SeverityMode::Moderate), Interval(2.5));
        assert_eq!(law.next(Interval(1.05), SeverityMode::Critical), Interval(1.0));
    }

    #[test]
    fn test_critical_floor_lifts_low_interval() {
        // Coming out of Catastrophic at 0.5s, Critical snaps up to its floor
        let law = RateLaw::default();
        assert_eq!(law.next(Interval(0.5), SeverityMode::Critical), Interval(1.0));
    }
}
