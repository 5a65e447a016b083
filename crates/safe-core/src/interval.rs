//! Interval primitives
//!
//! An interval is the gap, in seconds, between two consecutive monitoring
//! samples. Smaller interval means faster sampling.

use std::ops::Mul;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sampling interval in seconds
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(pub f64);

impl Interval {
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        Interval(secs)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Convert to a `Duration`; non-representable values collapse to zero
    #[inline]
    pub fn to_duration(self) -> Duration {
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::ZERO)
    }

    /// Sampling frequency implied by this interval
    #[inline]
    pub fn sampling_rate_hz(self) -> f64 {
        1.0 / self.0
    }

    #[inline]
    pub fn max(self, other: Interval) -> Interval {
        Interval(self.0.max(other.0))
    }

    #[inline]
    pub fn min(self, other: Interval) -> Interval {
        Interval(self.0.min(other.0))
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Interval(self.0 * rhs)
    }
}

impl From<Interval> for f64 {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I({:.4}s)", self.0)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}

/// One history entry: the interval in force after a given tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub tick: u64,
    pub interval: Interval,
}

impl Sample {
    pub fn new(tick: u64, interval: Interval) -> Self {
        Sample { tick, interval }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Interval(1.5).to_string(), "1.50s");
        assert_eq!(Interval(1.649_98).to_string(), "1.65s");
        assert_eq!(Interval(0.5).to_string(), "0.50s");
    }

    #[test]
    fn test_sampling_rate() {
        assert!((Interval(0.5).sampling_rate_hz() - 2.0).abs() < 1e-12);
        assert!((Interval(2.5).sampling_rate_hz() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_to_duration() {
        assert_eq!(Interval(1.5).to_duration(), Duration::from_millis(1500));
        assert_eq!(Interval(-1.0).to_duration(), Duration::ZERO);
        assert_eq!(Interval(f64::NAN).to_duration(), Duration::ZERO);
    }

    #[test]
    fn test_clamp_helpers() {
        let floor = Interval(0.5);
        assert_eq!(Interval(0.4).max(floor), floor);
        assert_eq!(Interval(0.7).max(floor), Interval(0.7));
        let ceiling = Interval(2.5);
        assert_eq!(Interval(2.7).min(ceiling), ceiling);
    }

    #[test]
    fn test_serde_transparent() {
        let sample = Sample::new(3, Interval(1.25));
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"tick":3,"interval":1.25}"#);
    }
}
