//! Severity modes
//!
//! The declared criticality of the monitored scene. The mode decides which
//! direction the sampling interval moves in and which clamp bound holds it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AmrError;

/// Declared event severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityMode {
    /// Nothing urgent: the interval grows to save compute
    #[default]
    Moderate,
    /// Urgent: the interval decays but stays above the critical floor
    Critical,
    /// Most urgent: the interval decays down to the global minimum
    Catastrophic,
}

impl SeverityMode {
    /// All modes in escalating order
    pub const ALL: [SeverityMode; 3] = [
        SeverityMode::Moderate,
        SeverityMode::Critical,
        SeverityMode::Catastrophic,
    ];

    /// Lower-case name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            SeverityMode::Moderate => "moderate",
            SeverityMode::Critical => "critical",
            SeverityMode::Catastrophic => "catastrophic",
        }
    }

    /// Upper-case label for status readouts
    pub fn label(self) -> &'static str {
        match self {
            SeverityMode::Moderate => "MODERATE",
            SeverityMode::Critical => "CRITICAL",
            SeverityMode::Catastrophic => "CATASTROPHIC",
        }
    }

    /// True for the decaying (faster sampling) regimes
    #[inline]
    pub fn is_urgent(self) -> bool {
        !matches!(self, SeverityMode::Moderate)
    }
}

impl fmt::Display for SeverityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeverityMode {
    type Err = AmrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SeverityMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AmrError::UnknownMode(s.to_string()))
    }
}
