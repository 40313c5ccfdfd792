//! Year-over-year and target progress result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of change between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
    Flat,
}

/// Current period against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoyComparison {
    pub current: f64,
    pub previous: f64,
    /// One decimal; `None` when the previous value is not positive
    pub percent_change: Option<f64>,
    pub direction: Direction,
}

/// Where a target stands given the projected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    OnTrack,
    AtRisk,
    OffTrack,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::OnTrack => "on-track",
            ProgressStatus::AtRisk => "at-risk",
            ProgressStatus::OffTrack => "off-track",
        };
        f.write_str(s)
    }
}

/// Progress from a baseline towards a reduction target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    pub baseline_value: f64,
    pub target_value: f64,
    pub projected_value: f64,
    /// Share of the planned reduction achieved, one decimal. `None` when the
    /// baseline equals the target.
    pub progress_percent: Option<f64>,
    pub status: ProgressStatus,
}
