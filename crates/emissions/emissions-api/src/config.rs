//! Aggregation and target configuration types.

use emissions_spi::units::round1;
use emissions_spi::{EmissionsError, ProgressStatus, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Progress Thresholds
// ============================================================================

/// Status buckets for target progress percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressThresholds {
    /// At or above this percentage a target is on track (default: 90).
    pub on_track_percent: f64,
    /// At or above this percentage, and below `on_track_percent`, a target is
    /// at risk (default: 60). Below it the target is off track.
    pub at_risk_percent: f64,
}

impl ProgressThresholds {
    pub fn new(on_track_percent: f64, at_risk_percent: f64) -> Result<Self> {
        let thresholds = Self {
            on_track_percent,
            at_risk_percent,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.on_track_percent.is_finite() || !self.at_risk_percent.is_finite() {
            return Err(EmissionsError::invalid_parameter(
                "progress",
                "thresholds must be finite",
            ));
        }
        if self.at_risk_percent > self.on_track_percent {
            return Err(EmissionsError::invalid_parameter(
                "progress",
                format!(
                    "at-risk threshold {} exceeds on-track threshold {}",
                    self.at_risk_percent, self.on_track_percent
                ),
            ));
        }
        Ok(())
    }

    /// Bucket a progress percentage.
    pub fn classify(&self, progress_percent: f64) -> ProgressStatus {
        if progress_percent >= self.on_track_percent {
            ProgressStatus::OnTrack
        } else if progress_percent >= self.at_risk_percent {
            ProgressStatus::AtRisk
        } else {
            ProgressStatus::OffTrack
        }
    }
}

impl Default for ProgressThresholds {
    fn default() -> Self {
        Self {
            on_track_percent: 90.0,
            at_risk_percent: 60.0,
        }
    }
}

// ============================================================================
// Aggregation Configuration
// ============================================================================

/// Policy constants for the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregationConfig {
    /// Year-over-year changes smaller than this (in percent) are reported as flat.
    pub yoy_flat_threshold_percent: f64,
    /// Target progress status buckets.
    pub progress: ProgressThresholds,
    /// Emit a warning when records are skipped or collapsed.
    pub log_sanitization: bool,
}

impl AggregationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, progress: ProgressThresholds) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_yoy_flat_threshold(mut self, percent: f64) -> Self {
        self.yoy_flat_threshold_percent = percent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.yoy_flat_threshold_percent.is_finite() || self.yoy_flat_threshold_percent < 0.0 {
            return Err(EmissionsError::invalid_parameter(
                "yoyFlatThresholdPercent",
                "must be a non-negative number",
            ));
        }
        self.progress.validate()
    }

    /// Parse and validate a JSON policy document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EmissionsError::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            yoy_flat_threshold_percent: 0.05,
            progress: ProgressThresholds::default(),
            log_sanitization: true,
        }
    }
}

// ============================================================================
// Reduction Target Configuration
// ============================================================================

/// An absolute reduction target expressed as a fixed percentage of the
/// baseline removed every year (linear contraction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionTargetConfig {
    pub baseline_year: i32,
    /// Baseline emissions in tCO2e
    pub baseline_value: f64,
    pub target_year: i32,
    /// Share of the baseline removed per year, e.g. 2.5
    pub annual_reduction_percent: f64,
}

impl ReductionTargetConfig {
    pub fn new(
        baseline_year: i32,
        baseline_value: f64,
        target_year: i32,
        annual_reduction_percent: f64,
    ) -> Result<Self> {
        let target = Self {
            baseline_year,
            baseline_value,
            target_year,
            annual_reduction_percent,
        };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.baseline_value.is_finite() || self.baseline_value < 0.0 {
            return Err(EmissionsError::invalid_parameter(
                "baselineValue",
                "must be a non-negative number",
            ));
        }
        if !(0.0..=100.0).contains(&self.annual_reduction_percent) {
            return Err(EmissionsError::invalid_parameter(
                "annualReductionPercent",
                "must be between 0 and 100",
            ));
        }
        if self.target_year <= self.baseline_year {
            return Err(EmissionsError::invalid_parameter(
                "targetYear",
                format!(
                    "target year {} must be after baseline year {}",
                    self.target_year, self.baseline_year
                ),
            ));
        }
        Ok(())
    }

    /// Target pathway value for `year`, one decimal, never below zero.
    pub fn target_value_for(&self, year: i32) -> Result<f64> {
        if year < self.baseline_year {
            return Err(EmissionsError::invalid_parameter(
                "year",
                format!("{} is before baseline year {}", year, self.baseline_year),
            ));
        }
        let years = (year - self.baseline_year) as f64;
        let remaining = (1.0 - self.annual_reduction_percent / 100.0 * years).max(0.0);
        Ok(round1(self.baseline_value * remaining))
    }

    /// Target value in the target year.
    pub fn target_value(&self) -> Result<f64> {
        self.target_value_for(self.target_year)
    }
}
