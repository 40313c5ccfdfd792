//! Year-over-year deltas and target progress.

use emissions_api::ProgressThresholds;
use emissions_spi::units::round1;
use emissions_spi::{
    Direction, EmissionsError, ProgressStatus, Result, TargetProgress, YoyComparison,
};

/// Compare two period totals.
///
/// `percent_change` is `None` whenever `previous` is not positive; the
/// direction then comes from comparing the raw values.
pub fn yoy_comparison(current: f64, previous: f64, flat_threshold_percent: f64) -> YoyComparison {
    let percent_change = (previous > 0.0 && current.is_finite() && previous.is_finite())
        .then(|| round1((current - previous) / previous * 100.0));

    let direction = match percent_change {
        Some(pct) if pct.abs() < flat_threshold_percent => Direction::Flat,
        Some(pct) if pct > 0.0 => Direction::Increase,
        Some(_) => Direction::Decrease,
        None if current > previous => Direction::Increase,
        None if current < previous => Direction::Decrease,
        None => Direction::Flat,
    };

    YoyComparison {
        current,
        previous,
        percent_change,
        direction,
    }
}

/// Share of the planned reduction already achieved.
///
/// `progress = (baseline - projected) / (baseline - target) * 100`, one
/// decimal. When baseline equals target no reduction is planned, the
/// percentage is `None` and the status only says whether the projection
/// stays at or below the target.
pub fn target_progress(
    baseline_value: f64,
    target_value: f64,
    projected_value: f64,
    thresholds: &ProgressThresholds,
) -> Result<TargetProgress> {
    for (name, value) in [
        ("baseline_value", baseline_value),
        ("target_value", target_value),
        ("projected_value", projected_value),
    ] {
        if !value.is_finite() {
            return Err(EmissionsError::invalid_parameter(name, "must be finite"));
        }
    }

    let planned = baseline_value - target_value;
    let (progress_percent, status) = if planned == 0.0 {
        let status = if projected_value <= target_value {
            ProgressStatus::OnTrack
        } else {
            ProgressStatus::OffTrack
        };
        (None, status)
    } else {
        let pct = round1((baseline_value - projected_value) / planned * 100.0);
        (Some(pct), thresholds.classify(pct))
    };

    Ok(TargetProgress {
        baseline_value,
        target_value,
        projected_value,
        progress_percent,
        status,
    })
}
