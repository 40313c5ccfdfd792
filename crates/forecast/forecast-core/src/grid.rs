//! Complete monthly grid
//!
//! Reindexes a series onto every month from its first to its last observed
//! month. Missing months are linearly interpolated between their observed
//! neighbours, so every downstream statistic sees a finite value per month.

use series_spi::{sort_and_coalesce, MonthlyPoint};

/// A gap-free ascending series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reindexed {
    pub points: Vec<MonthlyPoint>,
    /// Distinct months with a finite observed value
    pub observed: usize,
    /// Months filled by interpolation
    pub interpolated: usize,
}

impl Reindexed {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Sort, coalesce repeated months (last wins), drop non-finite values and
/// fill the gaps.
pub fn reindex(series: &[MonthlyPoint]) -> Reindexed {
    let finite: Vec<MonthlyPoint> = series
        .iter()
        .copied()
        .filter(|p| p.value.is_finite())
        .collect();
    let observed = sort_and_coalesce(&finite);

    let mut points = Vec::with_capacity(observed.len());
    let mut interpolated = 0;
    for (i, point) in observed.iter().enumerate() {
        if let Some(prev) = i.checked_sub(1).map(|j| observed[j]) {
            let gap = prev.month.months_until(&point.month);
            for k in 1..gap {
                let fraction = k as f64 / gap as f64;
                let value = prev.value + (point.value - prev.value) * fraction;
                points.push(MonthlyPoint::new(prev.month.offset(k), value));
                interpolated += 1;
            }
        }
        points.push(*point);
    }

    Reindexed {
        observed: observed.len(),
        points,
        interpolated,
    }
}
