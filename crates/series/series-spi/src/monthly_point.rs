//! Monthly aggregate point.

use serde::{Deserialize, Serialize};

use crate::year_month::YearMonth;

/// One aggregated value for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub value: f64,
}

impl MonthlyPoint {
    pub fn new(month: YearMonth, value: f64) -> Self {
        Self { month, value }
    }
}

/// Sort points by month, keeping the last point supplied for any repeated month.
pub fn sort_and_coalesce(points: &[MonthlyPoint]) -> Vec<MonthlyPoint> {
    let mut sorted: Vec<(usize, MonthlyPoint)> = points.iter().copied().enumerate().collect();
    sorted.sort_by(|(ia, a), (ib, b)| a.month.cmp(&b.month).then(ia.cmp(ib)));

    let mut out: Vec<MonthlyPoint> = Vec::with_capacity(sorted.len());
    for (_, point) in sorted {
        match out.last_mut() {
            Some(last) if last.month == point.month => *last = point,
            _ => out.push(point),
        }
    }
    out
}

/// Extract the values of a series in order.
pub fn values_of(points: &[MonthlyPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, value: f64) -> MonthlyPoint {
        MonthlyPoint::new(month.parse().unwrap(), value)
    }

    #[test]
    fn test_sort_and_coalesce_orders_months() {
        let points = vec![point("2024-03", 3.0), point("2024-01", 1.0), point("2024-02", 2.0)];
        let sorted = sort_and_coalesce(&points);
        assert_eq!(values_of(&sorted), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_and_coalesce_keeps_last_duplicate() {
        let points = vec![point("2024-01", 1.0), point("2024-02", 2.0), point("2024-01", 7.0)];
        let sorted = sort_and_coalesce(&points);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].value, 7.0);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(point("2024-06", 12.5)).unwrap();
        assert_eq!(json, serde_json::json!({"month": "2024-06", "value": 12.5}));
    }
}
