//! Metric records as read from storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use series_spi::YearMonth;

use crate::error::RecordError;
use crate::model::{Category, DateWindow, Scope};

/// One metered reading for one tracked quantity over one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// Tracked quantity, e.g. `"Electricity"` or `"Car Travel"`
    pub metric_id: String,
    pub category: Category,
    pub scope: Scope,
    /// Physical site; `None` means organization-level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Quantity in the metric's native unit
    pub value: f64,
    pub unit: String,
    /// Precomputed CO2e in kilograms; `None` for non-emissions metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2e_emissions: Option<f64>,
}

/// Identity of a reading. Two records with the same key are double counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub metric_id: String,
    pub period_start: NaiveDate,
    pub site_id: Option<String>,
}

impl MetricRecord {
    /// Organization-level record without emissions; scope follows the category.
    pub fn new(
        metric_id: impl Into<String>,
        category: Category,
        period_start: NaiveDate,
        period_end: NaiveDate,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            metric_id: metric_id.into(),
            category,
            scope: category.scope(),
            site_id: None,
            period_start,
            period_end,
            value,
            unit: unit.into(),
            co2e_emissions: None,
        }
    }

    /// Record covering exactly one calendar month.
    pub fn monthly(
        metric_id: impl Into<String>,
        category: Category,
        month: YearMonth,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self::new(
            metric_id,
            category,
            month.first_day(),
            month.last_day(),
            value,
            unit,
        )
    }

    pub fn with_emissions(mut self, co2e_kg: f64) -> Self {
        self.co2e_emissions = Some(co2e_kg);
        self
    }

    pub fn with_site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            metric_id: self.metric_id.clone(),
            period_start: self.period_start,
            site_id: self.site_id.clone(),
        }
    }

    /// Calendar month the reading is bucketed into.
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.period_start)
    }

    pub fn intersects(&self, window: &DateWindow) -> bool {
        window.intersects(self.period_start, self.period_end)
    }

    /// CO2e in kilograms, zero for non-emissions metrics.
    pub fn emissions_kg(&self) -> f64 {
        self.co2e_emissions.unwrap_or(0.0)
    }

    /// Check the record is usable for aggregation.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !self.value.is_finite() {
            return Err(RecordError::InvalidValue(self.value.to_string()));
        }
        if let Some(co2e) = self.co2e_emissions {
            if !co2e.is_finite() {
                return Err(RecordError::InvalidEmissions(co2e.to_string()));
            }
        }
        if self.period_end < self.period_start {
            return Err(RecordError::InvertedPeriod {
                start: self.period_start,
                end: self.period_end,
            });
        }
        if self.category.scope() != self.scope {
            return Err(RecordError::ScopeMismatch {
                category: self.category,
                scope: self.scope,
            });
        }
        Ok(())
    }
}

/// A record exactly as storage hands it over: dates as strings, numbers
/// possibly encoded as strings, labels not yet checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetricRecord {
    pub metric_id: String,
    pub category: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
    pub period_start: String,
    /// Defaults to the last day of the `period_start` month
    #[serde(default)]
    pub period_end: Option<String>,
    pub value: Value,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub co2e_emissions: Option<Value>,
}

impl TryFrom<RawMetricRecord> for MetricRecord {
    type Error = RecordError;

    fn try_from(raw: RawMetricRecord) -> Result<Self, Self::Error> {
        let category: Category = raw
            .category
            .parse()
            .map_err(|_| RecordError::UnknownCategory(raw.category.clone()))?;
        let scope = match raw.scope.as_deref() {
            Some(s) if !s.trim().is_empty() => s
                .parse::<Scope>()
                .map_err(|_| RecordError::UnknownScope(s.to_string()))?,
            _ => category.scope(),
        };

        let period_start = parse_date(&raw.period_start)?;
        let period_end = match raw.period_end.as_deref() {
            Some(s) if !s.trim().is_empty() => parse_date(s)?,
            _ => YearMonth::from_date(period_start).last_day(),
        };

        let value = parse_number(&raw.value)
            .ok_or_else(|| RecordError::InvalidValue(raw.value.to_string()))?;
        let co2e_emissions = match &raw.co2e_emissions {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                parse_number(v).ok_or_else(|| RecordError::InvalidEmissions(v.to_string()))?,
            ),
        };

        let record = MetricRecord {
            metric_id: raw.metric_id,
            category,
            scope,
            site_id: raw.site_id.filter(|s| !s.trim().is_empty()),
            period_start,
            period_end,
            value,
            unit: raw.unit,
            co2e_emissions,
        };
        record.validate()?;
        Ok(record)
    }
}

/// ISO date, the date part of an RFC 3339 timestamp, or a `YYYY-MM` month
/// meaning its first day.
fn parse_date(s: &str) -> Result<NaiveDate, RecordError> {
    let trimmed = s.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .or_else(|_| trimmed.parse::<YearMonth>().map(|m| m.first_day()))
        .map_err(|_| RecordError::InvalidDate(s.to_string()))
}

/// JSON number or numeric string; non-finite values are rejected.
fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
