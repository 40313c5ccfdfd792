//! Record sanitization: skip malformed rows, collapse duplicate keys.

use std::collections::BTreeMap;

use emissions_spi::{MetricRecord, RawMetricRecord, RecordError, RecordKey, SanitizeReport};

/// Records ready for aggregation plus an account of what was dropped.
#[derive(Debug, Clone, Default)]
pub struct Sanitized {
    /// Unique by [`RecordKey`], ordered by key
    pub records: Vec<MetricRecord>,
    pub report: SanitizeReport,
    /// Reason the first malformed record was rejected
    pub first_rejection: Option<RecordError>,
}

impl Sanitized {
    /// Warn about skipped and collapsed records, if any.
    pub fn log(&self) {
        if self.report.skipped_count > 0 {
            tracing::warn!(
                skipped = self.report.skipped_count,
                input = self.report.input_count,
                reason = %self
                    .first_rejection
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                "skipped malformed metric records"
            );
        }
        if self.report.duplicates_collapsed > 0 {
            tracing::warn!(
                duplicates = self.report.duplicates_collapsed,
                kept = self.report.kept_count,
                "collapsed duplicate metric records sharing metric, period start and site"
            );
        }
    }
}

/// Validate typed records and collapse duplicates, last one wins.
pub fn sanitize(records: impl IntoIterator<Item = MetricRecord>) -> Sanitized {
    collect(records.into_iter().map(|record| {
        record.validate()?;
        Ok(record)
    }))
}

/// Convert raw storage rows, then sanitize as [`sanitize`] does.
pub fn sanitize_raw(raw: impl IntoIterator<Item = RawMetricRecord>) -> Sanitized {
    collect(raw.into_iter().map(MetricRecord::try_from))
}

fn collect(items: impl Iterator<Item = Result<MetricRecord, RecordError>>) -> Sanitized {
    let mut by_key: BTreeMap<RecordKey, MetricRecord> = BTreeMap::new();
    let mut report = SanitizeReport::default();
    let mut first_rejection = None;

    for item in items {
        report.input_count += 1;
        match item {
            Ok(record) => {
                if by_key.insert(record.key(), record).is_some() {
                    report.duplicates_collapsed += 1;
                }
            }
            Err(err) => {
                report.skipped_count += 1;
                first_rejection.get_or_insert(err);
            }
        }
    }

    report.kept_count = by_key.len();
    Sanitized {
        records: by_key.into_values().collect(),
        report,
        first_rejection,
    }
}
