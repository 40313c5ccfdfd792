//! Model module containing data structures

mod breakdown;
mod category;
mod comparison;
mod intensity;
mod projection;
mod record;
mod scope;
mod summary;
mod unit;
mod window;

pub use breakdown::{CategoryBreakdown, EmissionSource, MetricValue, MonthlyMeasure, ScopeBreakdown};
pub use category::Category;
pub use comparison::{Direction, ProgressStatus, TargetProgress, YoyComparison};
pub use intensity::{IntensityDenominators, IntensityMetrics};
pub use projection::AnnualProjection;
pub use record::{MetricRecord, RawMetricRecord, RecordKey};
pub use scope::Scope;
pub use summary::{AggregateResult, SanitizeReport};
pub use unit::UnitClass;
pub use window::DateWindow;
