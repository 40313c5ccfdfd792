//! Series Service Provider Interface
//!
//! Calendar-month time series vocabulary shared by the aggregation engine
//! (which produces monthly points) and the forecast engine (which extends them).

mod error;
mod monthly_point;
mod year_month;

pub use error::{Result, SeriesError};
pub use monthly_point::{sort_and_coalesce, values_of, MonthlyPoint};
pub use year_month::YearMonth;
