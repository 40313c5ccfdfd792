//! Error module containing error types and result aliases

mod emissions_error;
mod record_error;

pub use emissions_error::{EmissionsError, Result};
pub use record_error::RecordError;
