//! Indicator library: pure functions over time-ordered price columns.

pub mod trend;

pub use crate::error::IndicatorError;
pub use trend::*;
