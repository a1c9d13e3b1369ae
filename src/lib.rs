//! optiscan - scheduled TEMA/ADX screener that pairs trend signals with
//! liquid options contracts.
//!
//! A scan derives the market regime from a benchmark, evaluates every ticker
//! of the universe, looks up one options contract per candidate and pushes a
//! summary notification.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod options;
pub mod report;
pub mod services;
pub mod signals;
pub mod universe;

pub use config::ScreenerConfig;
pub use error::{ConfigError, IndicatorError, ProviderError, ScanError};
pub use models::{
    Direction, OptionContract, PriceBar, PriceSeries, RegimeState, ScanOutcome, ScanReport,
    SelectedContract, SignalCandidate,
};
