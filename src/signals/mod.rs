//! Signal evaluation: market regime and per-ticker crossover rules.

pub mod engine;
pub mod regime;

pub use engine::{SignalEngine, TickerSnapshot};
pub use regime::RegimeClassifier;
