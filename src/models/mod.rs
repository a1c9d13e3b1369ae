//! Shared data models spanning the screener layers.

pub mod bar;
pub mod options;
pub mod scan;
pub mod signal;

pub use bar::{Interval, Lookback, PriceBar, PriceSeries};
pub use options::{ContractType, OptionContract, SelectedContract};
pub use scan::{ScanOutcome, ScanReport};
pub use signal::{Direction, RegimeState, SignalCandidate};
