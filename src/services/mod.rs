//! External collaborators: price history, options chains, notifications.

pub mod market_data;
pub mod notifier;
pub mod options_chain;
pub mod retry;
pub mod yahoo;

pub use market_data::PriceHistoryProvider;
pub use notifier::{Delivery, Notifier, PushbulletNotifier};
pub use options_chain::{OptionsChainProvider, TdaChainProvider};
pub use yahoo::YahooChartProvider;
