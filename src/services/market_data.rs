//! Price history provider interface.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{Interval, Lookback, PriceSeries};

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Historical bars for `ticker`, oldest first. An unknown ticker may come
    /// back as an error or as an empty series.
    async fn fetch_history(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<PriceSeries, ProviderError>;
}
