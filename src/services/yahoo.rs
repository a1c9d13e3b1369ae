//! Yahoo Finance chart endpoint as the price history source.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::ProviderError;
use crate::models::{Interval, Lookback, PriceBar, PriceSeries};
use crate::services::market_data::PriceHistoryProvider;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; optiscan/0.1)";

pub struct YahooChartProvider {
    client: Client,
    base_url: Url,
}

impl YahooChartProvider {
    pub fn new(base_url: Url, timeout: std::time::Duration) -> Result<Self, ProviderError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { client, base_url }
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.base_url.as_str().trim_end_matches('/'),
            ticker
        )
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn column(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

/// Zip the columnar chart payload into bars. Rows with a missing price are
/// dropped; a missing volume counts as zero.
fn into_bars(result: ChartResult) -> Vec<PriceBar> {
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            Some(PriceBar::new(
                DateTime::from_timestamp(ts, 0)?,
                column(&quote.open, i)?,
                column(&quote.high, i)?,
                column(&quote.low, i)?,
                column(&quote.close, i)?,
                column(&quote.volume, i).unwrap_or(0.0),
            ))
        })
        .collect()
}

#[async_trait]
impl PriceHistoryProvider for YahooChartProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<PriceSeries, ProviderError> {
        let response = self
            .client
            .get(self.chart_url(ticker))
            .query(&[
                ("range", lookback.as_query()),
                ("interval", interval.as_query()),
                ("includePrePost", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ChartEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if let Some(err) = envelope.chart.error {
            return Err(ProviderError::Api(format!("{}: {}", err.code, err.description)));
        }

        let bars = envelope
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(into_bars)
            .unwrap_or_default();

        debug!(
            ticker = %ticker,
            interval = ?interval,
            bars = bars.len(),
            "YahooChartProvider: fetched {} bars for {}",
            bars.len(),
            ticker
        );

        Ok(PriceSeries::new(ticker, interval, bars))
    }
}
