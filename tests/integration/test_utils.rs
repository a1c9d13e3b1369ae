//! In-memory collaborators and wiremock helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use optiscan::config::{CallPolicy, ScanSettings};
use optiscan::core::Scanner;
use optiscan::models::{Interval, Lookback, OptionContract, PriceSeries};
use optiscan::options::{ChainRequest, ExpirationMap, OptionsChain};
use optiscan::report::Notification;
use optiscan::services::{Delivery, Notifier, OptionsChainProvider, PriceHistoryProvider};
use optiscan::ProviderError;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BENCHMARK: &str = "QQQ";
pub const TITLE: &str = "Algo Screener";

/// Fixed scan time: 2026-03-02, so the expiration window is
/// 2026-04-16 ..= 2026-06-30.
pub fn scan_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 21, 30, 0).unwrap()
}

pub fn test_policy() -> CallPolicy {
    CallPolicy {
        timeout: Duration::from_secs(2),
        max_retries: 0,
    }
}

pub fn settings(universe: &[&str]) -> ScanSettings {
    ScanSettings {
        benchmark: BENCHMARK.to_string(),
        universe: universe.iter().map(|t| t.to_string()).collect(),
        concurrency: 4,
        call_policy: test_policy(),
        report_title: TITLE.to_string(),
    }
}

/// Price history served from memory, recording every request.
#[derive(Default)]
pub struct FakeHistory {
    series: HashMap<(String, Interval), PriceSeries>,
    calls: Mutex<Vec<(String, Interval)>>,
}

impl FakeHistory {
    pub fn with(mut self, series: PriceSeries) -> Self {
        self.series
            .insert((series.ticker().to_string(), series.interval()), series);
        self
    }

    pub fn calls(&self) -> Vec<(String, Interval)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceHistoryProvider for FakeHistory {
    async fn fetch_history(
        &self,
        ticker: &str,
        _lookback: Lookback,
        interval: Interval,
    ) -> Result<PriceSeries, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((ticker.to_string(), interval));
        self.series
            .get(&(ticker.to_string(), interval))
            .cloned()
            .ok_or_else(|| ProviderError::Api(format!("no history for {ticker}")))
    }
}

/// Options chains served from memory, recording every request.
#[derive(Default)]
pub struct FakeChains {
    chains: HashMap<String, OptionsChain>,
    requests: Mutex<Vec<ChainRequest>>,
}

impl FakeChains {
    pub fn with(mut self, chain: OptionsChain) -> Self {
        self.chains.insert(chain.underlying.clone(), chain);
        self
    }

    pub fn requests(&self) -> Vec<ChainRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OptionsChainProvider for FakeChains {
    async fn fetch_chain(&self, request: &ChainRequest) -> Result<OptionsChain, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.chains
            .get(&request.ticker)
            .cloned()
            .ok_or_else(|| ProviderError::Status {
                status: 404,
                body: format!("no chain for {}", request.ticker),
            })
    }
}

/// Notifier that records what it is asked to send.
#[derive(Default)]
pub struct FakeNotifier {
    fail_status: Option<u16>,
    sent: Mutex<Vec<Notification>>,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self::failing_with(401)
    }

    pub fn failing_with(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, notification: &Notification) -> Result<Delivery, ProviderError> {
        self.sent.lock().unwrap().push(notification.clone());
        if let Some(status) = self.fail_status {
            return Err(ProviderError::Status {
                status,
                body: "notification rejected".to_string(),
            });
        }
        Ok(Delivery::Sent)
    }
}

/// Scanner wired to in-memory collaborators that stay inspectable.
pub struct TestScan {
    pub scanner: Scanner,
    pub history: Arc<FakeHistory>,
    pub chains: Arc<FakeChains>,
    pub notifier: Arc<FakeNotifier>,
}

impl TestScan {
    pub fn new(
        settings: ScanSettings,
        history: FakeHistory,
        chains: FakeChains,
        notifier: FakeNotifier,
    ) -> Self {
        let history = Arc::new(history);
        let chains = Arc::new(chains);
        let notifier = Arc::new(notifier);
        let scanner = Scanner::new(
            settings,
            history.clone(),
            chains.clone(),
            notifier.clone(),
        );
        Self {
            scanner,
            history,
            chains,
            notifier,
        }
    }
}

fn expiration_map(contracts: Vec<OptionContract>) -> ExpirationMap {
    let mut side: ExpirationMap = IndexMap::new();
    for contract in contracts {
        side.entry(format!(
            "{}:{}",
            contract.expiration.format("%Y-%m-%d"),
            contract.days_to_expiration
        ))
        .or_default()
        .entry(format!("{:.1}", contract.strike))
        .or_default()
        .push(contract);
    }
    side
}

/// Call-only chain with every contract under its own expiration label.
pub fn call_chain(underlying: &str, calls: Vec<OptionContract>) -> OptionsChain {
    OptionsChain {
        underlying: underlying.to_string(),
        calls: expiration_map(calls),
        puts: IndexMap::new(),
    }
}

/// Put-only counterpart of [`call_chain`].
pub fn put_chain(underlying: &str, puts: Vec<OptionContract>) -> OptionsChain {
    OptionsChain {
        underlying: underlying.to_string(),
        calls: IndexMap::new(),
        puts: expiration_map(puts),
    }
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

/// Chart endpoint payload for a series.
pub fn chart_json(series: &PriceSeries) -> Value {
    let bars = series.bars();
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": series.ticker(), "currency": "USD" },
                "timestamp": bars.iter().map(|b| b.timestamp.timestamp()).collect::<Vec<_>>(),
                "indicators": {
                    "quote": [{
                        "open": bars.iter().map(|b| b.open).collect::<Vec<_>>(),
                        "high": bars.iter().map(|b| b.high).collect::<Vec<_>>(),
                        "low": bars.iter().map(|b| b.low).collect::<Vec<_>>(),
                        "close": bars.iter().map(|b| b.close).collect::<Vec<_>>(),
                        "volume": bars.iter().map(|b| b.volume).collect::<Vec<_>>()
                    }]
                }
            }],
            "error": null
        }
    })
}

pub async fn mount_chart(server: &MockServer, series: &PriceSeries, range: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}", series.ticker())))
        .and(query_param("range", range))
        .and(query_param("interval", series.interval().as_query()))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_json(series)))
        .mount(server)
        .await;
}
