//! One full screening pass: regime, per-ticker evaluation, contract lookup,
//! report delivery.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::stream::{self, StreamExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::ScanSettings;
use crate::error::ScanError;
use crate::models::{
    Interval, Lookback, PriceSeries, RegimeState, ScanReport, SelectedContract, SignalCandidate,
};
use crate::options::{ChainRequest, ContractSelector};
use crate::report::build_report;
use crate::services::retry::call_with_policy;
use crate::services::{Delivery, Notifier, OptionsChainProvider, PriceHistoryProvider};
use crate::signals::{RegimeClassifier, SignalEngine};

/// Result of evaluating a single ticker.
#[derive(Debug)]
enum TickerOutcome {
    Skipped,
    Evaluated(Option<SignalCandidate>),
}

pub struct Scanner {
    settings: ScanSettings,
    history: Arc<dyn PriceHistoryProvider>,
    chains: Arc<dyn OptionsChainProvider>,
    notifier: Arc<dyn Notifier>,
}

impl Scanner {
    pub fn new(
        settings: ScanSettings,
        history: Arc<dyn PriceHistoryProvider>,
        chains: Arc<dyn OptionsChainProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            history,
            chains,
            notifier,
        }
    }

    /// Run a scan as of now.
    pub async fn run(&self) -> Result<ScanReport, ScanError> {
        self.run_at(Utc::now()).await
    }

    /// Run a scan with `started_at` as the reference time for the options
    /// expiration window.
    pub async fn run_at(&self, started_at: DateTime<Utc>) -> Result<ScanReport, ScanError> {
        let settings = &self.settings;
        if settings.universe.is_empty() {
            return Err(ScanError::EmptyUniverse);
        }

        let regime = self.classify_regime().await?;
        let tickers: Vec<String> = settings
            .universe
            .iter()
            .filter(|t| **t != settings.benchmark)
            .cloned()
            .collect();

        info!(
            regime = %regime,
            tickers = tickers.len(),
            concurrency = settings.concurrency,
            "Scanner: starting scan of {} tickers under {} regime",
            tickers.len(),
            regime
        );

        let outcomes = if regime == RegimeState::Neutral {
            info!("Scanner: neutral regime, signal generation suppressed");
            Vec::new()
        } else {
            stream::iter(tickers.clone())
                .map(|ticker| self.evaluate_ticker(ticker, regime))
                .buffered(settings.concurrency.max(1))
                .collect::<Vec<_>>()
                .await
        };

        let tickers_skipped = outcomes
            .iter()
            .filter(|o| matches!(o, TickerOutcome::Skipped))
            .count();
        let candidates: Vec<SignalCandidate> = outcomes
            .into_iter()
            .filter_map(|o| match o {
                TickerOutcome::Evaluated(candidate) => candidate,
                TickerOutcome::Skipped => None,
            })
            .collect();
        let tickers_evaluated = if regime == RegimeState::Neutral {
            0
        } else {
            tickers.len() - tickers_skipped
        };

        info!(
            candidates = candidates.len(),
            skipped = tickers_skipped,
            "Scanner: {} candidates from {} evaluated tickers",
            candidates.len(),
            tickers_evaluated
        );

        let today = started_at.date_naive();
        let mut selections = Vec::new();
        for candidate in &candidates {
            if let Some(selection) = self.select_contract(candidate, today).await {
                selections.push(selection);
            }
        }

        let (outcome, notification) = build_report(&settings.report_title, &candidates, &selections);

        // One attempt, never retried.
        let notification_sent = match timeout(
            settings.call_policy.timeout,
            self.notifier.notify(&notification),
        )
        .await
        {
            Ok(Ok(Delivery::Sent)) => true,
            Ok(Ok(Delivery::Skipped)) => {
                debug!("Scanner: notification skipped (no credential or empty body)");
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Scanner: notification delivery failed");
                false
            }
            Err(_) => {
                warn!(
                    timeout = ?settings.call_policy.timeout,
                    "Scanner: notification delivery timed out"
                );
                false
            }
        };

        info!(
            outcome = ?outcome,
            selections = selections.len(),
            notification_sent,
            "Scanner: scan complete"
        );

        Ok(ScanReport {
            started_at,
            regime,
            tickers_requested: tickers.len(),
            tickers_evaluated,
            tickers_skipped,
            contract_lookups: candidates.len(),
            candidates,
            selections,
            outcome,
            notification_sent,
        })
    }

    async fn classify_regime(&self) -> Result<RegimeState, ScanError> {
        let benchmark = &self.settings.benchmark;
        let series = self
            .fetch(benchmark, Lookback::OneYear, Interval::Daily)
            .await
            .map_err(|source| ScanError::Benchmark {
                ticker: benchmark.clone(),
                source,
            })?;

        let regime = RegimeClassifier::classify(&series);
        info!(
            benchmark = %benchmark,
            sessions = series.len(),
            regime = %regime,
            "Scanner: market regime is {}",
            regime
        );
        Ok(regime)
    }

    async fn fetch(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<PriceSeries, crate::error::ProviderError> {
        call_with_policy(self.settings.call_policy, "price history", || {
            self.history.fetch_history(ticker, lookback, interval)
        })
        .await
    }

    async fn fetch_non_empty(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Option<PriceSeries> {
        match self.fetch(ticker, lookback, interval).await {
            Ok(series) if series.is_empty() => {
                debug!(ticker = %ticker, interval = ?interval, "Scanner: empty history, skipping {}", ticker);
                None
            }
            Ok(series) => Some(series),
            Err(e) => {
                warn!(ticker = %ticker, interval = ?interval, error = %e, "Scanner: history unavailable, skipping {}", ticker);
                None
            }
        }
    }

    async fn evaluate_ticker(&self, ticker: String, regime: RegimeState) -> TickerOutcome {
        let ticker = ticker.as_str();
        let Some(daily) = self
            .fetch_non_empty(ticker, Lookback::OneYear, Interval::Daily)
            .await
        else {
            return TickerOutcome::Skipped;
        };
        let Some(weekly) = self
            .fetch_non_empty(ticker, Lookback::TwoYears, Interval::Weekly)
            .await
        else {
            return TickerOutcome::Skipped;
        };

        let Some(snapshot) = SignalEngine::snapshot(&daily, &weekly) else {
            debug!(ticker = %ticker, bars = daily.len(), "Scanner: not enough bars for {}", ticker);
            return TickerOutcome::Skipped;
        };

        debug!(
            ticker = %ticker,
            close = snapshot.last_close,
            fast = snapshot.fast,
            slow = snapshot.slow,
            weekly_fast = snapshot.weekly_fast,
            adx = ?snapshot.adx,
            "Scanner: evaluated {}",
            ticker
        );

        let candidate = SignalEngine::decide(ticker, &snapshot, regime);
        if let Some(c) = &candidate {
            info!(
                ticker = %ticker,
                direction = %c.direction,
                price = c.trigger_price,
                adx = c.adx_at_trigger,
                "Scanner: {} signal for {}",
                c.direction,
                ticker
            );
        }
        TickerOutcome::Evaluated(candidate)
    }

    async fn select_contract(
        &self,
        candidate: &SignalCandidate,
        today: NaiveDate,
    ) -> Option<SelectedContract> {
        let request = ChainRequest::new(&candidate.ticker, candidate.direction, today);
        let chain = match call_with_policy(self.settings.call_policy, "options chain", || {
            self.chains.fetch_chain(&request)
        })
        .await
        {
            Ok(chain) => chain,
            Err(e) => {
                info!(ticker = %candidate.ticker, error = %e, "Scanner: options chain unavailable for {}", candidate.ticker);
                return None;
            }
        };

        let Some(contract) = ContractSelector::select_from_chain(&chain, candidate.direction) else {
            info!(ticker = %candidate.ticker, "Scanner: no suitable contract for {}", candidate.ticker);
            return None;
        };

        Some(SelectedContract {
            candidate: candidate.clone(),
            contract,
        })
    }
}
