//! Optiscan Screener
//!
//! Runs one scan and exits, or keeps running scans on `SCAN_SCHEDULE`
//! until interrupted.

use dotenvy::dotenv;
use optiscan::config::ScreenerConfig;
use optiscan::core::{ScanScheduler, Scanner};
use optiscan::logging;
use optiscan::services::{
    Notifier, OptionsChainProvider, PriceHistoryProvider, PushbulletNotifier, TdaChainProvider,
    YahooChartProvider,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = ScreenerConfig::from_env()?;
    logging::init_logging(&config.environment);

    info!("Starting Optiscan Screener");
    info!(environment = %config.environment, "Environment");
    info!(
        benchmark = %config.scan.benchmark,
        universe = config.scan.universe.len(),
        concurrency = config.scan.concurrency,
        "Scan universe: {} tickers, benchmark {}",
        config.scan.universe.len(),
        config.scan.benchmark
    );

    if config.credentials.tda_api_key.is_none() {
        warn!("TDA_API_KEY not set - options chain lookups will fail");
    }
    if config.credentials.pushbullet_api_key.is_none() {
        warn!("PUSHBULLET_API_KEY not set - notifications will be skipped");
    }

    let ScreenerConfig {
        scan,
        endpoints,
        credentials,
        schedule,
        ..
    } = config;
    let timeout = scan.call_policy.timeout;

    let history: Arc<dyn PriceHistoryProvider> =
        Arc::new(YahooChartProvider::new(endpoints.price_history, timeout)?);
    let chains: Arc<dyn OptionsChainProvider> = Arc::new(TdaChainProvider::new(
        endpoints.options_chain,
        credentials.tda_api_key,
        timeout,
    )?);
    let notifier: Arc<dyn Notifier> = Arc::new(PushbulletNotifier::new(
        endpoints.pushbullet,
        credentials.pushbullet_api_key,
        timeout,
    )?);

    let scanner = Arc::new(Scanner::new(scan, history, chains, notifier));

    let Some(expression) = schedule else {
        let report = scanner.run().await?;
        info!(
            report = %serde_json::to_string(&report)?,
            "Scan finished: {} candidates, {} selections",
            report.candidates.len(),
            report.selections.len()
        );
        return Ok(());
    };

    info!("Starting scan scheduler...");
    let scheduler = ScanScheduler::new(scanner, &expression)?;
    if let Some(next) = scheduler.next_run() {
        info!(next = %next, "First scan at {}", next);
    }
    scheduler.start().await;

    // Graceful shutdown
    info!("Screener started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down screener...");
            scheduler.stop().await;
            info!("Screener stopped");
        }
    }

    Ok(())
}
