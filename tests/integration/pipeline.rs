//! Full scans through the HTTP providers, all upstreams mocked.

use std::sync::Arc;

use optiscan::core::Scanner;
use optiscan::models::{Interval, ScanOutcome};
use optiscan::services::{PushbulletNotifier, TdaChainProvider, YahooChartProvider};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{flat_closes, long_crossover_daily, low_weekly, rising_closes, series_from_closes};
use crate::test_utils::{base_url, mount_chart, scan_time, settings, BENCHMARK};

struct Upstreams {
    yahoo: MockServer,
    tda: MockServer,
    pushbullet: MockServer,
}

impl Upstreams {
    async fn start() -> Self {
        let upstreams = Self {
            yahoo: MockServer::start().await,
            tda: MockServer::start().await,
            pushbullet: MockServer::start().await,
        };
        let benchmark = series_from_closes(BENCHMARK, Interval::Daily, &rising_closes(250));
        mount_chart(&upstreams.yahoo, &benchmark, "1y").await;
        upstreams
    }

    fn scanner(&self, universe: &[&str]) -> Scanner {
        let client = reqwest::Client::new();
        Scanner::new(
            settings(universe),
            Arc::new(YahooChartProvider::with_client(
                base_url(&self.yahoo),
                client.clone(),
            )),
            Arc::new(TdaChainProvider::with_client(
                base_url(&self.tda),
                Some(SecretString::from("tda-key".to_string())),
                client.clone(),
            )),
            Arc::new(PushbulletNotifier::with_client(
                base_url(&self.pushbullet),
                Some(SecretString::from("pb-token".to_string())),
                client,
            )),
        )
    }
}

#[tokio::test]
async fn quiet_market_pushes_single_no_signal_note() {
    let upstreams = Upstreams::start().await;
    let flat = series_from_closes("KO", Interval::Daily, &flat_closes(120, 60.0));
    mount_chart(&upstreams.yahoo, &flat, "1y").await;
    mount_chart(&upstreams.yahoo, &low_weekly("KO"), "2y").await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&upstreams.tda)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/pushes"))
        .and(body_partial_json(json!({
            "type": "note",
            "title": "Algo Screener Report",
            "body": "No signals found today."
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&upstreams.pushbullet)
        .await;

    let report = upstreams.scanner(&["KO"]).run_at(scan_time()).await.unwrap();

    assert_eq!(report.outcome, ScanOutcome::NoSignals);
    assert_eq!(report.tickers_evaluated, 1);
    assert!(report.notification_sent);
}

#[tokio::test]
async fn crossover_without_chain_pushes_no_options_note() {
    let upstreams = Upstreams::start().await;
    mount_chart(&upstreams.yahoo, &long_crossover_daily("AAPL"), "1y").await;
    mount_chart(&upstreams.yahoo, &low_weekly("AAPL"), "2y").await;

    Mock::given(method("GET"))
        .and(path("/v1/marketdata/chains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "AAPL",
            "status": "SUCCESS",
            "callExpDateMap": {},
            "putExpDateMap": {}
        })))
        .expect(1)
        .mount(&upstreams.tda)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/pushes"))
        .and(body_partial_json(json!({
            "title": "Algo Screener Report (No Options)",
            "body": "1 initial signals found, but none had suitable options."
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&upstreams.pushbullet)
        .await;

    let report = upstreams.scanner(&["AAPL"]).run_at(scan_time()).await.unwrap();

    assert_eq!(report.outcome, ScanOutcome::NoSuitableOptions { candidates: 1 });
    assert_eq!(report.contract_lookups, 1);
}

#[tokio::test]
async fn unavailable_benchmark_aborts_before_notifying() {
    let upstreams = Upstreams {
        yahoo: MockServer::start().await,
        tda: MockServer::start().await,
        pushbullet: MockServer::start().await,
    };
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstreams.yahoo)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstreams.pushbullet)
        .await;

    let result = upstreams.scanner(&["AAPL"]).run_at(scan_time()).await;

    assert!(result.is_err());
}
