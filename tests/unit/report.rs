//! Unit tests for the notification report

use crate::fixtures::{candidate, contract};
use optiscan::models::{Direction, ScanOutcome, SelectedContract};
use optiscan::report::{build_report, format_selection, group_thousands, NO_SIGNALS_BODY};

fn selection(ticker: &str, direction: Direction) -> SelectedContract {
    let mut contract = contract(75, 0.65, 1_204);
    if direction == Direction::Short {
        contract.delta = -0.65;
    }
    SelectedContract {
        candidate: candidate(ticker, direction),
        contract,
    }
}

#[test]
fn test_no_candidates_report() {
    let (outcome, notification) = build_report("Algo Screener", &[], &[]);
    assert_eq!(outcome, ScanOutcome::NoSignals);
    assert_eq!(notification.title, "Algo Screener Report");
    assert_eq!(notification.body, NO_SIGNALS_BODY);
    assert_eq!(notification.body, "No signals found today.");
}

#[test]
fn test_candidates_without_options_report() {
    let candidates = vec![
        candidate("AAPL", Direction::Long),
        candidate("MSFT", Direction::Long),
    ];
    let (outcome, notification) = build_report("Algo Screener", &candidates, &[]);
    assert_eq!(outcome, ScanOutcome::NoSuitableOptions { candidates: 2 });
    assert_eq!(notification.title, "Algo Screener Report (No Options)");
    assert_eq!(
        notification.body,
        "2 initial signals found, but none had suitable options."
    );
}

#[test]
fn test_final_signals_report() {
    let candidates = vec![
        candidate("AAPL", Direction::Long),
        candidate("MSFT", Direction::Long),
    ];
    let selections = vec![selection("AAPL", Direction::Long)];
    let (outcome, notification) = build_report("Algo Screener", &candidates, &selections);
    assert_eq!(outcome, ScanOutcome::Signals { count: 1 });
    assert_eq!(notification.title, "Algo Screener: 1 Final Signal(s)");
    assert_eq!(notification.body, format_selection(&selections[0]));
}

#[test]
fn test_blocks_are_separated_by_blank_line() {
    let candidates = vec![
        candidate("AAPL", Direction::Long),
        candidate("TSLA", Direction::Short),
    ];
    let selections = vec![
        selection("AAPL", Direction::Long),
        selection("TSLA", Direction::Short),
    ];
    let (_, notification) = build_report("Desk", &candidates, &selections);
    assert_eq!(notification.title, "Desk: 2 Final Signal(s)");
    let blocks: Vec<&str> = notification.body.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("[LONG] AAPL"));
    assert!(blocks[1].contains("[SHORT] TSLA"));
    assert!(blocks[1].contains("180.0P"));
}

#[test]
fn test_selection_block_layout() {
    assert_eq!(
        format_selection(&selection("AAPL", Direction::Long)),
        "✅ [LONG] AAPL @ 187.42 (ADX: 24.1)\n\
         -> Option: 18Mar25 180.0C\n   \
         (DTE: 75, Δ: 0.65, IV: 31.2%, Vol: 1,204, OI: 8,310)"
    );
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}
