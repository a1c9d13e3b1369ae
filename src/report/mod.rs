//! Notification report built from the scan results.

use crate::models::{ScanOutcome, SelectedContract, SignalCandidate};

/// Title and body handed to the notification transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

pub const NO_SIGNALS_BODY: &str = "No signals found today.";

/// Build the single notification of a scan and classify its outcome.
///
/// No candidates, at least one selected contract, and candidates without any
/// suitable contract each map to a distinct title.
pub fn build_report(
    title_prefix: &str,
    candidates: &[SignalCandidate],
    selections: &[SelectedContract],
) -> (ScanOutcome, Notification) {
    if candidates.is_empty() {
        return (
            ScanOutcome::NoSignals,
            Notification {
                title: format!("{title_prefix} Report"),
                body: NO_SIGNALS_BODY.to_string(),
            },
        );
    }

    if selections.is_empty() {
        return (
            ScanOutcome::NoSuitableOptions {
                candidates: candidates.len(),
            },
            Notification {
                title: format!("{title_prefix} Report (No Options)"),
                body: format!(
                    "{} initial signals found, but none had suitable options.",
                    candidates.len()
                ),
            },
        );
    }

    let body = selections
        .iter()
        .map(format_selection)
        .collect::<Vec<_>>()
        .join("\n\n");

    (
        ScanOutcome::Signals {
            count: selections.len(),
        },
        Notification {
            title: format!("{title_prefix}: {} Final Signal(s)", selections.len()),
            body,
        },
    )
}

/// Three-line block describing one selection. The chain provider quotes IV
/// in percent already, so it is printed unscaled.
pub fn format_selection(selection: &SelectedContract) -> String {
    let SelectedContract {
        candidate,
        contract,
    } = selection;

    format!(
        "✅ [{}] {} @ {:.2} (ADX: {:.1})\n\
         -> Option: {} {:.1}{}\n   \
         (DTE: {}, Δ: {:.2}, IV: {:.1}%, Vol: {}, OI: {})",
        candidate.direction,
        candidate.ticker,
        candidate.trigger_price,
        candidate.adx_at_trigger,
        contract.expiration.format("%d%b%y"),
        contract.strike,
        candidate.direction.contract_type().suffix(),
        contract.days_to_expiration,
        contract.delta,
        contract.implied_volatility,
        group_thousands(contract.volume),
        group_thousands(contract.open_interest),
    )
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
