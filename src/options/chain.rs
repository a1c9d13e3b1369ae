//! Options chain snapshot: expiration -> strike -> contracts.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::ProviderError;
use crate::models::{ContractType, Direction, OptionContract};

/// Nearest expiration considered, in days from today.
pub const MIN_EXPIRATION_DAYS: i64 = 45;
/// Farthest expiration considered, in days from today.
pub const MAX_EXPIRATION_DAYS: i64 = 120;
/// Strikes requested around the money.
pub const STRIKE_COUNT: u32 = 20;

/// Contracts keyed by expiration label, then strike label, in provider order.
pub type ExpirationMap = IndexMap<String, IndexMap<String, Vec<OptionContract>>>;

/// What to ask the chain provider for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRequest {
    pub ticker: String,
    pub contract_type: ContractType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub strike_count: u32,
}

impl ChainRequest {
    /// Calls for LONG, puts for SHORT, expiring within
    /// `[today + 45d, today + 120d]`.
    pub fn new(ticker: &str, direction: Direction, today: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            contract_type: direction.contract_type(),
            from_date: today + Duration::days(MIN_EXPIRATION_DAYS),
            to_date: today + Duration::days(MAX_EXPIRATION_DAYS),
            strike_count: STRIKE_COUNT,
        }
    }
}

/// Read-only chain snapshot used for one selection decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsChain {
    pub underlying: String,
    pub calls: ExpirationMap,
    pub puts: ExpirationMap,
}

impl OptionsChain {
    pub fn side(&self, contract_type: ContractType) -> &ExpirationMap {
        match contract_type {
            ContractType::Call => &self.calls,
            ContractType::Put => &self.puts,
        }
    }

    /// All contracts of one side, flattened in chain order.
    pub fn contracts(&self, contract_type: ContractType) -> impl Iterator<Item = &OptionContract> {
        self.side(contract_type)
            .values()
            .flat_map(|strikes| strikes.values())
            .flatten()
    }
}

/// Wire envelope returned by the brokerage chains endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub call_exp_date_map: IndexMap<String, IndexMap<String, Vec<RawContract>>>,
    #[serde(default)]
    pub put_exp_date_map: IndexMap<String, IndexMap<String, Vec<RawContract>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContract {
    #[serde(default)]
    pub symbol: Option<String>,
    pub strike_price: f64,
    /// Epoch milliseconds.
    pub expiration_date: i64,
    pub days_to_expiration: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub delta: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volatility: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub open_interest: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_volume: f64,
    #[serde(default)]
    pub in_the_money: bool,
}

/// Illiquid contracts quote greeks as `"NaN"`. Strings and nulls decode to
/// NaN so one such row cannot sink the chain.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => value,
        Some(NumberOrText::Text(text)) => text.trim().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}

impl RawContract {
    fn into_contract(self) -> Result<OptionContract, ProviderError> {
        let expiration = DateTime::<Utc>::from_timestamp_millis(self.expiration_date)
            .ok_or_else(|| {
                ProviderError::Decode(format!("invalid expiration {}", self.expiration_date))
            })?;

        Ok(OptionContract {
            symbol: self.symbol,
            strike: self.strike_price,
            expiration,
            days_to_expiration: self.days_to_expiration,
            delta: self.delta,
            implied_volatility: self.volatility,
            open_interest: self.open_interest.max(0.0) as u64,
            volume: self.total_volume.max(0.0) as u64,
            in_the_money: self.in_the_money,
        })
    }
}

fn convert_map(
    raw: IndexMap<String, IndexMap<String, Vec<RawContract>>>,
) -> Result<ExpirationMap, ProviderError> {
    raw.into_iter()
        .map(|(expiration, strikes)| {
            let strikes = strikes
                .into_iter()
                .map(|(strike, contracts)| {
                    let contracts = contracts
                        .into_iter()
                        .map(RawContract::into_contract)
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok((strike, contracts))
                })
                .collect::<Result<IndexMap<_, _>, ProviderError>>()?;
            Ok((expiration, strikes))
        })
        .collect()
}

impl ChainResponse {
    /// Validate the envelope and convert it. Anything but `"SUCCESS"` is an
    /// API error.
    pub fn into_chain(self, ticker: &str) -> Result<OptionsChain, ProviderError> {
        match self.status.as_deref() {
            Some("SUCCESS") => {}
            other => {
                return Err(ProviderError::Api(format!(
                    "chain status {}",
                    other.unwrap_or("missing")
                )))
            }
        }

        Ok(OptionsChain {
            underlying: self.symbol.unwrap_or_else(|| ticker.to_string()),
            calls: convert_map(self.call_exp_date_map)?,
            puts: convert_map(self.put_exp_date_map)?,
        })
    }
}
