//! Contract selection: liquidity, moneyness and delta filters, then ranking
//! by distance to the target expiration.

use std::cmp::Reverse;

use crate::models::{Direction, OptionContract};

use super::chain::OptionsChain;

pub const MIN_OPEN_INTEREST: u64 = 100;
pub const MIN_VOLUME: u64 = 20;
pub const MIN_ABS_DELTA: f64 = 0.60;
pub const MAX_ABS_DELTA: f64 = 0.70;
pub const TARGET_DTE: i64 = 75;

pub struct ContractSelector;

impl ContractSelector {
    /// In the money, liquid enough, and inside the delta band for the side
    /// (`[0.60, 0.70]` for calls, `[-0.70, -0.60]` for puts).
    pub fn is_eligible(contract: &OptionContract, direction: Direction) -> bool {
        if !contract.in_the_money {
            return false;
        }
        if contract.open_interest < MIN_OPEN_INTEREST || contract.volume < MIN_VOLUME {
            return false;
        }
        match direction {
            Direction::Long => (MIN_ABS_DELTA..=MAX_ABS_DELTA).contains(&contract.delta),
            Direction::Short => (-MAX_ABS_DELTA..=-MIN_ABS_DELTA).contains(&contract.delta),
        }
    }

    /// Pick the eligible contract closest to the 75-day target, preferring
    /// higher volume on ties. Remaining ties keep input order.
    pub fn select<'a, I>(contracts: I, direction: Direction) -> Option<OptionContract>
    where
        I: IntoIterator<Item = &'a OptionContract>,
    {
        contracts
            .into_iter()
            .filter(|c| Self::is_eligible(c, direction))
            // min_by_key returns the first of equal minima
            .min_by_key(|c| ((c.days_to_expiration - TARGET_DTE).abs(), Reverse(c.volume)))
            .cloned()
    }

    /// Select from the side of the chain matching `direction`. An empty side
    /// or an empty filtered set both give `None`.
    pub fn select_from_chain(chain: &OptionsChain, direction: Direction) -> Option<OptionContract> {
        Self::select(chain.contracts(direction.contract_type()), direction)
    }
}
