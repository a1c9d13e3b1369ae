//! Unit tests for contract selection

use crate::fixtures::contract;
use indexmap::IndexMap;
use optiscan::models::{Direction, OptionContract};
use optiscan::options::{ContractSelector, OptionsChain};

fn chain_of(calls: Vec<OptionContract>, puts: Vec<OptionContract>) -> OptionsChain {
    fn side(contracts: Vec<OptionContract>) -> optiscan::options::ExpirationMap {
        let mut map = IndexMap::new();
        for c in contracts {
            map.entry(format!("exp:{}", c.days_to_expiration))
                .or_insert_with(IndexMap::new)
                .entry(format!("{:.1}", c.strike))
                .or_insert_with(Vec::new)
                .push(c);
        }
        map
    }
    OptionsChain {
        underlying: "AAPL".to_string(),
        calls: side(calls),
        puts: side(puts),
    }
}

#[test]
fn test_closest_to_target_expiration_wins() {
    let contracts = [contract(40, 0.65, 50), contract(75, 0.65, 50), contract(110, 0.65, 50)];
    let chosen = ContractSelector::select(&contracts, Direction::Long).unwrap();
    assert_eq!(chosen.days_to_expiration, 75);
}

#[test]
fn test_volume_breaks_expiration_ties() {
    let contracts = [contract(70, 0.65, 50), contract(70, 0.66, 200)];
    let chosen = ContractSelector::select(&contracts, Direction::Long).unwrap();
    assert_eq!(chosen.volume, 200);
}

#[test]
fn test_equal_distance_on_both_sides_prefers_volume() {
    let contracts = [contract(65, 0.65, 40), contract(85, 0.65, 90)];
    let chosen = ContractSelector::select(&contracts, Direction::Long).unwrap();
    assert_eq!(chosen.days_to_expiration, 85);
}

#[test]
fn test_filters_exclude_illiquid_and_out_of_the_money() {
    let mut otm = contract(75, 0.65, 500);
    otm.in_the_money = false;
    let mut thin_oi = contract(75, 0.65, 500);
    thin_oi.open_interest = 99;
    let thin_volume = contract(75, 0.65, 19);
    let wrong_delta = contract(75, 0.55, 500);

    let contracts = [otm, thin_oi, thin_volume, wrong_delta];
    assert!(ContractSelector::select(&contracts, Direction::Long).is_none());
}

#[test]
fn test_liquidity_floors_are_inclusive() {
    let mut edge = contract(75, 0.65, 20);
    edge.open_interest = 100;
    assert!(ContractSelector::is_eligible(&edge, Direction::Long));
}

#[test]
fn test_put_side_uses_negative_delta_band() {
    let chain = chain_of(
        vec![contract(75, 0.65, 100)],
        vec![contract(60, -0.62, 100), contract(90, -0.75, 100)],
    );
    let chosen = ContractSelector::select_from_chain(&chain, Direction::Short).unwrap();
    assert_eq!(chosen.delta, -0.62);
}

#[test]
fn test_empty_side_selects_nothing() {
    let chain = chain_of(vec![contract(75, 0.65, 100)], vec![]);
    assert!(ContractSelector::select_from_chain(&chain, Direction::Short).is_none());
    assert!(ContractSelector::select_from_chain(&OptionsChain::default(), Direction::Long).is_none());
}
