mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use punter_rs::{ClaimLedger, River};

#[test]
fn insert_updates_player_and_union() {
    let mut ledger = ClaimLedger::new(2);
    assert!(ledger.insert(0, River::new(1, 0)));
    assert!(ledger.insert(1, River::new(2, 3)));

    assert!(ledger.owns(0, &River::new(0, 1)));
    assert!(!ledger.owns(1, &River::new(0, 1)));
    assert!(ledger.is_claimed(&River::new(3, 2)));
    assert_eq!(ledger.all_claims().len(), 2);
}

#[test]
fn insert_is_idempotent() {
    let mut ledger = ClaimLedger::new(1);
    ledger.insert(0, River::new(4, 5));
    let before = ledger.clone();
    ledger.insert(0, River::new(5, 4));
    assert_eq!(ledger, before);
}

#[test]
fn out_of_range_players_are_ignored() {
    let mut ledger = ClaimLedger::new(2);
    assert!(!ledger.insert(2, River::new(0, 1)));
    assert!(!ledger.insert(-1, River::new(0, 1)));
    assert!(ledger.all_claims().is_empty());
    assert!(ledger.claims(5).is_none());
    assert!(ledger.sites_reached(-1).is_empty());
}

#[test]
fn sites_reached_are_claim_endpoints() {
    let mut ledger = ClaimLedger::new(1);
    ledger.insert(0, River::new(0, 1));
    ledger.insert(0, River::new(1, 2));
    ledger.insert(0, River::new(7, 8));
    assert_eq!(ledger.sites_reached(0), BTreeSet::from([0, 1, 2, 7, 8]));
}

#[test]
fn from_claims_rebuilds_union() {
    let ledger = ClaimLedger::from_claims(vec![
        BTreeSet::from([River::new(0, 1)]),
        BTreeSet::new(),
        BTreeSet::from([River::new(2, 3), River::new(0, 1)]),
    ]);
    assert_eq!(ledger.player_count(), 3);
    assert_eq!(
        ledger.all_claims(),
        &BTreeSet::from([River::new(0, 1), River::new(2, 3)])
    );
}

#[test]
fn with_claim_leaves_original_untouched() {
    let ledger = ClaimLedger::new(1);
    let next = ledger.with_claim(0, River::new(0, 1));
    assert!(ledger.all_claims().is_empty());
    assert!(next.owns(0, &River::new(0, 1)));
}

proptest! {
    #[test]
    fn union_matches_player_sets(
        inserts in prop::collection::vec((-1i32..4, 0u32..12, 0u32..12), 0..60)
    ) {
        let mut ledger = ClaimLedger::new(3);
        for (player, a, b) in inserts {
            ledger.insert(player, River::new(a, b));
        }
        let union: BTreeSet<River> = ledger.per_player().iter().flatten().copied().collect();
        prop_assert_eq!(ledger.all_claims(), &union);
    }
}
