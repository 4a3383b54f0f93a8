use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::sites_on;
use crate::types::{PlayerId, River, SiteId, player_index};

/// Per-player claim sets plus their running union.
///
/// `all_claims` is only ever touched together with one of the per-player
/// sets, so it always equals the union of `claims`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLedger {
    claims: Vec<BTreeSet<River>>,
    all_claims: BTreeSet<River>,
}

impl ClaimLedger {
    pub fn new(players: usize) -> Self {
        Self {
            claims: vec![BTreeSet::new(); players],
            all_claims: BTreeSet::new(),
        }
    }

    pub fn from_claims(claims: Vec<BTreeSet<River>>) -> Self {
        let all_claims = claims.iter().flatten().copied().collect();
        Self { claims, all_claims }
    }

    pub fn player_count(&self) -> usize {
        self.claims.len()
    }

    pub fn contains_player(&self, player: PlayerId) -> bool {
        player_index(player).is_some_and(|idx| idx < self.claims.len())
    }

    /// Records `river` for `player`. Returns `false` and changes nothing when
    /// the player is outside the ledger.
    pub fn insert(&mut self, player: PlayerId, river: River) -> bool {
        let Some(owned) = player_index(player).and_then(|idx| self.claims.get_mut(idx)) else {
            return false;
        };
        owned.insert(river);
        self.all_claims.insert(river);
        true
    }

    pub fn claims(&self, player: PlayerId) -> Option<&BTreeSet<River>> {
        player_index(player).and_then(|idx| self.claims.get(idx))
    }

    pub fn per_player(&self) -> &[BTreeSet<River>] {
        &self.claims
    }

    pub fn all_claims(&self) -> &BTreeSet<River> {
        &self.all_claims
    }

    pub fn is_claimed(&self, river: &River) -> bool {
        self.all_claims.contains(river)
    }

    pub fn owns(&self, player: PlayerId, river: &River) -> bool {
        self.claims(player).is_some_and(|owned| owned.contains(river))
    }

    pub fn sites_reached(&self, player: PlayerId) -> BTreeSet<SiteId> {
        self.claims(player)
            .map(|owned| sites_on(owned))
            .unwrap_or_default()
    }

    /// Copy of the ledger with one extra claim, for what-if scoring.
    pub fn with_claim(&self, player: PlayerId, river: River) -> Self {
        let mut next = self.clone();
        next.insert(player, river);
        next
    }
}
