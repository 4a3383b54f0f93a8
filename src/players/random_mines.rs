use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::board::sites_on;
use crate::game::{AgentState, Move};
use crate::players::BasePlayer;
use crate::scoring::DistanceTable;
use crate::types::{River, SiteId};

/// Grows outward from the mines along our own rivers and claims a random
/// free river at the nearest ring that still has one.
#[derive(Clone)]
pub struct RandomMinesPlayer;

impl RandomMinesPlayer {
    pub fn decide_with_rng(&self, state: &AgentState, rng: &mut impl Rng) -> Move {
        let Some(owned) = state.ledger.claims(state.me) else {
            return Move::pass(state.me);
        };
        let claimed = state.ledger.all_claims();

        let mut visited: HashSet<SiteId> = HashSet::new();
        let mut ring: HashSet<SiteId> = state.board.mines.iter().copied().collect();

        while !ring.is_empty() {
            let rivers = state.board.rivers_touching(&ring);
            if let Some(river) = rivers
                .iter()
                .filter(|river| !claimed.contains(*river))
                .choose(rng)
            {
                return Move::Claim {
                    punter: state.me,
                    river: *river,
                };
            }

            visited.extend(ring.iter().copied());
            let ours: BTreeSet<&River> = rivers.iter().filter(|r| owned.contains(*r)).collect();
            ring = sites_on(ours)
                .into_iter()
                .filter(|site| !visited.contains(site))
                .collect();
        }
        Move::pass(state.me)
    }
}

impl BasePlayer for RandomMinesPlayer {
    fn decide(&self, state: &AgentState, _distances: &DistanceTable) -> Move {
        let mut rng = rand::thread_rng();
        self.decide_with_rng(state, &mut rng)
    }
}
