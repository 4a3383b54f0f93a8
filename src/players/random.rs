use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::{AgentState, Move};
use crate::players::BasePlayer;
use crate::scoring::DistanceTable;

/// Claims any unclaimed river on the board.
#[derive(Clone)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn decide_with_rng(&self, state: &AgentState, rng: &mut impl Rng) -> Move {
        if !state.ledger.contains_player(state.me) {
            return Move::pass(state.me);
        }
        let claimed = state.ledger.all_claims();
        state
            .board
            .rivers
            .iter()
            .filter(|river| !claimed.contains(*river))
            .choose(rng)
            .map(|river| Move::Claim {
                punter: state.me,
                river: *river,
            })
            .unwrap_or_else(|| Move::pass(state.me))
    }
}

impl BasePlayer for RandomPlayer {
    fn decide(&self, state: &AgentState, _distances: &DistanceTable) -> Move {
        let mut rng = rand::thread_rng();
        self.decide_with_rng(state, &mut rng)
    }
}
