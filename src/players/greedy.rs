use std::collections::{BTreeSet, HashSet};

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::sites_on;
use crate::game::{AgentState, Move};
use crate::players::BasePlayer;
use crate::scoring::{DistanceTable, player_score};
use crate::types::{Extension, River, SiteId};

/// One-ply greedy search: take the river that raises our own score the most,
/// breaking ties at random. Passes when nothing improves the score.
#[derive(Clone)]
pub struct GreedyPlayer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub best_score: i64,
    pub ties: Vec<River>,
}

/// Rivers touching a mine or our network that we could still take.
///
/// While we hold option budget, rivers owned by others stay eligible unless
/// someone already optioned them.
pub fn candidate_rivers(state: &AgentState) -> BTreeSet<River> {
    let Some(owned) = state.ledger.claims(state.me) else {
        return BTreeSet::new();
    };

    let mut frontier: HashSet<SiteId> = state.board.mines.iter().copied().collect();
    frontier.extend(sites_on(owned));

    let blocked = if state.can_take_option() {
        &state.options_taken
    } else {
        state.ledger.all_claims()
    };

    state
        .board
        .rivers_touching(&frontier)
        .into_iter()
        .filter(|river| !owned.contains(river) && !blocked.contains(river))
        .collect()
}

/// Scores each candidate as if we had claimed it and keeps every river that
/// reaches the best score seen.
pub fn evaluate_candidates(
    state: &AgentState,
    distances: &DistanceTable,
    candidates: &BTreeSet<River>,
) -> Evaluation {
    let owned = state.ledger.claims(state.me).cloned().unwrap_or_default();
    let mut evaluation = Evaluation::default();

    for river in candidates {
        let mut hypothetical = owned.clone();
        hypothetical.insert(*river);
        let new_score = player_score(distances, &state.board, &hypothetical);

        if new_score == evaluation.best_score {
            evaluation.ties.push(*river);
        } else if new_score > evaluation.best_score {
            evaluation.best_score = new_score;
            evaluation.ties = vec![*river];
        }
    }
    evaluation
}

/// Wraps a chosen river as a claim, or as an option when someone already
/// owns it.
pub fn claim_or_option(state: &AgentState, river: River) -> Move {
    if state.uses(Extension::Options) && state.ledger.is_claimed(&river) {
        Move::Option {
            punter: state.me,
            river,
        }
    } else {
        Move::Claim {
            punter: state.me,
            river,
        }
    }
}

impl GreedyPlayer {
    pub fn decide_with_rng(
        &self,
        state: &AgentState,
        distances: &DistanceTable,
        rng: &mut impl Rng,
    ) -> Move {
        let candidates = candidate_rivers(state);
        if candidates.is_empty() {
            return Move::pass(state.me);
        }

        let evaluation = evaluate_candidates(state, distances, &candidates);
        if evaluation.best_score <= state.my_score() {
            return Move::pass(state.me);
        }

        info!(
            "best score {} over {} candidates ({} tied)",
            evaluation.best_score,
            candidates.len(),
            evaluation.ties.len()
        );
        match evaluation.ties.choose(rng) {
            Some(river) => claim_or_option(state, *river),
            None => Move::pass(state.me),
        }
    }
}

impl BasePlayer for GreedyPlayer {
    fn decide(&self, state: &AgentState, distances: &DistanceTable) -> Move {
        let mut rng = rand::thread_rng();
        self.decide_with_rng(state, distances, &mut rng)
    }
}
