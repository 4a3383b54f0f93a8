use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::scoring::{DistanceTable, score_with};
use crate::types::{Extension, Extensions, PlayerId, River, UNKNOWN_PLAYER, player_index};

use super::action::{Move, route_rivers};
use super::ledger::ClaimLedger;

/// Everything the agent knows about the game.
///
/// Rebuilt from the `state` field of every incoming message and written back
/// into every response; nothing else survives between turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub me: PlayerId,
    pub players: u32,
    pub board: Board,
    pub extensions: Extensions,
    pub options_available: u32,
    pub options_taken: BTreeSet<River>,
    pub ledger: ClaimLedger,
    pub score: Vec<i64>,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            me: UNKNOWN_PLAYER,
            players: 0,
            board: Board::default(),
            extensions: Extensions::empty(),
            options_available: 0,
            options_taken: BTreeSet::new(),
            ledger: ClaimLedger::default(),
            score: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid player index {0}")]
    InvalidPlayer(PlayerId),
}

impl AgentState {
    /// Fresh state at setup. With the options extension every player starts
    /// with one option per mine.
    pub fn new(me: PlayerId, players: u32, board: Board, extensions: Extensions) -> Self {
        let options_available = if extensions.contains(Extension::Options) {
            board.mines.len() as u32
        } else {
            0
        };
        Self {
            me,
            players,
            board,
            extensions,
            options_available,
            options_taken: BTreeSet::new(),
            ledger: ClaimLedger::new(players as usize),
            score: vec![0; players as usize],
        }
    }

    pub fn uses(&self, ext: Extension) -> bool {
        self.extensions.contains(ext)
    }

    pub fn can_take_option(&self) -> bool {
        self.uses(Extension::Options) && self.options_available > 0
    }

    pub fn my_score(&self) -> i64 {
        player_index(self.me)
            .and_then(|idx| self.score.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Applies one reported move to the ledger. Moves by players outside the
    /// ledger are rejected without touching anything.
    pub fn apply(&mut self, mv: &Move) -> Result<(), StateError> {
        let punter = mv.punter();
        if mv.is_pass() {
            return Ok(());
        }
        if !self.ledger.contains_player(punter) {
            return Err(StateError::InvalidPlayer(punter));
        }
        match mv {
            Move::Pass { .. } => {}
            Move::Claim { river, .. } => {
                self.ledger.insert(punter, *river);
            }
            Move::Option { river, .. } => {
                self.options_taken.insert(*river);
                if punter == self.me {
                    self.options_available = self.options_available.saturating_sub(1);
                }
                self.ledger.insert(punter, *river);
            }
            Move::Splurge { route, .. } => {
                for river in route_rivers(route) {
                    self.ledger.insert(punter, river);
                }
            }
        }
        debug!("applied {mv:?}");
        Ok(())
    }

    /// Recomputes every player's score from scratch.
    pub fn rescore(&mut self, distances: &DistanceTable) {
        self.score = score_with(distances, &self.board, self.ledger.per_player());
    }
}
