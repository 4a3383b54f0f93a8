use crate::game::{AgentState, Move};
use crate::scoring::DistanceTable;

pub trait BasePlayer {
    fn decide(&self, state: &AgentState, distances: &DistanceTable) -> Move;
}
