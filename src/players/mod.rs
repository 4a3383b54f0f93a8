pub mod base;
pub mod greedy;
pub mod random;
pub mod random_mines;

pub use base::BasePlayer;
pub use greedy::{Evaluation, GreedyPlayer, candidate_rivers, evaluate_candidates};
pub use random::RandomPlayer;
pub use random_mines::RandomMinesPlayer;
