use crate::game::{AgentState, Move};
use crate::players::{BasePlayer, GreedyPlayer, RandomMinesPlayer, RandomPlayer};
use crate::scoring::DistanceTable;

pub struct CliPlayer {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_PLAYERS: &[CliPlayer] = &[
    CliPlayer {
        code: "G",
        name: "GreedyPlayer",
        description: "Claims the river next to its network or a mine that raises its score the most.",
    },
    CliPlayer {
        code: "R",
        name: "RandomPlayer",
        description: "Claims a random free river anywhere on the map.",
    },
    CliPlayer {
        code: "M",
        name: "RandomMinesPlayer",
        description: "Claims a random free river at the ring nearest the mines along its own network.",
    },
];

#[derive(Clone)]
pub enum PlayerInstance {
    Greedy(GreedyPlayer),
    Random(RandomPlayer),
    RandomMines(RandomMinesPlayer),
}

impl BasePlayer for PlayerInstance {
    fn decide(&self, state: &AgentState, distances: &DistanceTable) -> Move {
        match self {
            PlayerInstance::Greedy(p) => p.decide(state, distances),
            PlayerInstance::Random(p) => p.decide(state, distances),
            PlayerInstance::RandomMines(p) => p.decide(state, distances),
        }
    }
}

pub fn create_player(code: &str) -> Option<PlayerInstance> {
    match code.to_ascii_uppercase().as_str() {
        "G" => Some(PlayerInstance::Greedy(GreedyPlayer)),
        "R" => Some(PlayerInstance::Random(RandomPlayer)),
        "M" => Some(PlayerInstance::RandomMines(RandomMinesPlayer)),
        _ => None,
    }
}

pub fn print_player_help() {
    println!("Player Legend:");
    println!("{:<5} {:<25} {}", "CODE", "PLAYER", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for player in CLI_PLAYERS {
        println!("{:<5} {:<25} {}", player.code, player.name, player.description);
    }
}
