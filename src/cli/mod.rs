pub mod players;

pub use players::{CLI_PLAYERS, CliPlayer, PlayerInstance, create_player, print_player_help};
