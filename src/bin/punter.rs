use std::io::{self, BufReader};

use clap::Parser;
use env_logger::Env;
use log::error;
use punter_rs::cli::print_player_help;
use punter_rs::{Agent, AgentConfig};

#[derive(Debug, Parser, Clone)]
#[command(name = "punter")]
#[command(about = "Plays one turn of a punting game over stdin/stdout")]
struct Args {
    /// Name announced to the server in the handshake
    #[arg(long, default_value = punter_rs::agent::DEFAULT_NAME)]
    name: String,

    /// Player code (G=Greedy, R=Random, M=RandomMines)
    #[arg(short = 'p', long, default_value = "G")]
    player: String,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,
}

fn main() {
    let args = Args::parse();

    if args.help_players {
        print_player_help();
        return;
    }

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = AgentConfig {
        name: args.name,
        player: args.player,
    };
    let mut agent = match Agent::new(config) {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Use --help-players to see available codes");
            std::process::exit(1);
        }
    };

    let mut reader = BufReader::new(io::stdin().lock());
    let mut writer = io::stdout().lock();
    if let Err(err) = agent.run_session(&mut reader, &mut writer) {
        error!("session failed: {err}");
        std::process::exit(1);
    }
}
