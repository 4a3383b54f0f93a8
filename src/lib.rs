#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod agent;
pub mod board;
pub mod cli;
pub mod game;
pub mod players;
pub mod protocol;
pub mod scoring;
pub mod types;

pub use agent::{Agent, AgentConfig, AgentError, AgentPhase};
pub use board::Board;
pub use game::{AgentState, ClaimLedger, Move};
pub use protocol::{Response, ServerMessage};
pub use scoring::{DistanceTable, score};
pub use types::{Extension, Extensions, PlayerId, River, SiteId, canonicalize};
