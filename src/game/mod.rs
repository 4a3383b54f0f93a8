pub mod action;
pub mod ledger;
pub mod state;

pub use action::{Move, route_rivers};
pub use ledger::ClaimLedger;
pub use state::{AgentState, StateError};
