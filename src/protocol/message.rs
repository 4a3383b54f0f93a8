use crate::board::Board;
use crate::game::{AgentState, Move};
use crate::types::{Extensions, PlayerId, River, SiteId};

/// Game description sent once before the first move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub punter: PlayerId,
    pub punters: u32,
    pub board: Board,
    pub settings: Extensions,
    /// State fragment attached to the setup, if any. Only logged: the fresh
    /// state is always rebuilt from the fields above.
    pub state: AgentState,
}

/// A decoded server-to-agent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// Nothing recognisable was received.
    Null,
    Me,
    You { name: String },
    Setup(Setup),
    Move { moves: Vec<Move>, state: AgentState },
    Stop { moves: Vec<Move>, state: AgentState },
}

impl ServerMessage {
    pub fn tag(&self) -> &'static str {
        match self {
            ServerMessage::Null => "null",
            ServerMessage::Me => "me",
            ServerMessage::You { .. } => "you",
            ServerMessage::Setup(_) => "setup",
            ServerMessage::Move { .. } => "move",
            ServerMessage::Stop { .. } => "stop",
        }
    }
}

/// An agent-to-server message. Every in-game reply carries the full state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Me {
        name: String,
    },
    Ready {
        punter: PlayerId,
        state: AgentState,
    },
    Pass {
        punter: PlayerId,
        state: AgentState,
    },
    Claim {
        punter: PlayerId,
        river: River,
        state: AgentState,
    },
    Splurge {
        punter: PlayerId,
        route: Vec<SiteId>,
        state: AgentState,
    },
    Option {
        punter: PlayerId,
        river: River,
        state: AgentState,
    },
}

impl Response {
    /// Wraps a chosen move together with the state to hand back.
    pub fn from_move(mv: Move, state: AgentState) -> Self {
        match mv {
            Move::Pass { punter } => Response::Pass { punter, state },
            Move::Claim { punter, river } => Response::Claim {
                punter,
                river,
                state,
            },
            Move::Splurge { punter, route } => Response::Splurge {
                punter,
                route,
                state,
            },
            Move::Option { punter, river } => Response::Option {
                punter,
                river,
                state,
            },
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Response::Me { .. } => "me",
            Response::Ready { .. } => "ready",
            Response::Pass { .. } => "pass",
            Response::Claim { .. } => "claim",
            Response::Splurge { .. } => "splurge",
            Response::Option { .. } => "option",
        }
    }

    pub fn state(&self) -> Option<&AgentState> {
        match self {
            Response::Me { .. } => None,
            Response::Ready { state, .. }
            | Response::Pass { state, .. }
            | Response::Claim { state, .. }
            | Response::Splurge { state, .. }
            | Response::Option { state, .. } => Some(state),
        }
    }
}
