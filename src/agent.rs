use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cli::{PlayerInstance, create_player};
use crate::game::{AgentState, Move};
use crate::players::BasePlayer;
use crate::protocol::{
    FrameError, Response, ServerMessage, Setup, decode_bytes, encode_response, read_frame,
    write_frame,
};
use crate::scoring::DistanceTable;

pub const DEFAULT_NAME: &str = "punter-rs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name announced in the handshake.
    pub name: String,
    /// Strategy code, see `cli::CLI_PLAYERS`.
    pub player: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            player: "G".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("unknown player code '{0}'")]
    UnknownPlayer(String),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Where the exchange stands, for logging only.
///
/// Each process answers a single request and starts in `AwaitingSetup`, so a
/// `Move` normally arrives in that phase. The phase never gates handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    AwaitingSetup,
    AwaitingMove,
    Stopped,
}

impl AgentPhase {
    /// Phase reached once `message` has been handled.
    pub fn after(self, message: &ServerMessage) -> Self {
        match message {
            ServerMessage::Setup(_) | ServerMessage::Move { .. } => AgentPhase::AwaitingMove,
            ServerMessage::Stop { .. } => AgentPhase::Stopped,
            ServerMessage::Null | ServerMessage::Me | ServerMessage::You { .. } => self,
        }
    }
}

/// Handles one handshake-plus-request exchange.
///
/// The agent holds no game memory of its own: every request carries the
/// state it needs and every response carries it back out.
pub struct Agent {
    config: AgentConfig,
    player: PlayerInstance,
    phase: AgentPhase,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let player = create_player(&config.player)
            .ok_or_else(|| AgentError::UnknownPlayer(config.player.clone()))?;
        Ok(Self {
            config,
            player,
            phase: AgentPhase::AwaitingSetup,
        })
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn handshake(&self) -> Response {
        Response::Me {
            name: self.config.name.clone(),
        }
    }

    /// Reply to one decoded request, or `None` when no reply is expected.
    pub fn respond(&mut self, message: ServerMessage) -> Option<Response> {
        let next_phase = self.phase.after(&message);
        let response = match message {
            ServerMessage::Setup(setup) => Some(self.setup(setup)),
            ServerMessage::Move { moves, state } => Some(self.gameplay(&moves, state)),
            ServerMessage::Stop { state, .. } => {
                self.stop(&state);
                None
            }
            ServerMessage::Me | ServerMessage::You { .. } => None,
            ServerMessage::Null => {
                let state = AgentState::default();
                Some(Response::Pass {
                    punter: state.me,
                    state,
                })
            }
        };
        if next_phase != self.phase {
            debug!("phase {:?} -> {next_phase:?}", self.phase);
        }
        self.phase = next_phase;
        response
    }

    fn setup(&self, setup: Setup) -> Response {
        if setup.state != AgentState::default() {
            debug!("ignoring state fragment sent with setup for punter {}", setup.state.me);
        }
        let state = AgentState::new(setup.punter, setup.punters, setup.board, setup.settings);
        info!(
            "setup: punter {} of {}, {} sites, {} mines, {} rivers, extensions {}",
            state.me,
            state.players,
            state.board.sites.len(),
            state.board.mines.len(),
            state.board.rivers.len(),
            state.extensions
        );
        Response::Ready {
            punter: state.me,
            state,
        }
    }

    fn gameplay(&self, moves: &[Move], mut state: AgentState) -> Response {
        for mv in moves {
            if let Err(err) = state.apply(mv) {
                warn!("dropping {mv:?}: {err}");
            }
        }

        let distances = DistanceTable::global(&state.board);
        state.rescore(&distances);
        debug!("scores {:?}", state.score);

        let choice = self.player.decide(&state, &distances);
        info!("punter {} plays {choice:?}", state.me);
        Response::from_move(choice, state)
    }

    fn stop(&self, state: &AgentState) {
        info!("game over, scores {:?}", state.score);
    }

    /// Sends `me`, discards the reply, then answers exactly one request.
    ///
    /// A request that cannot be framed is answered as if it were empty, so
    /// the server always hears back. Only write failures are returned.
    pub fn run_session<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), AgentError> {
        write_frame(writer, &encode_response(&self.handshake()).to_string())?;
        if let Err(err) = read_frame(reader) {
            warn!("handshake reply: {err}");
        }

        let message = match read_frame(reader) {
            Ok(body) => decode_bytes(body.as_bytes()),
            Err(err) => {
                warn!("request: {err}");
                ServerMessage::Null
            }
        };

        if let Some(response) = self.respond(message) {
            debug!("sending {} response", response.tag());
            write_frame(writer, &encode_response(&response).to_string())?;
        }
        Ok(())
    }
}
