use log::debug;
use serde_json::{Value, json};

use crate::game::AgentState;
use crate::types::{Extension, PlayerId, River};

use super::envelope;
use super::message::Response;

fn river_pairs<'a>(rivers: impl IntoIterator<Item = &'a River>) -> Value {
    rivers
        .into_iter()
        .map(|river| json!([river.source(), river.target()]))
        .collect()
}

fn river_move(punter: PlayerId, river: &River) -> Value {
    json!({
        "punter": punter,
        "source": river.source(),
        "target": river.target(),
    })
}

/// The compact state blob round-tripped through the server each turn.
pub fn encode_state(state: &AgentState) -> Value {
    let claims: Vec<Value> = state
        .ledger
        .per_player()
        .iter()
        .map(|owned| river_pairs(owned))
        .collect();

    let mut blob = json!({
        "me": state.me,
        "players": state.players,
        "map": {
            "sites": state.board.sites,
            "mines": state.board.mines,
            "rivers": river_pairs(&state.board.rivers),
        },
        "claims": claims,
        "score": state.score,
        "ext": state.extensions.bits(),
    });
    if state.uses(Extension::Options) {
        blob["opts"] = json!(state.options_available);
        blob["options"] = river_pairs(&state.options_taken);
    }
    blob
}

pub fn encode_response(response: &Response) -> Value {
    match response {
        Response::Me { name } => json!({ "me": name }),
        Response::Ready { punter, state } => json!({
            "ready": punter,
            "state": encode_state(state),
        }),
        Response::Pass { punter, state } => json!({
            "pass": { "punter": punter },
            "state": encode_state(state),
        }),
        Response::Claim {
            punter,
            river,
            state,
        } => json!({
            "claim": river_move(*punter, river),
            "state": encode_state(state),
        }),
        Response::Splurge {
            punter,
            route,
            state,
        } => json!({
            "splurge": { "punter": punter, "route": route },
            "state": encode_state(state),
        }),
        Response::Option {
            punter,
            river,
            state,
        } => json!({
            "option": river_move(*punter, river),
            "state": encode_state(state),
        }),
    }
}

/// Framed bytes for `response`; no response means no bytes at all.
pub fn to_frame(response: Option<&Response>) -> Vec<u8> {
    match response {
        Some(response) => {
            debug!("encoding {} response", response.tag());
            envelope::encode(&encode_response(response).to_string())
        }
        None => Vec::new(),
    }
}
