//! Tolerant decoding of server messages.
//!
//! Messages are loose JSON objects whose fields depend on the message kind.
//! A missing field or a field of the wrong JSON type is never an error here:
//! each helper reports the miss as a [`DecodeDefault`] and the caller swaps
//! in the documented default (0 for integers, -1 for player ids, empty for
//! lists, off for extension flags).

use std::collections::BTreeSet;

use log::{debug, warn};
use serde_json::Value;

use crate::board::Board;
use crate::game::{AgentState, ClaimLedger, Move};
use crate::types::{
    Extension, Extensions, MAX_PLAYERS, PlayerId, River, SiteId, UNKNOWN_PLAYER,
};

use super::message::{ServerMessage, Setup};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeDefault {
    #[error("field `{0}` is missing")]
    Missing(&'static str),
    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

fn field<'a>(obj: &'a Value, name: &'static str) -> Result<&'a Value, DecodeDefault> {
    obj.get(name).ok_or(DecodeDefault::Missing(name))
}

fn nested<'a>(obj: &'a Value, name: &'static str) -> Result<&'a Value, DecodeDefault> {
    let value = field(obj, name)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(DecodeDefault::WrongType {
            field: name,
            expected: "an object",
        })
    }
}

fn int(obj: &Value, name: &'static str) -> Result<i64, DecodeDefault> {
    let value = field(obj, name)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .ok_or(DecodeDefault::WrongType {
            field: name,
            expected: "an integer",
        })
}

fn int_as<T: TryFrom<i64>>(obj: &Value, name: &'static str) -> Result<T, DecodeDefault> {
    T::try_from(int(obj, name)?).map_err(|_| DecodeDefault::WrongType {
        field: name,
        expected: "an integer in range",
    })
}

/// Booleans, or numbers read as `!= 0`.
fn flag(obj: &Value, name: &'static str) -> Result<bool, DecodeDefault> {
    let value = field(obj, name)?;
    if let Some(b) = value.as_bool() {
        return Ok(b);
    }
    value
        .as_f64()
        .map(|n| n != 0.0)
        .ok_or(DecodeDefault::WrongType {
            field: name,
            expected: "a boolean",
        })
}

fn string(obj: &Value, name: &'static str) -> Result<String, DecodeDefault> {
    field(obj, name)?
        .as_str()
        .map(str::to_owned)
        .ok_or(DecodeDefault::WrongType {
            field: name,
            expected: "a string",
        })
}

fn array<'a>(obj: &'a Value, name: &'static str) -> Result<&'a [Value], DecodeDefault> {
    field(obj, name)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(DecodeDefault::WrongType {
            field: name,
            expected: "an array",
        })
}

fn player(obj: &Value, name: &'static str, default: PlayerId) -> PlayerId {
    int_as(obj, name).unwrap_or(default)
}

/// Counts above [`MAX_PLAYERS`] are treated like a mistyped field.
fn player_count(obj: &Value, name: &'static str) -> u32 {
    let count = int_as(obj, name).and_then(|count: u32| {
        if count <= MAX_PLAYERS {
            Ok(count)
        } else {
            Err(DecodeDefault::WrongType {
                field: name,
                expected: "a plausible player count",
            })
        }
    });
    count.unwrap_or_else(|miss| {
        if matches!(miss, DecodeDefault::WrongType { .. }) {
            warn!("{miss}, assuming no players");
        }
        0
    })
}

/// Non-numeric and out-of-range entries are skipped.
fn site_list(values: &[Value]) -> Vec<SiteId> {
    values
        .iter()
        .filter_map(Value::as_i64)
        .filter_map(|n| SiteId::try_from(n).ok())
        .collect()
}

/// `[[a, b], ...]` pairs; entries that are not arrays of two sites are skipped.
fn river_list(values: &[Value]) -> Vec<River> {
    values
        .iter()
        .filter_map(Value::as_array)
        .filter_map(|pair| match site_list(pair).as_slice() {
            [a, b, ..] => Some(River::new(*a, *b)),
            _ => None,
        })
        .collect()
}

fn river_set(obj: &Value, name: &'static str) -> BTreeSet<River> {
    array(obj, name)
        .map(|values| river_list(values).into_iter().collect())
        .unwrap_or_default()
}

fn endpoints(obj: &Value) -> River {
    River::new(
        int_as(obj, "source").unwrap_or(0),
        int_as(obj, "target").unwrap_or(0),
    )
}

/// Parses a frame body. Invalid JSON decodes as [`ServerMessage::Null`].
pub fn decode_bytes(body: &[u8]) -> ServerMessage {
    match serde_json::from_slice::<Value>(body) {
        Ok(packet) => decode_message(&packet),
        Err(err) => {
            warn!("message body is not JSON: {err}");
            ServerMessage::Null
        }
    }
}

pub fn decode_message(packet: &Value) -> ServerMessage {
    let message = if packet.get("you").is_some() {
        ServerMessage::You {
            name: string(packet, "you").unwrap_or_default(),
        }
    } else if packet.get("map").is_some() {
        ServerMessage::Setup(decode_setup(packet))
    } else if packet.get("move").is_some() {
        ServerMessage::Move {
            moves: decode_moves(packet, "move"),
            state: decode_state(packet),
        }
    } else if packet.get("stop").is_some() {
        ServerMessage::Stop {
            moves: decode_moves(packet, "stop"),
            state: decode_state(packet),
        }
    } else if packet.get("me").is_some() {
        ServerMessage::Me
    } else {
        ServerMessage::Null
    };
    debug!("decoded {} message", message.tag());
    message
}

fn decode_setup(packet: &Value) -> Setup {
    Setup {
        punter: player(packet, "punter", UNKNOWN_PLAYER),
        punters: player_count(packet, "punters"),
        board: nested(packet, "map").map(decode_setup_map).unwrap_or_default(),
        settings: nested(packet, "settings")
            .map(decode_settings)
            .unwrap_or_default(),
        state: decode_state(packet),
    }
}

/// The setup map, with `{"id": n}` sites and `{"source", "target"}` rivers.
fn decode_setup_map(map: &Value) -> Board {
    let sites: Vec<SiteId> = array(map, "sites")
        .map(|values| {
            values
                .iter()
                .map(|site| int_as(site, "id").unwrap_or(0))
                .collect()
        })
        .unwrap_or_default();
    let mines = array(map, "mines").map(site_list).unwrap_or_default();
    let rivers: Vec<River> = array(map, "rivers")
        .map(|values| values.iter().map(endpoints).collect())
        .unwrap_or_default();
    Board::new(sites, mines, rivers)
}

fn decode_settings(settings: &Value) -> Extensions {
    let named = [
        ("futures", Extension::Futures),
        ("splurges", Extension::Splurges),
        ("options", Extension::Options),
    ];
    named
        .into_iter()
        .filter(|(name, _)| flag(settings, *name).unwrap_or(false))
        .map(|(_, ext)| ext)
        .collect()
}

fn decode_moves(packet: &Value, name: &'static str) -> Vec<Move> {
    nested(packet, name)
        .and_then(|body| array(body, "moves"))
        .map(|moves| moves.iter().filter_map(decode_move).collect())
        .unwrap_or_default()
}

/// Objects carrying none of the known move keys decode to `None`.
pub fn decode_move(value: &Value) -> Option<Move> {
    if let Some(body) = value.get("pass") {
        Some(Move::Pass {
            punter: player(body, "punter", 0),
        })
    } else if let Some(body) = value.get("claim") {
        Some(Move::Claim {
            punter: player(body, "punter", 0),
            river: endpoints(body),
        })
    } else if let Some(body) = value.get("splurge") {
        Some(Move::Splurge {
            punter: player(body, "punter", 0),
            route: array(body, "route").map(site_list).unwrap_or_default(),
        })
    } else if let Some(body) = value.get("option") {
        Some(Move::Option {
            punter: player(body, "punter", 0),
            river: endpoints(body),
        })
    } else {
        None
    }
}

/// Rebuilds the agent state from the `state` field of `packet`.
pub fn decode_state(packet: &Value) -> AgentState {
    match nested(packet, "state") {
        Ok(state) => decode_state_blob(state),
        Err(miss) => {
            debug!("no usable state: {miss}");
            AgentState::default()
        }
    }
}

pub fn decode_state_blob(state: &Value) -> AgentState {
    let players = player_count(state, "players");
    let board = nested(state, "map")
        .map(|map| {
            Board::new(
                array(map, "sites").map(site_list).unwrap_or_default(),
                array(map, "mines").map(site_list).unwrap_or_default(),
                river_set(map, "rivers"),
            )
        })
        .unwrap_or_default();

    let mut claims = vec![BTreeSet::new(); players as usize];
    if let Ok(per_player) = array(state, "claims") {
        for (owned, value) in claims.iter_mut().zip(per_player) {
            if let Some(pairs) = value.as_array() {
                *owned = river_list(pairs).into_iter().collect();
            }
        }
    }

    let score = array(state, "score")
        .map(|values| values.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    AgentState {
        me: player(state, "me", UNKNOWN_PLAYER),
        players,
        board,
        extensions: Extensions::from_bits(int(state, "ext").unwrap_or(0)),
        options_available: int_as(state, "opts").unwrap_or(0),
        options_taken: river_set(state, "options"),
        ledger: ClaimLedger::from_claims(claims),
        score,
    }
}
