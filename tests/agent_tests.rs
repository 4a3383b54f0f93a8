mod common;

use std::io::Cursor;

use punter_rs::protocol::envelope;
use punter_rs::protocol::{Response, ServerMessage, decode_bytes, encode_state};
use punter_rs::{
    Agent, AgentConfig, AgentError, AgentPhase, AgentState, Extension, Extensions, Move, River,
};
use serde_json::{Value, json};

use common::{line_board, setup_json, state};

fn greedy_agent() -> Agent {
    Agent::new(AgentConfig::default()).unwrap()
}

fn move_request(moves: Value, state: &AgentState) -> ServerMessage {
    let packet = json!({ "move": { "moves": moves }, "state": encode_state(state) });
    decode_bytes(packet.to_string().as_bytes())
}

fn frames(mut bytes: &[u8]) -> Vec<Value> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let (body, rest) = envelope::decode(bytes).unwrap();
        out.push(serde_json::from_str(body).unwrap());
        bytes = rest;
    }
    out
}

#[test]
fn unknown_player_code_is_rejected() {
    let config = AgentConfig {
        player: "Z".to_string(),
        ..AgentConfig::default()
    };
    assert!(matches!(
        Agent::new(config),
        Err(AgentError::UnknownPlayer(code)) if code == "Z"
    ));
}

#[test]
fn setup_answers_ready_with_fresh_state() {
    let mut agent = greedy_agent();
    assert_eq!(agent.phase(), AgentPhase::AwaitingSetup);

    let response = agent.respond(decode_bytes(setup_json(false).as_bytes()));
    let Some(Response::Ready { punter, state }) = response else {
        panic!("expected ready");
    };
    assert_eq!(punter, 1);
    assert_eq!(state.me, 1);
    assert_eq!(state.ledger.player_count(), 2);
    assert_eq!(state.score, vec![0, 0]);
    assert_eq!(state.options_available, 0);
    assert_eq!(agent.phase(), AgentPhase::AwaitingMove);
}

#[test]
fn setup_with_options_grants_one_per_mine() {
    let mut agent = greedy_agent();
    let response = agent.respond(decode_bytes(setup_json(true).as_bytes()));
    let Some(Response::Ready { state, .. }) = response else {
        panic!("expected ready");
    };
    assert!(state.uses(Extension::Options));
    assert_eq!(state.options_available, 2);
}

#[test]
fn move_applies_reports_then_plays() {
    let mut agent = greedy_agent();
    let before = state(0, 2, line_board());
    let response = agent.respond(move_request(
        json!([{"claim": {"punter": 1, "source": 3, "target": 2}}, {"pass": {"punter": 0}}]),
        &before,
    ));
    let Some(Response::Claim {
        punter,
        river,
        state,
    }) = response
    else {
        panic!("expected claim");
    };
    assert_eq!(punter, 0);
    assert_eq!(river, River::new(0, 1));
    assert!(state.ledger.owns(1, &River::new(2, 3)));
    assert_eq!(state.score, vec![0, 0]);
}

#[test]
fn splurge_reports_claim_the_whole_route() {
    let mut agent = greedy_agent();
    let before = state(0, 2, line_board());
    let response = agent.respond(move_request(
        json!([{"splurge": {"punter": 1, "route": [0, 1, 2, 3]}}]),
        &before,
    ));
    let Some(Response::Pass { state, .. }) = response else {
        panic!("expected pass");
    };
    assert_eq!(state.ledger.claims(1).map(|c| c.len()), Some(3));
    assert_eq!(state.score, vec![0, 1 + 4 + 9]);
}

#[test]
fn option_reports_spend_only_the_movers_budget() {
    let mut agent = greedy_agent();
    let mut before = AgentState::new(
        1,
        3,
        line_board(),
        Extensions::empty().with(Extension::Options),
    );
    before.ledger.insert(0, River::new(0, 1));
    before.ledger.insert(2, River::new(1, 2));

    let response = agent.respond(move_request(
        json!([
            {"option": {"punter": 2, "source": 0, "target": 1}},
            {"option": {"punter": 1, "source": 1, "target": 2}},
        ]),
        &before,
    ));
    let state = response.as_ref().and_then(Response::state).unwrap();
    assert_eq!(state.options_available, 0);
    assert!(state.options_taken.contains(&River::new(0, 1)));
    assert!(state.options_taken.contains(&River::new(1, 2)));
    assert!(state.ledger.owns(2, &River::new(0, 1)));
    assert!(state.ledger.owns(1, &River::new(1, 2)));
}

#[test]
fn moves_by_unknown_players_are_dropped() {
    let mut agent = greedy_agent();
    let before = state(0, 2, line_board());
    let response = agent.respond(move_request(
        json!([{"claim": {"punter": 9, "source": 0, "target": 1}}]),
        &before,
    ));
    let state = response.as_ref().and_then(Response::state).unwrap();
    assert!(state.ledger.all_claims().is_empty());
}

#[test]
fn stop_sends_nothing() {
    let mut agent = greedy_agent();
    let message = ServerMessage::Stop {
        moves: vec![Move::pass(0)],
        state: state(0, 2, line_board()),
    };
    assert!(agent.respond(message).is_none());
    assert_eq!(agent.phase(), AgentPhase::Stopped);
}

#[test]
fn fresh_agent_answers_a_move_without_setup() {
    let mut agent = greedy_agent();
    assert_eq!(agent.phase(), AgentPhase::AwaitingSetup);
    let response = agent.respond(move_request(json!([]), &state(0, 1, line_board())));
    assert!(matches!(response, Some(Response::Claim { punter: 0, .. })));
    assert_eq!(agent.phase(), AgentPhase::AwaitingMove);
}

#[test]
fn setup_ignores_attached_state_fragment() {
    let mut packet: Value = serde_json::from_str(&setup_json(false)).unwrap();
    packet["state"] = encode_state(&state(5, 9, line_board()));
    let response = greedy_agent().respond(decode_bytes(packet.to_string().as_bytes()));
    let Some(Response::Ready { punter, state }) = response else {
        panic!("expected ready");
    };
    assert_eq!(punter, 1);
    assert_eq!(state.players, 2);
    assert_eq!(state.ledger.player_count(), 2);
}

#[test]
fn null_message_passes() {
    let mut agent = greedy_agent();
    let response = agent.respond(ServerMessage::Null);
    assert!(matches!(response, Some(Response::Pass { punter: -1, .. })));
    assert_eq!(agent.phase(), AgentPhase::AwaitingSetup);
}

#[test]
fn session_handshakes_then_answers_once() {
    let mut input = envelope::encode(r#"{"you":"punter-rs"}"#);
    let request = json!({
        "move": {"moves": []},
        "state": encode_state(&state(0, 1, line_board())),
    });
    input.extend(envelope::encode(&request.to_string()));

    let mut output = Vec::new();
    greedy_agent()
        .run_session(&mut Cursor::new(input), &mut output)
        .unwrap();

    let sent = frames(&output);
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], json!({"me": "punter-rs"}));
    assert_eq!(sent[1]["claim"], json!({"punter": 0, "source": 0, "target": 1}));
    assert_eq!(sent[1]["state"]["score"], json!([0]));
}

#[test]
fn session_answers_garbage_with_pass() {
    let mut input = envelope::encode(r#"{"you":"x"}"#);
    input.extend_from_slice(b"oops");
    let mut output = Vec::new();
    greedy_agent()
        .run_session(&mut Cursor::new(input), &mut output)
        .unwrap();

    let sent = frames(&output);
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1]["pass"], json!({"punter": -1}));
}

#[test]
fn session_answers_oversized_length_prefix_with_pass() {
    let mut input = envelope::encode(r#"{"you":"x"}"#);
    input.extend_from_slice(b"9999999999:{}");
    let mut output = Vec::new();
    greedy_agent()
        .run_session(&mut Cursor::new(input), &mut output)
        .unwrap();

    let sent = frames(&output);
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1]["pass"], json!({"punter": -1}));
}

#[test]
fn setup_with_huge_punter_count_still_gets_ready() {
    let packet = json!({
        "punter": 0,
        "punters": 4_000_000_000u64,
        "map": {"sites": [{"id": 0}, {"id": 1}], "mines": [0], "rivers": [{"source": 0, "target": 1}]},
    });
    let mut agent = greedy_agent();
    let response = agent.respond(decode_bytes(packet.to_string().as_bytes()));
    let Some(Response::Ready { punter, state }) = response else {
        panic!("expected ready");
    };
    assert_eq!(punter, 0);
    assert_eq!(state.players, 0);
    assert!(state.score.is_empty());
}

#[test]
fn session_is_silent_after_stop() {
    let mut input = envelope::encode(r#"{"you":"x"}"#);
    let stop = json!({"stop": {"moves": []}, "state": encode_state(&state(0, 1, line_board()))});
    input.extend(envelope::encode(&stop.to_string()));
    let mut output = Vec::new();
    greedy_agent()
        .run_session(&mut Cursor::new(input), &mut output)
        .unwrap();

    assert_eq!(frames(&output), vec![json!({"me": "punter-rs"})]);
}
