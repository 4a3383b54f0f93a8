#![allow(dead_code)]

use punter_rs::{AgentState, Board, Extensions, River};

pub fn rivers(pairs: &[(u32, u32)]) -> Vec<River> {
    pairs.iter().map(|(a, b)| River::new(*a, *b)).collect()
}

/// 0 - 1 - 2 - 3 with a mine at 0.
pub fn line_board() -> Board {
    Board::new(vec![0, 1, 2, 3], vec![0], rivers(&[(0, 1), (1, 2), (2, 3)]))
}

/// The eight-site sample map with mines at 1 and 5.
pub fn sample_board() -> Board {
    Board::new(
        vec![4, 1, 3, 6, 5, 0, 7, 2],
        vec![1, 5],
        rivers(&[
            (5, 6),
            (3, 4),
            (1, 7),
            (1, 3),
            (2, 3),
            (4, 5),
            (5, 7),
            (6, 7),
            (0, 7),
            (3, 5),
            (1, 2),
            (0, 1),
        ]),
    )
}

pub fn state(me: i32, players: u32, board: Board) -> AgentState {
    AgentState::new(me, players, board, Extensions::empty())
}

pub fn setup_json(options: bool) -> String {
    format!(
        concat!(
            r#"{{"punter":1,"punters":2,"#,
            r#""map":{{"sites":[{{"id":0}},{{"id":1}},{{"id":2}},{{"id":3}}],"#,
            r#""rivers":[{{"source":1,"target":0}},{{"source":1,"target":2}},{{"source":3,"target":2}}],"#,
            r#""mines":[0,3]}},"#,
            r#""settings":{{"options":{}}}}}"#
        ),
        options
    )
}
