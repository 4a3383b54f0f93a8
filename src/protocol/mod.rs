pub mod decode;
pub mod encode;
pub mod envelope;
pub mod message;

pub use decode::{DecodeDefault, decode_bytes, decode_message, decode_move, decode_state};
pub use encode::{encode_response, encode_state, to_frame};
pub use envelope::{FrameError, read_frame, write_frame};
pub use message::{Response, ServerMessage, Setup};
