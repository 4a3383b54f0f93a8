//! `<byte-length>:<json-body>` framing, with no trailing delimiter.

use std::io::{BufRead, Read, Write};

/// Longest length prefix accepted, in digits.
const MAX_PREFIX_DIGITS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stream closed before a frame arrived")]
    Closed,
    #[error("malformed length prefix")]
    BadPrefix,
    #[error("empty frame")]
    Empty,
    #[error("frame truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("frame body is not valid UTF-8")]
    NotUtf8,
}

pub fn encode(body: &str) -> Vec<u8> {
    let mut frame = format!("{}:", body.len()).into_bytes();
    frame.extend_from_slice(body.as_bytes());
    frame
}

fn parse_length(prefix: &[u8]) -> Result<usize, FrameError> {
    if prefix.is_empty()
        || prefix.len() > MAX_PREFIX_DIGITS
        || !prefix.iter().all(u8::is_ascii_digit)
    {
        return Err(FrameError::BadPrefix);
    }
    let digits = std::str::from_utf8(prefix).map_err(|_| FrameError::BadPrefix)?;
    match digits.parse::<usize>() {
        Ok(0) => Err(FrameError::Empty),
        Ok(len) => Ok(len),
        Err(_) => Err(FrameError::BadPrefix),
    }
}

/// Splits one frame off the front of `buf`, returning its body and whatever
/// bytes follow it.
pub fn decode(buf: &[u8]) -> Result<(&str, &[u8]), FrameError> {
    let colon = buf
        .iter()
        .position(|b| *b == b':')
        .ok_or(FrameError::BadPrefix)?;
    let len = parse_length(&buf[..colon])?;
    let rest = &buf[colon + 1..];
    if rest.len() < len {
        return Err(FrameError::Truncated {
            expected: len,
            actual: rest.len(),
        });
    }
    let (body, tail) = rest.split_at(len);
    let body = std::str::from_utf8(body).map_err(|_| FrameError::NotUtf8)?;
    Ok((body, tail))
}

/// Blocks until one whole frame has been read from `reader`.
pub fn read_frame<R: BufRead>(reader: &mut R) -> Result<String, FrameError> {
    let mut prefix = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_PREFIX_DIGITS as u64 + 1)
        .read_until(b':', &mut prefix)?;
    if read == 0 {
        return Err(FrameError::Closed);
    }
    if prefix.pop() != Some(b':') {
        return Err(FrameError::BadPrefix);
    }
    let len = parse_length(&prefix)?;

    let mut body = Vec::new();
    let actual = reader.by_ref().take(len as u64).read_to_end(&mut body)?;
    if actual < len {
        return Err(FrameError::Truncated {
            expected: len,
            actual,
        });
    }
    String::from_utf8(body).map_err(|_| FrameError::NotUtf8)
}

pub fn write_frame<W: Write>(writer: &mut W, body: &str) -> Result<(), FrameError> {
    writer.write_all(&encode(body))?;
    writer.flush()?;
    Ok(())
}
