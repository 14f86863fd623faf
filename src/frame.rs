// src/frame.rs

// Frame-notation parsing. A sheet cell holds whitespace-separated tokens:
// the throw values in bowling shorthand, then the running score for the
// frame as printed on the sheet ("9 / 142", "X 57", "5 4 90", ...).

use crate::error::{Error, Result};

/// Convert one frame cell into integers.
///
/// `X` is worth 10, `-` is a miss (0), digit strings are literal pin counts,
/// and `/` is a spare: 10 minus the relevant prior throw in the same frame.
/// With two throws already recorded the spare fills from the second one
/// (third ball of the 10th); with none recorded the first ball was an
/// unprinted gutter, so both `0` and `10` are emitted; otherwise it fills
/// from the first throw.
///
/// Returns `Ok(None)` for an empty cell: the frame has not been bowled.
/// Any other token is a fatal [`Error::BadFrameToken`].
pub fn parse_frame(text: &str) -> Result<Option<Vec<u32>>> {
    let mut values: Vec<u32> = Vec::with_capacity(4);
    let mut saw_token = false;

    for token in text.split_whitespace() {
        saw_token = true;
        match token {
            "X" => values.push(10),
            "-" => values.push(0),
            "/" => match values.len() {
                n if n > 1 => values.push(10u32.saturating_sub(values[1])),
                0 => {
                    values.push(0);
                    values.push(10);
                }
                _ => values.push(10u32.saturating_sub(values[0])),
            },
            other => match other.parse::<u32>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    return Err(Error::BadFrameToken {
                        token: other.to_string(),
                    });
                }
            },
        }
    }

    if !saw_token {
        return Ok(None);
    }
    Ok(Some(values))
}
