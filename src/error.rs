// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Core error taxonomy. Malformed frame tokens are fatal and propagate;
/// data-availability gaps (missing bowler, incomplete game) are handled by
/// skipping at the call site and never surface as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame cell contained a token that is not `X`, `-`, `/` or a pin count.
    #[error("unrecognized frame token: {token:?}")]
    BadFrameToken { token: String },

    #[error("http error: {0}")]
    Http(String),

    #[error("bad url: {0}")]
    BadUrl(String),

    /// The page has no `scoredate` element with a parseable date.
    #[error("scoresheet has no parseable date")]
    MissingDate,

    #[error("malformed scoresheet: {0}")]
    MalformedSheet(&'static str),

    #[error("bad date: {0}")]
    BadDate(#[from] chrono::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
