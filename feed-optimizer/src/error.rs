use std::num::ParseIntError;

/// Everything that can go wrong while driving a [`crate::Session`] from a
/// line-oriented command stream.
///
/// Malformed input is the only user-visible failure mode; [`Error::MissingStory`]
/// guards an internal consistency invariant that normal command sequences
/// never trip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognized command line: {0:?}")]
    UnknownCommand(String),

    #[error("missing field `{field}` in `{command}` command")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },

    #[error("invalid integer")]
    ParseInt(#[from] ParseIntError),

    #[error("story {0} is missing from the store during an internal remove")]
    MissingStory(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("expected {expected} command line(s), got {got}")]
    UnexpectedEof { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
