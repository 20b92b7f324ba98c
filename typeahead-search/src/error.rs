use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognized command line: {0:?}")]
    UnknownCommand(String),
    #[error("missing field `{field}` in `{command}` command")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },
    #[error("unrecognized entry type `{0}`")]
    UnknownEntryType(String),
    #[error("malformed boost `{0}`, expected KEY:FACTOR")]
    MalformedBoost(String),
    #[error("invalid integer")]
    ParseInt(#[from] ParseIntError),
    #[error("invalid number")]
    ParseFloat(#[from] ParseFloatError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("expected {expected} command line(s), got {got}")]
    UnexpectedEof { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
