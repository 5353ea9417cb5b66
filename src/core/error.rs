use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("NO TRANSACTION")]
    NoTransaction,

    #[error("Invalid UTF-8 in input: {0}")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl From<std::str::Utf8Error> for DbError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}
