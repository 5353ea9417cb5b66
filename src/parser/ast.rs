use crate::core::{Key, Value};

/// Store command, carrying exactly the arguments it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: Key, value: Value },
    Get { key: Key },
    Unset { key: Key },
    NumEqualTo { value: Value },
    Begin,
    Rollback,
    Commit,
}

impl Command {
    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
        }
    }
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Command(Command),
    /// END: stop the session. Never reaches the store.
    End,
}
