use crate::core::Value;
use std::fmt;

/// Outcome of one store command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command ran and has nothing to print
    Empty,
    /// GET: the current value, or `None` when the key has no value
    Value(Option<Value>),
    /// NUMEQUALTO: number of keys holding the value
    Count(usize),
    /// ROLLBACK with no open block
    NoTransaction,
}

impl CommandResult {
    pub fn empty() -> Self {
        CommandResult::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CommandResult::Empty)
    }

    /// The line a driver should print, if any
    pub fn output(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Empty => Ok(()),
            CommandResult::Value(Some(value)) => write!(f, "{}", value),
            CommandResult::Value(None) => write!(f, "NULL"),
            CommandResult::Count(count) => write!(f, "{}", count),
            CommandResult::NoTransaction => write!(f, "NO TRANSACTION"),
        }
    }
}
