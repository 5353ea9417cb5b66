use crate::core::{Key, Result, Value};
use crate::parser::Command;
use crate::result::CommandResult;
use log::trace;

/// Storage engine trait - the operations a transactional key-value backend
/// exposes to a session.
pub trait StorageEngine {
    /// Assign `value` to `key`, replacing any current value
    fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>);

    /// Remove `key`; a no-op for absent keys
    fn unset(&mut self, key: &str);

    /// Current value of `key`
    fn get(&self, key: &str) -> Option<&str>;

    /// Number of keys whose current value equals `value`
    fn num_equal_to(&self, value: &str) -> usize;

    /// Open a nested transaction block
    fn begin(&mut self);

    /// Undo the innermost block. Fails with `DbError::NoTransaction` when
    /// nothing is open.
    fn rollback(&mut self) -> Result<()>;

    /// Make all buffered changes permanent, closing every block
    fn commit(&mut self);

    /// Execute one store command
    ///
    /// ROLLBACK with no open block is reported as
    /// [`CommandResult::NoTransaction`] rather than an error; every other
    /// command always succeeds.
    fn execute(&mut self, command: Command) -> CommandResult {
        trace!("execute {}", command.name());

        match command {
            Command::Set { key, value } => {
                self.set(key, value);
                CommandResult::empty()
            }
            Command::Get { key } => CommandResult::Value(self.get(&key).map(str::to_string)),
            Command::Unset { key } => {
                self.unset(&key);
                CommandResult::empty()
            }
            Command::NumEqualTo { value } => CommandResult::Count(self.num_equal_to(&value)),
            Command::Begin => {
                self.begin();
                CommandResult::empty()
            }
            Command::Rollback => match self.rollback() {
                Ok(()) => CommandResult::empty(),
                Err(_) => CommandResult::NoTransaction,
            },
            Command::Commit => {
                self.commit();
                CommandResult::empty()
            }
        }
    }
}
