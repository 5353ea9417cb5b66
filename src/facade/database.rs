use crate::core::Result;
use crate::parser::{Command, CommandParser, Statement};
use crate::result::CommandResult;
use crate::storage::{StorageEngine, TransactionalStore};

/// What the driver should do after one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this line
    Output(String),
    /// Nothing to print
    Silent,
    /// END was read; stop processing input
    Exit,
}

/// One database session: a store plus the text front end that feeds it.
///
/// Construct one per process and pass it to whatever reads the input; there
/// is no shared global instance.
pub struct InMemoryDB {
    parser: CommandParser,
    store: TransactionalStore,
}

impl InMemoryDB {
    pub fn new() -> Self {
        Self {
            parser: CommandParser::new(),
            store: TransactionalStore::new(),
        }
    }

    /// Parse and run a single line of input
    ///
    /// Blank lines are [`Step::Silent`]. Unknown commands and wrong argument
    /// counts are returned as errors and leave the store untouched.
    pub fn execute(&mut self, line: &str) -> Result<Step> {
        let step = match self.parser.parse(line)? {
            None => Step::Silent,
            Some(Statement::End) => Step::Exit,
            Some(Statement::Command(command)) => match self.run(command).output() {
                Some(text) => Step::Output(text),
                None => Step::Silent,
            },
        };
        Ok(step)
    }

    /// Run an already-parsed command
    pub fn run(&mut self, command: Command) -> CommandResult {
        self.store.execute(command)
    }

    pub fn store(&self) -> &TransactionalStore {
        &self.store
    }
}

impl Default for InMemoryDB {
    fn default() -> Self {
        Self::new()
    }
}
