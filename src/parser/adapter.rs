// ============================================================================
// Command Line Parser
// ============================================================================
//
// Turns one line of text into a Statement:
//
//   SET <key> <value> | GET <key> | UNSET <key> | NUMEQUALTO <value>
//   BEGIN | ROLLBACK | COMMIT | END
//
// Command names are case-insensitive, arguments are taken verbatim.
//
// ============================================================================

use crate::core::{DbError, Result};
use crate::parser::ast::{Command, Statement};

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single line. Returns `Ok(None)` for a blank line.
    pub fn parse(&self, line: &str) -> Result<Option<Statement>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let statement = match name.to_ascii_uppercase().as_str() {
            "SET" => {
                let [key, value] = expect_args::<2>("SET", &args)?;
                Statement::Command(Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "GET" => {
                let [key] = expect_args::<1>("GET", &args)?;
                Statement::Command(Command::Get {
                    key: key.to_string(),
                })
            }
            "UNSET" => {
                let [key] = expect_args::<1>("UNSET", &args)?;
                Statement::Command(Command::Unset {
                    key: key.to_string(),
                })
            }
            "NUMEQUALTO" => {
                let [value] = expect_args::<1>("NUMEQUALTO", &args)?;
                Statement::Command(Command::NumEqualTo {
                    value: value.to_string(),
                })
            }
            "BEGIN" => {
                expect_args::<0>("BEGIN", &args)?;
                Statement::Command(Command::Begin)
            }
            "ROLLBACK" => {
                expect_args::<0>("ROLLBACK", &args)?;
                Statement::Command(Command::Rollback)
            }
            "COMMIT" => {
                expect_args::<0>("COMMIT", &args)?;
                Statement::Command(Command::Commit)
            }
            "END" => {
                expect_args::<0>("END", &args)?;
                Statement::End
            }
            _ => return Err(DbError::UnknownCommand(name.to_string())),
        };

        Ok(Some(statement))
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| DbError::WrongArity {
        command,
        expected: N,
        found: args.len(),
    })
}
