pub mod adapter;
pub mod ast;

pub use adapter::CommandParser;
pub use ast::{Command, Statement};
