use clap::{ArgAction, Parser};
use rustmemokv::driver::DriverConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rustmemokv")]
#[command(about = "In-memory key-value store with nested transactions")]
#[command(version)]
pub struct Args {
    /// Read commands from a file instead of standard input
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Echo each command before its output
    #[arg(long)]
    pub echo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_config(&self) -> DriverConfig {
        let mut config = DriverConfig::new().echo(self.echo);
        if let Some(path) = &self.file {
            config = config.file(path.clone());
        }
        if self.strict {
            config = config.strict();
        }
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
