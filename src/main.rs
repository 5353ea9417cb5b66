mod cli;

use crate::cli::args::Args;
use anyhow::Result;
use clap::Parser;
use rustmemokv::InMemoryDB;
use rustmemokv::driver::{open_input, run};
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(&args);

    let config = args.to_config();
    let input = open_input(&config)?;
    let mut db = InMemoryDB::new();

    let stdout = io::stdout();
    let mut output = stdout.lock();
    run(&mut db, input, &mut output, &config)?;
    Ok(())
}
