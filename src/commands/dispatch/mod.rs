//! Command dispatch logic for gradelite

use std::time::Instant;

use crate::cli::Cli;
use gradelite_core::error::Result;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
