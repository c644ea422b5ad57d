//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use gradelite_core::catalog::Catalog;
use gradelite_core::config::GlobalConfig;
use gradelite_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn catalog(&self) -> &'static Catalog {
        Catalog::builtin()
    }

    /// Load and validate the user's config file
    pub fn config(&self) -> Result<GlobalConfig> {
        GlobalConfig::load()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("gradelite {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A credit-weighted GPA calculator.");
        println!();
        println!("Run `gradelite --help` for usage information.");
        Ok(())
    }
}
