//! Routing from parsed subcommands to their implementations

use crate::cli::{CatalogArgs, Commands, GpaArgs, SubjectsArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{catalog, gpa, subjects};
use gradelite_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Subjects(args) => execute_subjects(ctx, args),
            Commands::Gpa(args) => execute_gpa(ctx, args),
            Commands::Catalog(args) => execute_catalog(ctx, args),
        }
    }
}

fn execute_subjects(ctx: &CommandContext, args: &SubjectsArgs) -> Result<()> {
    let result = subjects::execute(ctx.cli, ctx.catalog(), &args.selection, args.all);
    trace_command!(ctx.cli, ctx.start, "execute_subjects");
    result
}

fn execute_gpa(ctx: &CommandContext, args: &GpaArgs) -> Result<()> {
    let config = ctx.config()?;
    trace_command!(ctx.cli, ctx.start, "load_config");

    let params = gpa::GpaParams {
        selection: &args.selection,
        grades: &args.grades,
        visible_only: args.visible_only,
    };
    let result = gpa::execute(ctx.cli, ctx.catalog(), &config, params);
    trace_command!(ctx.cli, ctx.start, "execute_gpa");
    result
}

fn execute_catalog(ctx: &CommandContext, args: &CatalogArgs) -> Result<()> {
    let filter = catalog::CatalogFilter::parse(
        args.year.as_deref(),
        args.semester.as_deref(),
        args.branch.as_deref(),
    )?;
    let result = catalog::execute(ctx.cli, ctx.catalog(), &filter);
    trace_command!(ctx.cli, ctx.start, "execute_catalog");
    result
}
