//! `gradelite subjects` command - show the form rows for a selection
//!
//! Rows are listed in slot order. Hidden rows are left out unless `--all`
//! is given, in which case they are marked as hidden.

use serde::Serialize;

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, SelectionArgs};
use crate::commands::format::{print_json, print_records_header};
use gradelite_core::catalog::{Catalog, Selection};
use gradelite_core::error::Result;
use gradelite_core::form::{apply_to_form, RenderedSlot};
use gradelite_core::format::escape_quotes;

#[derive(Serialize)]
struct SubjectsOutput<'a> {
    selection: Selection,
    total_credits: f64,
    rows: Vec<&'a RenderedSlot>,
}

/// Execute the subjects command
pub fn execute(cli: &Cli, catalog: &Catalog, args: &SelectionArgs, all: bool) -> Result<()> {
    let (selection, entry) = catalog.resolve(&args.year, &args.semester, &args.branch)?;
    let plan = apply_to_form(entry);

    let rows: Vec<&RenderedSlot> = if all {
        plan.rows.iter().collect()
    } else {
        plan.visible_rows().collect()
    };

    output_by_format_result!(cli.format,
        json => {
            print_json(&SubjectsOutput {
                selection,
                total_credits: entry.total_credits(),
                rows,
            })
        },
        human => {
            output_human(cli, &selection, &rows, entry.total_credits());
        },
        records => {
            print_records_header(
                "subjects",
                &selection,
                &[
                    ("rows", rows.len().to_string()),
                    ("credits", entry.total_credits().to_string()),
                ],
            );
            for row in &rows {
                println!(
                    "S {} credit={} visible={} \"{}\"",
                    row.slot,
                    row.credit,
                    row.visible,
                    escape_quotes(row.subject())
                );
            }
        }
    )
}

fn output_human(cli: &Cli, selection: &Selection, rows: &[&RenderedSlot], total_credits: f64) {
    if !cli.quiet {
        println!("{}", selection);
        println!();
    }

    for row in rows {
        let label = if row.label.is_empty() {
            "(unused)"
        } else {
            row.label.as_str()
        };
        let hidden = if row.visible { "" } else { "  [hidden]" };
        println!(
            "{:>3}  {:<48} {:>4} credits{}",
            row.slot, label, row.credit, hidden
        );
    }

    if !cli.quiet {
        println!();
        println!("Total credits: {}", total_credits);
    }
}
