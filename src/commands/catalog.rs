//! `gradelite catalog` command - list the program years, semesters and
//! branches that have a curriculum

use serde::Serialize;

use crate::cli::format::output_by_format_result;
use crate::cli::Cli;
use crate::commands::format::print_json;
use gradelite_core::catalog::{Branch, Catalog, CurriculumEntry, ProgramYear, Selection, Semester};
use gradelite_core::error::Result;
use gradelite_core::form::apply_to_form;
use gradelite_core::format::{escape_quotes, records_header};

/// Exact-label filters; `None` matches every key at that level
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CatalogFilter {
    pub year: Option<ProgramYear>,
    pub semester: Option<Semester>,
    pub branch: Option<Branch>,
}

impl CatalogFilter {
    /// Parse filter labels, rejecting anything that is not a known key
    pub fn parse(year: Option<&str>, semester: Option<&str>, branch: Option<&str>) -> Result<Self> {
        Ok(Self {
            year: year.map(str::parse).transpose()?,
            semester: semester.map(str::parse).transpose()?,
            branch: branch.map(str::parse).transpose()?,
        })
    }

    pub fn matches(&self, selection: &Selection) -> bool {
        self.year.is_none_or(|y| y == selection.year)
            && self.semester.is_none_or(|s| s == selection.semester)
            && self.branch.is_none_or(|b| b == selection.branch)
    }
}

#[derive(Debug, Serialize)]
struct CatalogRow {
    #[serde(flatten)]
    selection: Selection,
    subjects: usize,
    visible_rows: usize,
    total_credits: f64,
}

impl CatalogRow {
    fn new(selection: Selection, entry: &CurriculumEntry) -> Self {
        Self {
            selection,
            subjects: entry.subject_count(),
            visible_rows: apply_to_form(entry).visible_rows().count(),
            total_credits: entry.total_credits(),
        }
    }
}

/// Execute the catalog command
pub fn execute(cli: &Cli, catalog: &Catalog, filter: &CatalogFilter) -> Result<()> {
    let rows: Vec<CatalogRow> = catalog
        .entries()
        .filter(|(selection, _)| filter.matches(selection))
        .map(|(selection, entry)| CatalogRow::new(selection, entry))
        .collect();

    output_by_format_result!(cli.format,
        json => {
            print_json(&rows)
        },
        human => {
            if rows.is_empty() && !cli.quiet {
                println!("No catalog entries match.");
            }
            for row in &rows {
                let s = &row.selection;
                println!(
                    "{:<3} {:<8} {:<6} {:>2} subjects  {:>5} credits",
                    s.year, s.semester, s.branch, row.subjects, row.total_credits
                );
            }
        },
        records => {
            println!("{} entries={}", records_header("catalog"), rows.len());
            for row in &rows {
                let s = &row.selection;
                println!(
                    "C {} \"{}\" {} subjects={} visible={} credits={}",
                    s.year,
                    escape_quotes(s.semester.label()),
                    s.branch,
                    row.subjects,
                    row.visible_rows,
                    row.total_credits
                );
            }
        }
    )
}
