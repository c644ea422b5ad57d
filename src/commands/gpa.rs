//! `gradelite gpa` command - credit-weighted GPA for a selection

use serde::Serialize;
use tracing::debug;

use crate::cli::format::output_by_format_result;
use crate::cli::{Cli, SelectionArgs};
use crate::commands::format::{format_decimal, print_json, print_records_header};
use gradelite_core::catalog::{Catalog, Selection, Slot};
use gradelite_core::config::GlobalConfig;
use gradelite_core::error::Result;
use gradelite_core::form::{apply_to_form, RenderPlan};
use gradelite_core::format::escape_quotes;
use gradelite_core::gpa::{collect_grades, collect_grades_for, GpaCalculator, GpaReport};

/// Inputs of one `gpa` invocation
pub struct GpaParams<'a> {
    pub selection: &'a SelectionArgs,
    pub grades: &'a [String],
    pub visible_only: bool,
}

#[derive(Debug, Serialize)]
struct SubjectGrade<'a> {
    slot: Slot,
    subject: &'a str,
    credit: f64,
    grade: f64,
    visible: bool,
}

#[derive(Debug, Serialize)]
struct GpaOutput<'a> {
    selection: Selection,
    gpa: f64,
    total_credits: f64,
    weighted_sum: f64,
    distinction: bool,
    distinction_threshold: f64,
    subjects: Vec<SubjectGrade<'a>>,
}

/// Execute the gpa command
pub fn execute(
    cli: &Cli,
    catalog: &Catalog,
    config: &GlobalConfig,
    params: GpaParams,
) -> Result<()> {
    let args = params.selection;
    let (selection, entry) = catalog.resolve(&args.year, &args.semester, &args.branch)?;
    let plan = apply_to_form(entry);

    let grades = if params.visible_only {
        collect_grades_for(params.grades, &plan.visible_slots())?
    } else {
        collect_grades(params.grades)?
    };
    debug!(supplied = params.grades.len(), visible_only = params.visible_only, "collect_grades");

    let calculator = GpaCalculator::from_config(config);
    let report = calculator.calculate(entry, &grades)?;
    let subjects = graded_subjects(&plan, &report);

    output_by_format_result!(cli.format,
        json => {
            print_json(&GpaOutput {
                selection,
                gpa: report.gpa,
                total_credits: report.total_credits,
                weighted_sum: report.weighted_sum,
                distinction: report.distinction,
                distinction_threshold: calculator.distinction_threshold(),
                subjects,
            })
        },
        human => {
            output_human(cli, config, &selection, &report, &subjects);
        },
        records => {
            print_records_header(
                "gpa",
                &selection,
                &[
                    ("gpa", report.gpa.to_string()),
                    ("credits", report.total_credits.to_string()),
                    ("distinction", report.distinction.to_string()),
                ],
            );
            for subject in &subjects {
                println!(
                    "G {} grade={} credit={} visible={} \"{}\"",
                    subject.slot,
                    subject.grade,
                    subject.credit,
                    subject.visible,
                    escape_quotes(subject.subject)
                );
            }
        }
    )
}

/// Slots that carry a subject name or a credit weight, with the grade used
fn graded_subjects<'a>(plan: &'a RenderPlan, report: &GpaReport) -> Vec<SubjectGrade<'a>> {
    report
        .entries
        .iter()
        .filter_map(|graded| {
            let row = plan.row(graded.slot);
            if row.label.is_empty() && graded.credit == 0.0 {
                return None;
            }
            Some(SubjectGrade {
                slot: graded.slot,
                subject: row.subject(),
                credit: graded.credit,
                grade: graded.grade,
                visible: row.visible,
            })
        })
        .collect()
}

fn output_human(
    cli: &Cli,
    config: &GlobalConfig,
    selection: &Selection,
    report: &GpaReport,
    subjects: &[SubjectGrade],
) {
    let gpa = format_decimal(report.gpa, config.precision);

    if cli.quiet {
        println!("{}", gpa);
        return;
    }

    println!("{}", selection);
    println!();
    for subject in subjects {
        let hidden = if subject.visible { "" } else { "  [hidden]" };
        println!(
            "{:>3}  {:<48} {:>4} credits  grade {}{}",
            subject.slot, subject.subject, subject.credit, subject.grade, hidden
        );
    }
    println!();
    println!("GPA: {} ({} credits)", gpa, report.total_credits);

    if report.distinction {
        println!(
            "Distinction! GPA of {} or above.",
            config.distinction_threshold
        );
    }
}
