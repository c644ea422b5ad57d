//! Credit-weighted GPA calculation
//!
//! `compute_gpa` is the raw weighted mean and returns NaN when no slot
//! carries credit. `GpaCalculator::calculate` is the checked form used by
//! the CLI: it reports a zero credit total as `GradeliteError::NoCredits`
//! and never hands back a non-finite GPA.

mod parse;

use serde::Serialize;
use tracing::debug;

use crate::bail_usage;
use crate::catalog::{CurriculumEntry, Slot, SLOT_COUNT};
use crate::config::{GlobalConfig, DEFAULT_DISTINCTION_THRESHOLD};
use crate::error::{GradeliteError, Result};

pub use parse::parse_grade;

/// Grade value and credit weight for one slot of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeEntry {
    pub slot: Slot,
    pub grade: f64,
    pub credit: f64,
}

/// `sum(grade[i] * weight[i]) / sum(weight[i])` over the ten slots.
///
/// When every weight is zero the result is NaN.
pub fn compute_gpa(grades: &[f64; SLOT_COUNT], weights: &[f64; SLOT_COUNT]) -> f64 {
    let (weighted, total) = grades
        .iter()
        .zip(weights)
        .fold((0.0_f64, 0.0_f64), |(weighted, total), (grade, weight)| {
            (weighted + grade * weight, total + weight)
        });
    weighted / total
}

/// Map grade inputs onto slots 1, 2, 3... in order; unsupplied slots are 0.
pub fn collect_grades<S: AsRef<str>>(inputs: &[S]) -> Result<[f64; SLOT_COUNT]> {
    let slots: Vec<Slot> = Slot::all().collect();
    collect_grades_for(inputs, &slots)
}

/// Map grade inputs onto the given slots in order; every other slot is 0.
///
/// Used to fill only the rows a form actually shows.
pub fn collect_grades_for<S: AsRef<str>>(
    inputs: &[S],
    slots: &[Slot],
) -> Result<[f64; SLOT_COUNT]> {
    if inputs.len() > slots.len() {
        bail_usage!(format!(
            "got {} grades but only {} subject slots are available",
            inputs.len(),
            slots.len()
        ));
    }

    let mut grades = [0.0; SLOT_COUNT];
    for (input, slot) in inputs.iter().zip(slots) {
        grades[slot.position()] = parse_grade(input.as_ref());
    }
    Ok(grades)
}

/// Outcome of a checked GPA calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaReport {
    pub gpa: f64,
    pub total_credits: f64,
    pub weighted_sum: f64,
    pub entries: Vec<GradeEntry>,
    /// GPA reached the distinction threshold
    pub distinction: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaCalculator {
    distinction_threshold: f64,
}

impl Default for GpaCalculator {
    fn default() -> Self {
        Self {
            distinction_threshold: DEFAULT_DISTINCTION_THRESHOLD,
        }
    }
}

impl GpaCalculator {
    pub fn new(distinction_threshold: f64) -> Self {
        Self {
            distinction_threshold,
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.distinction_threshold)
    }

    pub fn distinction_threshold(&self) -> f64 {
        self.distinction_threshold
    }

    /// Weighted GPA of `grades` against the entry's credit weights.
    pub fn calculate(
        &self,
        entry: &CurriculumEntry,
        grades: &[f64; SLOT_COUNT],
    ) -> Result<GpaReport> {
        let weights = entry.weights();
        let total_credits: f64 = weights.iter().sum();
        if total_credits <= 0.0 {
            debug!("calculation without credit weight");
            return Err(GradeliteError::NoCredits);
        }

        let gpa = compute_gpa(grades, &weights);
        if !gpa.is_finite() {
            return Err(GradeliteError::failed(
                "compute GPA",
                "grades produced a non-finite result",
            ));
        }

        let entries: Vec<GradeEntry> = Slot::all()
            .map(|slot| GradeEntry {
                slot,
                grade: grades[slot.position()],
                credit: weights[slot.position()],
            })
            .collect();
        let weighted_sum: f64 = entries.iter().map(|e| e.grade * e.credit).sum();

        debug!(gpa, total_credits, weighted_sum, "calculate");

        Ok(GpaReport {
            gpa,
            total_credits,
            weighted_sum,
            entries,
            distinction: gpa >= self.distinction_threshold,
        })
    }
}
