//! Curriculum catalog
//!
//! A three-level mapping from program year to semester to branch, each leaf
//! holding the subjects and credit weights of that combination. The built-in
//! catalog is compiled in, built on first use and never mutated.
//!
//! Lookups walk the levels in order and stop at the first miss, so an error
//! always names the outermost key that was not found.

mod data;
pub mod entry;
pub mod keys;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{GradeliteError, Result};
use crate::trace_time;

pub use entry::CurriculumEntry;
pub use keys::{Branch, ProgramYear, Semester, Slot, SLOT_COUNT};

type BranchMap = BTreeMap<Branch, CurriculumEntry>;
type SemesterMap = BTreeMap<Semester, BranchMap>;

/// A fully resolved (program year, semester, branch) key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Selection {
    pub year: ProgramYear,
    pub semester: Semester,
    pub branch: Branch,
}

impl Selection {
    pub fn new(year: ProgramYear, semester: Semester, branch: Branch) -> Self {
        Self {
            year,
            semester,
            branch,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.branch, self.year, self.semester)
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    years: BTreeMap<ProgramYear, SemesterMap>,
}

impl Catalog {
    /// The compiled-in curriculum table
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let start = Instant::now();
            let catalog = Catalog::from_entries(data::CURRICULUM.iter().map(
                |(year, semester, branch, raw)| {
                    (
                        Selection::new(*year, *semester, *branch),
                        CurriculumEntry::from_raw(raw),
                    )
                },
            ));
            trace_time!(start, "build_catalog", entries = catalog.len());
            catalog
        })
    }

    /// Build a catalog from explicit entries; a later duplicate replaces an
    /// earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = (Selection, CurriculumEntry)>) -> Self {
        let mut years: BTreeMap<ProgramYear, SemesterMap> = BTreeMap::new();
        for (selection, entry) in entries {
            years
                .entry(selection.year)
                .or_default()
                .entry(selection.semester)
                .or_default()
                .insert(selection.branch, entry);
        }
        Self { years }
    }

    /// Look up an entry by its three labels, matched exactly.
    ///
    /// Fails with `InvalidSelection` naming the first level whose key is
    /// unknown or absent.
    pub fn lookup(&self, year: &str, semester: &str, branch: &str) -> Result<&CurriculumEntry> {
        let semesters = year
            .parse::<ProgramYear>()
            .ok()
            .and_then(|y| self.years.get(&y))
            .ok_or_else(|| miss(ProgramYear::LEVEL, year))?;

        let branches = semester
            .parse::<Semester>()
            .ok()
            .and_then(|s| semesters.get(&s))
            .ok_or_else(|| miss(Semester::LEVEL, semester))?;

        let entry = branch
            .parse::<Branch>()
            .ok()
            .and_then(|b| branches.get(&b))
            .ok_or_else(|| miss(Branch::LEVEL, branch))?;

        debug!(year, semester, branch, subjects = entry.subject_count(), "lookup");
        Ok(entry)
    }

    /// Look up an entry by typed keys
    pub fn get(&self, selection: Selection) -> Result<&CurriculumEntry> {
        self.lookup(
            selection.year.label(),
            selection.semester.label(),
            selection.branch.label(),
        )
    }

    /// Like `lookup`, also returning the typed `Selection` that matched
    pub fn resolve(
        &self,
        year: &str,
        semester: &str,
        branch: &str,
    ) -> Result<(Selection, &CurriculumEntry)> {
        let entry = self.lookup(year, semester, branch)?;
        // lookup succeeded, so every label parsed
        let selection = Selection::new(year.parse()?, semester.parse()?, branch.parse()?);
        Ok((selection, entry))
    }

    /// Every populated combination, ordered by year, semester, then branch
    pub fn entries(&self) -> impl Iterator<Item = (Selection, &CurriculumEntry)> {
        self.years.iter().flat_map(|(year, semesters)| {
            semesters.iter().flat_map(move |(semester, branches)| {
                branches
                    .iter()
                    .map(move |(branch, entry)| (Selection::new(*year, *semester, *branch), entry))
            })
        })
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

fn miss(level: &str, value: &str) -> GradeliteError {
    debug!(level, value, "lookup miss");
    GradeliteError::invalid_selection(level, value)
}
