use std::collections::BTreeSet;

use serde::Serialize;

use super::keys::{Slot, SLOT_COUNT};

/// Source row for one (year, semester, branch) combination.
///
/// Names and credits may be ragged; `CurriculumEntry::from_raw` fits them
/// to the ten-slot frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawEntry {
    pub names: &'static [&'static str],
    pub credits: &'static [f64],
    pub hide: &'static [u8],
    pub show: &'static [u8],
}

/// Subjects and credit weights for one (year, semester, branch) combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumEntry {
    subject_names: Vec<String>,
    credit_weights: Vec<f64>,
    hidden_slots: BTreeSet<Slot>,
    shown_slots: BTreeSet<Slot>,
}

impl CurriculumEntry {
    /// Build an entry, padding or truncating both sequences to ten slots.
    ///
    /// Slot indices outside 1..=10 are dropped. Negative or non-finite
    /// weights are stored as 0.
    pub fn new(
        names: &[&str],
        credits: &[f64],
        hidden: &[u8],
        shown: &[u8],
    ) -> Self {
        let subject_names = (0..SLOT_COUNT)
            .map(|i| names.get(i).map(|s| s.to_string()).unwrap_or_default())
            .collect();

        let credit_weights = (0..SLOT_COUNT)
            .map(|i| match credits.get(i) {
                Some(&c) if c.is_finite() && c > 0.0 => c,
                _ => 0.0,
            })
            .collect();

        Self {
            subject_names,
            credit_weights,
            hidden_slots: slot_set(hidden),
            shown_slots: slot_set(shown),
        }
    }

    /// Catalog rows start with the tenth row hidden; `show` can bring it back.
    pub(crate) fn from_raw(raw: &RawEntry) -> Self {
        let mut hidden = raw.hide.to_vec();
        hidden.push(Slot::LAST.number());
        Self::new(raw.names, raw.credits, &hidden, raw.show)
    }

    pub fn subject_names(&self) -> &[String] {
        &self.subject_names
    }

    pub fn credit_weights(&self) -> &[f64] {
        &self.credit_weights
    }

    pub fn hidden_slots(&self) -> &BTreeSet<Slot> {
        &self.hidden_slots
    }

    pub fn shown_slots(&self) -> &BTreeSet<Slot> {
        &self.shown_slots
    }

    pub fn subject_name(&self, slot: Slot) -> &str {
        &self.subject_names[slot.position()]
    }

    pub fn credit_weight(&self, slot: Slot) -> f64 {
        self.credit_weights[slot.position()]
    }

    /// Weights as a fixed array ready for `gpa::compute_gpa`
    pub fn weights(&self) -> [f64; SLOT_COUNT] {
        let mut weights = [0.0; SLOT_COUNT];
        weights.copy_from_slice(&self.credit_weights);
        weights
    }

    /// Whether the slot's input row is shown; a forced show wins over a hide.
    pub fn is_visible(&self, slot: Slot) -> bool {
        self.shown_slots.contains(&slot) || !self.hidden_slots.contains(&slot)
    }

    /// Number of slots with a subject name
    pub fn subject_count(&self) -> usize {
        self.subject_names.iter().filter(|n| !n.is_empty()).count()
    }

    pub fn total_credits(&self) -> f64 {
        self.credit_weights.iter().sum()
    }
}

fn slot_set(indices: &[u8]) -> BTreeSet<Slot> {
    indices.iter().filter_map(|&i| Slot::new(i).ok()).collect()
}
