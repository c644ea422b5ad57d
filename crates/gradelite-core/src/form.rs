//! Form render plan
//!
//! Turns a `CurriculumEntry` into the ten rows a grade-entry form shows:
//! label, credit weight and whether the row is visible.

use serde::Serialize;

use crate::catalog::{CurriculumEntry, Slot};

/// Marker placed in front of every non-empty subject label
pub const LABEL_MARKER: &str = "# ";

/// One input row of the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSlot {
    pub slot: Slot,
    /// `"# <subject>"`, or empty for an unused slot
    pub label: String,
    pub credit: f64,
    pub visible: bool,
}

impl RenderedSlot {
    /// Label without the leading marker
    pub fn subject(&self) -> &str {
        self.label.strip_prefix(LABEL_MARKER).unwrap_or(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub rows: Vec<RenderedSlot>,
}

impl RenderPlan {
    pub fn visible_rows(&self) -> impl Iterator<Item = &RenderedSlot> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Slots a user can type a grade into, in form order
    pub fn visible_slots(&self) -> Vec<Slot> {
        self.visible_rows().map(|row| row.slot).collect()
    }

    pub fn row(&self, slot: Slot) -> &RenderedSlot {
        &self.rows[slot.position()]
    }
}

/// Produce the label, weight and visibility of slots 1 through 10.
///
/// A slot is visible unless it is hidden; listing it as shown makes it
/// visible even when it is also hidden.
pub fn apply_to_form(entry: &CurriculumEntry) -> RenderPlan {
    let rows = Slot::all()
        .map(|slot| {
            let name = entry.subject_name(slot);
            RenderedSlot {
                slot,
                label: if name.is_empty() {
                    String::new()
                } else {
                    format!("{LABEL_MARKER}{name}")
                },
                credit: entry.credit_weight(slot),
                visible: entry.is_visible(slot),
            }
        })
        .collect();

    RenderPlan { rows }
}
