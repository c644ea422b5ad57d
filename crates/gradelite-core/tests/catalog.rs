//! Integration tests for the built-in curriculum catalog

use gradelite_core::catalog::{Branch, Catalog, ProgramYear, Selection, Semester, Slot, SLOT_COUNT};
use gradelite_core::error::GradeliteError;
use gradelite_core::form::apply_to_form;

#[test]
fn test_every_valid_triple_has_aligned_lists() {
    let catalog = Catalog::builtin();
    for year in ProgramYear::ALL {
        for semester in Semester::ALL {
            for branch in Branch::ALL {
                let entry = catalog
                    .lookup(year.label(), semester.label(), branch.label())
                    .unwrap_or_else(|e| panic!("{year} {semester} {branch}: {e}"));
                assert_eq!(entry.subject_names().len(), entry.credit_weights().len());
                assert_eq!(entry.subject_names().len(), SLOT_COUNT);
            }
        }
    }
}

#[test]
fn test_invalid_triples_are_not_found() {
    let catalog = Catalog::builtin();
    let invalid = [
        ("E5", "Sem - 1", "CSE"),
        ("e1", "Sem - 1", "CSE"),
        ("", "Sem - 1", "CSE"),
        ("E1", "Sem - 3", "CSE"),
        ("E1", "Sem-1", "CSE"),
        ("E1", "Sem - 1", "cse"),
        ("E1", "Sem - 1", "AERO"),
        ("E1", "Sem - 1", ""),
    ];

    for (year, semester, branch) in invalid {
        let err = catalog.lookup(year, semester, branch).unwrap_err();
        assert!(
            matches!(err, GradeliteError::InvalidSelection { .. }),
            "{year:?} {semester:?} {branch:?} gave {err:?}"
        );
    }
}

#[test]
fn test_typed_get_matches_label_lookup() {
    let catalog = Catalog::builtin();
    let selection = Selection::new(ProgramYear::E2, Semester::Second, Branch::Civil);
    let by_label = catalog.lookup("E2", "Sem - 2", "CIVIL").unwrap();
    assert_eq!(catalog.get(selection).unwrap(), by_label);
}

#[test]
fn test_weights_are_non_negative_and_nonzero_total() {
    for (selection, entry) in Catalog::builtin().entries() {
        assert!(
            entry.credit_weights().iter().all(|w| *w >= 0.0),
            "{selection}"
        );
        assert!(entry.total_credits() > 0.0, "{selection}");
    }
}

#[test]
fn test_hidden_named_subjects_match_published_forms() {
    // The published forms hide a few rows that still carry a subject name
    let expected = vec![
        Selection::new(ProgramYear::E1, Semester::First, Branch::Civil),
        Selection::new(ProgramYear::E1, Semester::Second, Branch::Civil),
        Selection::new(ProgramYear::E2, Semester::First, Branch::Civil),
        Selection::new(ProgramYear::E2, Semester::Second, Branch::Civil),
        Selection::new(ProgramYear::E3, Semester::First, Branch::Civil),
        Selection::new(ProgramYear::E3, Semester::Second, Branch::Civil),
        Selection::new(ProgramYear::E4, Semester::First, Branch::Civil),
        Selection::new(ProgramYear::E4, Semester::Second, Branch::Cse),
        Selection::new(ProgramYear::E4, Semester::Second, Branch::Civil),
    ];

    let actual: Vec<Selection> = Catalog::builtin()
        .entries()
        .filter(|(_, entry)| {
            apply_to_form(entry)
                .rows
                .iter()
                .any(|row| !row.visible && !row.label.is_empty())
        })
        .map(|(selection, _)| selection)
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_known_entries() {
    let catalog = Catalog::builtin();

    let ece = catalog.lookup("E1", "Sem - 2", "ECE").unwrap();
    assert_eq!(ece.subject_names()[8], "Signals & Systems");
    assert_eq!(ece.credit_weights()[8], 2.4);

    let eee = catalog.lookup("E3", "Sem - 1", "EEE").unwrap();
    assert_eq!(eee.subject_count(), SLOT_COUNT);
    assert!(eee.is_visible(Slot::LAST));

    let mech = catalog.lookup("E4", "Sem - 1", "MECH").unwrap();
    assert_eq!(mech.credit_weights()[3], 4.5);
    assert_eq!(mech.subject_count(), 4);
}
