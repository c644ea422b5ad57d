//! Closed key sets for the curriculum catalog
//!
//! Every key parses from its canonical label exactly; matching is
//! case-sensitive so `e1` or `cse` are not valid selections.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{GradeliteError, Result};

/// Number of input slots on a semester form
pub const SLOT_COUNT: usize = 10;

macro_rules! closed_key {
    (
        $(#[$meta:meta])*
        $name:ident, $level:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All keys in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Catalog level name used in error messages
            pub const LEVEL: &'static str = $level;

            /// Canonical label, also the only accepted spelling
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = GradeliteError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(GradeliteError::invalid_selection($level, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

closed_key! {
    /// Program year (E1 is the first engineering year)
    ProgramYear, "program year" {
        E1 => "E1",
        E2 => "E2",
        E3 => "E3",
        E4 => "E4",
    }
}

closed_key! {
    /// Semester within a program year
    Semester, "semester" {
        First => "Sem - 1",
        Second => "Sem - 2",
    }
}

closed_key! {
    /// Engineering branch
    Branch, "branch" {
        Cse => "CSE",
        Ece => "ECE",
        Eee => "EEE",
        Civil => "CIVIL",
        Mech => "MECH",
    }
}

/// One of the ten 1-based input positions on a semester form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: Slot = Slot(1);
    pub const LAST: Slot = Slot(SLOT_COUNT as u8);

    pub fn new(index: u8) -> Result<Self> {
        if (1..=SLOT_COUNT as u8).contains(&index) {
            Ok(Slot(index))
        } else {
            Err(GradeliteError::invalid_value("slot (1-10)", index))
        }
    }

    /// 1-based slot number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// 0-based position in a slot array
    pub fn position(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Iterate slots 1 through 10
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=SLOT_COUNT as u8).map(Slot)
    }
}

impl TryFrom<u8> for Slot {
    type Error = GradeliteError;

    fn try_from(index: u8) -> Result<Self> {
        Slot::new(index)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
