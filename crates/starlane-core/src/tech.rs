//! The six-dimension technology vector.
//!
//! Every species carries one level per technology field. The production
//! driver snapshots the whole vector before handing it to the rule engine
//! and copies it back only after the call returns, so a failed call can
//! never leave a half-updated vector visible to later species.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TechField
// ---------------------------------------------------------------------------

/// One of the six technology fields a species advances through research.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechField {
    Mining,
    Manufacturing,
    Military,
    Gravitics,
    LifeSupport,
    Biology,
}

impl TechField {
    /// All fields in canonical vector order.
    pub const ALL: [TechField; 6] = [
        TechField::Mining,
        TechField::Manufacturing,
        TechField::Military,
        TechField::Gravitics,
        TechField::LifeSupport,
        TechField::Biology,
    ];

    /// Position of this field in the vector.
    pub fn index(self) -> usize {
        match self {
            TechField::Mining => 0,
            TechField::Manufacturing => 1,
            TechField::Military => 2,
            TechField::Gravitics => 3,
            TechField::LifeSupport => 4,
            TechField::Biology => 5,
        }
    }

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            TechField::Mining => "Mining",
            TechField::Manufacturing => "Manufacturing",
            TechField::Military => "Military",
            TechField::Gravitics => "Gravitics",
            TechField::LifeSupport => "Life Support",
            TechField::Biology => "Biology",
        }
    }

    /// Parse the two-letter field abbreviation used in order scripts.
    /// Case-insensitive. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<TechField> {
        match token.to_ascii_uppercase().as_str() {
            "MI" => Some(TechField::Mining),
            "MA" => Some(TechField::Manufacturing),
            "ML" => Some(TechField::Military),
            "GV" => Some(TechField::Gravitics),
            "LS" => Some(TechField::LifeSupport),
            "BI" => Some(TechField::Biology),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TechVector
// ---------------------------------------------------------------------------

/// Six technology levels, indexable by [`TechField`]. `Copy`, so a
/// whole-vector snapshot is a plain assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechVector([u8; 6]);

impl TechVector {
    pub fn new(levels: [u8; 6]) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[u8; 6] {
        &self.0
    }
}

impl std::ops::Index<TechField> for TechVector {
    type Output = u8;

    fn index(&self, field: TechField) -> &u8 {
        &self.0[field.index()]
    }
}

impl std::ops::IndexMut<TechField> for TechVector {
    fn index_mut(&mut self, field: TechField) -> &mut u8 {
        &mut self.0[field.index()]
    }
}
