use serde::{Deserialize, Serialize};

/// Closed set of on-pitch roles.
///
/// Squad selection maps whatever position taxonomy it carries onto these
/// four categories before a match; the engine never matches on free-text
/// position tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Role::Goalkeeper)
    }

    pub fn is_outfield(&self) -> bool {
        !self.is_goalkeeper()
    }
}

/// One line of a team sheet: the lineup data the engine consumes from
/// squad selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetEntry {
    pub name: String,
    pub role: Role,
    pub rating: u8,
}

impl SheetEntry {
    pub fn new(name: impl Into<String>, role: Role, rating: u8) -> Self {
        Self { name: name.into(), role, rating }
    }

    /// Synthesized stand-in for an unfilled lineup slot.
    pub fn placeholder(slot: usize, role: Role) -> Self {
        Self { name: format!("Trialist {}", slot + 1), role, rating: 50 }
    }
}
