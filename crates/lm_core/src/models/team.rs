use serde::{Deserialize, Serialize};

use super::player::{Role, SheetEntry};

/// Players per side on the pitch.
pub const LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn is_home(self) -> bool {
        matches!(self, TeamSide::Home)
    }

    /// Side owning a track index. Track order is home lineup 0..11,
    /// away lineup 11..22.
    pub fn of_track(track: usize) -> Self {
        if track < LINEUP_SIZE {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }
}

/// Immutable lineup snapshot consumed from squad selection. The engine
/// clones what it needs at match start and writes nothing back until the
/// final report, so club records and the simulation never alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSheet {
    pub name: String,
    pub entries: Vec<SheetEntry>,
}

impl TeamSheet {
    pub fn new(name: impl Into<String>, entries: Vec<SheetEntry>) -> Self {
        Self { name: name.into(), entries }
    }

    /// Parse a sheet from the JSON hand-off format squad selection emits.
    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve the sheet into exactly one entry per lineup slot.
    ///
    /// For each slot the highest-rated unassigned entry matching the slot
    /// role is picked, then any unassigned entry, then a synthesized
    /// placeholder. Whoever fills a slot plays the slot role, so a side
    /// fields exactly one goalkeeper: surplus keepers are demoted into
    /// outfield slots and a keeperless sheet gets a stand-in. Undersized
    /// sheets (even empty ones) degrade to placeholders, never an error.
    pub fn lineup(&self, slot_roles: &[Role; LINEUP_SIZE]) -> Vec<SheetEntry> {
        let mut taken = vec![false; self.entries.len()];
        let mut lineup = Vec::with_capacity(LINEUP_SIZE);

        for (slot, &role) in slot_roles.iter().enumerate() {
            let pick = self
                .best_unassigned(&taken, |e| e.role == role)
                .or_else(|| self.best_unassigned(&taken, |_| true));
            match pick {
                Some(idx) => {
                    taken[idx] = true;
                    let mut entry = self.entries[idx].clone();
                    entry.role = role;
                    lineup.push(entry);
                }
                None => lineup.push(SheetEntry::placeholder(slot, role)),
            }
        }

        lineup
    }

    fn best_unassigned(
        &self,
        taken: &[bool],
        matches: impl Fn(&SheetEntry) -> bool,
    ) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|&(i, e)| !taken[i] && matches(e))
            .max_by_key(|&(_, e)| e.rating)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_433() -> [Role; LINEUP_SIZE] {
        [
            Role::Goalkeeper,
            Role::Defender,
            Role::Defender,
            Role::Defender,
            Role::Defender,
            Role::Midfielder,
            Role::Midfielder,
            Role::Midfielder,
            Role::Forward,
            Role::Forward,
            Role::Forward,
        ]
    }

    fn full_sheet() -> TeamSheet {
        let mut entries = vec![SheetEntry::new("Keeper", Role::Goalkeeper, 70)];
        for i in 0..4 {
            entries.push(SheetEntry::new(format!("Back {}", i), Role::Defender, 68));
        }
        for i in 0..3 {
            entries.push(SheetEntry::new(format!("Mid {}", i), Role::Midfielder, 69));
        }
        for i in 0..3 {
            entries.push(SheetEntry::new(format!("Striker {}", i), Role::Forward, 71));
        }
        TeamSheet::new("Test FC", entries)
    }

    #[test]
    fn test_full_sheet_keeps_names_and_roles() {
        let lineup = full_sheet().lineup(&slots_433());
        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert_eq!(lineup[0].name, "Keeper");
        assert!(lineup[0].role.is_goalkeeper());
        assert_eq!(lineup.iter().filter(|e| e.role.is_goalkeeper()).count(), 1);
    }

    #[test]
    fn test_empty_sheet_synthesizes_eleven_placeholders() {
        let lineup = TeamSheet::new("Ghost FC", Vec::new()).lineup(&slots_433());
        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert!(lineup.iter().all(|e| e.name.starts_with("Trialist")));
        assert_eq!(lineup.iter().filter(|e| e.role.is_goalkeeper()).count(), 1);
    }

    #[test]
    fn test_surplus_keepers_are_demoted() {
        let entries = (0..11)
            .map(|i| SheetEntry::new(format!("Keeper {}", i), Role::Goalkeeper, 60 + i as u8))
            .collect();
        let lineup = TeamSheet::new("Gloves FC", entries).lineup(&slots_433());
        assert_eq!(lineup.iter().filter(|e| e.role.is_goalkeeper()).count(), 1);
        // The strongest keeper gets the gloves.
        assert_eq!(lineup[0].name, "Keeper 10");
    }

    #[test]
    fn test_oversized_sheet_prefers_highest_rated() {
        let mut sheet = full_sheet();
        sheet.entries.push(SheetEntry::new("Star", Role::Forward, 95));
        sheet.entries.push(SheetEntry::new("Benchwarmer", Role::Forward, 40));
        let lineup = sheet.lineup(&slots_433());
        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert!(lineup.iter().any(|e| e.name == "Star"));
        assert!(!lineup.iter().any(|e| e.name == "Benchwarmer"));
    }

    #[test]
    fn test_missing_keeper_falls_back_to_outfield_entry() {
        // Eleven outfielders and no keeper: someone goes in goal.
        let entries = (0..11)
            .map(|i| SheetEntry::new(format!("Out {}", i), Role::Midfielder, 60))
            .collect();
        let lineup = TeamSheet::new("No Gloves FC", entries).lineup(&slots_433());
        assert!(lineup[0].role.is_goalkeeper());
        assert_eq!(lineup.iter().filter(|e| e.role.is_goalkeeper()).count(), 1);
    }

    #[test]
    fn test_from_json_reports_malformed_sheets() {
        let parsed = TeamSheet::from_json(
            r#"{"name": "JSON FC", "entries": [{"name": "A", "role": "forward", "rating": 70}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.name, "JSON FC");
        assert_eq!(parsed.entries.len(), 1);

        let err = TeamSheet::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::EngineError::Serialization(_)));
    }

    #[test]
    fn test_track_side_split() {
        assert_eq!(TeamSide::of_track(0), TeamSide::Home);
        assert_eq!(TeamSide::of_track(10), TeamSide::Home);
        assert_eq!(TeamSide::of_track(11), TeamSide::Away);
        assert_eq!(TeamSide::of_track(21), TeamSide::Away);
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
    }
}
