//! Shared fixtures for engine tests.

use crate::models::player::{Role, SheetEntry};
use crate::models::team::TeamSheet;

use super::{MatchEngine, MatchPlan};

pub(crate) fn demo_sheet(name: &str) -> TeamSheet {
    let mut entries = vec![SheetEntry::new(format!("{} GK", name), Role::Goalkeeper, 70)];
    for i in 0..4 {
        entries.push(SheetEntry::new(format!("{} DF {}", name, i), Role::Defender, 68));
    }
    for i in 0..3 {
        entries.push(SheetEntry::new(format!("{} MF {}", name, i), Role::Midfielder, 69));
    }
    for i in 0..3 {
        entries.push(SheetEntry::new(format!("{} FW {}", name, i), Role::Forward, 71));
    }
    TeamSheet::new(name, entries)
}

pub(crate) fn demo_plan(seed: u64) -> MatchPlan {
    MatchPlan::friendly(demo_sheet("Home FC"), demo_sheet("Away United"), seed)
}

pub(crate) fn demo_engine(seed: u64) -> MatchEngine {
    MatchEngine::new(demo_plan(seed)).unwrap()
}
