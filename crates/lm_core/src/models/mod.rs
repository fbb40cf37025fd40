pub mod match_report;
pub mod player;
pub mod team;

pub use match_report::MatchReport;
pub use player::{Role, SheetEntry};
pub use team::{TeamSheet, TeamSide, LINEUP_SIZE};
