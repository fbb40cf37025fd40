use serde::{Deserialize, Serialize};

use super::team::TeamSide;

/// Final score pair handed to club record-keeping exactly once per match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchReport {
    pub home_name: String,
    pub away_name: String,
    pub score_home: u8,
    pub score_away: u8,
}

impl MatchReport {
    pub fn winner(&self) -> Option<TeamSide> {
        match self.score_home.cmp(&self.score_away) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// (goals for, goals against) from one side's point of view.
    pub fn score_for(&self, side: TeamSide) -> (u8, u8) {
        match side {
            TeamSide::Home => (self.score_home, self.score_away),
            TeamSide::Away => (self.score_away, self.score_home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(home: u8, away: u8) -> MatchReport {
        MatchReport {
            home_name: "Home FC".to_string(),
            away_name: "Away United".to_string(),
            score_home: home,
            score_away: away,
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(report(2, 1).winner(), Some(TeamSide::Home));
        assert_eq!(report(0, 3).winner(), Some(TeamSide::Away));
        assert_eq!(report(1, 1).winner(), None);
    }

    #[test]
    fn test_score_is_symmetric() {
        let r = report(2, 1);
        assert_eq!(r.score_for(TeamSide::Home), (2, 1));
        assert_eq!(r.score_for(TeamSide::Away), (1, 2));
    }
}
