//! Interval shooting, saves, and goals.

use crate::engine::actions::{self, ShotContext, ShotOutcome, ShotRolls};
use crate::engine::events::MatchEvent;
use crate::models::team::TeamSide;

use super::{MatchEngine, MatchPhase};
use rand::Rng;

impl MatchEngine {
    /// Every `shot_interval` ticks an outfield holder may shoot, more
    /// readily from the attacking half. A save hands the ball to the
    /// defending goalkeeper; a goal scores and hands kickoff to the
    /// conceding side.
    pub(crate) fn resolve_shot(&mut self) {
        if self.clock.ticks() % self.config.shot_interval != 0 {
            return;
        }
        let Some(holder) = self.holder_track() else {
            return;
        };
        let (role, pos) = {
            let p = &self.players[holder];
            (p.role, p.pos)
        };
        if role.is_goalkeeper() {
            return;
        }

        let side = TeamSide::of_track(holder);
        let direction = self.attack_direction(side);
        let (attacking, defensive) = self.shot_chances(side);
        let ctx = ShotContext {
            in_attacking_half: self.pitch.in_attacking_half(pos, direction),
            attempt_chance_attacking: attacking,
            attempt_chance_defensive: defensive,
            save_chance: self.config.save_chance,
        };
        let rolls = ShotRolls { attempt_roll: self.rng.gen(), save_roll: self.rng.gen() };
        let outcome = actions::resolve_shot(&ctx, &rolls);
        self.apply_shot_outcome(side, holder, outcome);
    }

    pub(crate) fn apply_shot_outcome(
        &mut self,
        side: TeamSide,
        shooter: usize,
        outcome: ShotOutcome,
    ) {
        match outcome {
            ShotOutcome::NoAttempt => {}
            ShotOutcome::Saved => {
                if let Some(keeper) = self.goalkeeper_of(side.opponent()) {
                    self.give_ball(keeper);
                    self.emit(MatchEvent::save(
                        self.minute(),
                        side.opponent().is_home(),
                        keeper,
                    ));
                }
            }
            ShotOutcome::Goal => {
                match side {
                    TeamSide::Home => self.score_home = self.score_home.saturating_add(1),
                    TeamSide::Away => self.score_away = self.score_away.saturating_add(1),
                }
                self.emit(MatchEvent::goal(self.minute(), side.is_home(), shooter));
                self.clear_ball();
                self.phase = MatchPhase::AwaitingKickoff { side: side.opponent() };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::demo_engine;
    use super::*;

    #[test]
    fn test_zero_rolls_shot_is_saved_and_keeper_takes_over() {
        // Engine-level counterpart of the pinned-rolls resolver check:
        // a Saved outcome hands the ball to the defending keeper and the
        // score stays untouched.
        let mut engine = demo_engine(51);
        let shooter = 9;
        engine.give_ball(shooter);
        engine.apply_shot_outcome(TeamSide::Home, shooter, ShotOutcome::Saved);
        let keeper = engine.goalkeeper_of(TeamSide::Away).unwrap();
        assert_eq!(engine.holder_track(), Some(keeper));
        assert_eq!(engine.score(), (0, 0));
    }

    #[test]
    fn test_away_goal_increments_away_score() {
        let mut engine = demo_engine(52);
        let shooter = 20;
        engine.give_ball(shooter);
        engine.apply_shot_outcome(TeamSide::Away, shooter, ShotOutcome::Goal);
        assert_eq!(engine.score(), (0, 1));
        assert_eq!(engine.phase(), MatchPhase::AwaitingKickoff { side: TeamSide::Home });
    }

    #[test]
    fn test_goalkeeper_holder_never_shoots() {
        let mut engine = demo_engine(53);
        let keeper = engine.goalkeeper_of(TeamSide::Home).unwrap();
        engine.give_ball(keeper);
        // Interval gate open at tick zero; the role gate must hold.
        engine.resolve_shot();
        assert_eq!(engine.holder_track(), Some(keeper));
        assert_eq!(engine.score(), (0, 0));
    }

    #[test]
    fn test_off_interval_tick_never_shoots() {
        let mut engine = demo_engine(54);
        engine.give_ball(9);
        engine.clock.advance();
        assert_ne!(engine.clock.ticks() % engine.config.shot_interval, 0);
        engine.resolve_shot();
        assert_eq!(engine.holder_track(), Some(9));
        assert_eq!(engine.score(), (0, 0));
    }
}
