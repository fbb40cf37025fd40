//! Interval passing.

use crate::engine::actions::{self, PassContext, PassOutcome, PassRolls};
use crate::engine::events::MatchEvent;
use crate::models::team::TeamSide;

use super::MatchEngine;
use rand::Rng;

impl MatchEngine {
    /// Every `pass_interval` ticks the holder plays the ball to a
    /// uniformly random teammate. A failed pass leaves possession with the
    /// passer: the ball is neither loose nor a defender's (see DESIGN.md).
    pub(crate) fn resolve_pass(&mut self) {
        if self.clock.ticks() % self.config.pass_interval != 0 {
            return;
        }
        let Some(holder) = self.holder_track() else {
            return;
        };
        let side = TeamSide::of_track(holder);
        let teammates: Vec<usize> = self.track_range(side).filter(|&t| t != holder).collect();
        if teammates.is_empty() {
            return;
        }
        let receiver = teammates[self.rng.gen_range(0..teammates.len())];

        let ctx = PassContext { interception_chance: self.config.interception_chance };
        let rolls = PassRolls { steal_roll: self.rng.gen() };
        match actions::resolve_pass(&ctx, &rolls) {
            PassOutcome::Completed => self.give_ball(receiver),
            PassOutcome::Intercepted => {
                self.emit(MatchEvent::interception(self.minute(), side.is_home(), holder));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::demo_engine;
    use super::*;
    use crate::engine::match_sim::InputCommand;

    #[test]
    fn test_possession_only_moves_on_interval_ticks() {
        let mut engine = demo_engine(41);
        // Tackles need range; disable them so passes and shots are the
        // only ways possession can move.
        engine.config.tackle_radius = 0.0;
        engine.tick(InputCommand::Confirm);
        for _ in 0..200 {
            let before = engine.holder_track();
            let tick_after = engine.clock.ticks() + 1;
            if engine.tick(InputCommand::None) != crate::engine::match_sim::MatchPhase::Running {
                break;
            }
            if tick_after % engine.config.pass_interval != 0
                && tick_after % engine.config.shot_interval != 0
            {
                assert_eq!(
                    before,
                    engine.holder_track(),
                    "possession moved off-interval at tick {}",
                    tick_after
                );
            }
        }
    }

    #[test]
    fn test_completed_pass_stays_within_the_team() {
        let mut engine = demo_engine(42);
        let passer = 7;
        engine.give_ball(passer);
        engine.config.interception_chance = 0.0;
        // Tick counter still reads zero, so the interval gate is open.
        engine.resolve_pass();
        let holder = engine.holder_track().unwrap();
        assert_eq!(TeamSide::of_track(holder), TeamSide::Home);
        assert_ne!(holder, passer, "the receiver excludes the passer");
        assert_eq!(engine.holder_count(), 1);
    }

    #[test]
    fn test_intercepted_pass_keeps_the_passer() {
        let ctx = PassContext { interception_chance: 1.0 };
        let rolls = PassRolls { steal_roll: 0.5 };
        assert_eq!(actions::resolve_pass(&ctx, &rolls), PassOutcome::Intercepted);

        let mut engine = demo_engine(43);
        let passer = 9;
        engine.give_ball(passer);
        engine.config.interception_chance = 1.0;
        engine.resolve_pass();
        assert_eq!(
            engine.holder_track(),
            Some(passer),
            "interception leaves the passer in possession"
        );
        assert!(engine
            .events()
            .iter()
            .any(|e| e.event_type == crate::engine::events::EventType::Interception));
    }

    #[test]
    fn test_off_interval_tick_never_passes() {
        let mut engine = demo_engine(44);
        let passer = 5;
        engine.give_ball(passer);
        engine.config.interception_chance = 0.0;
        engine.clock.advance();
        assert_ne!(engine.clock.ticks() % engine.config.pass_interval, 0);
        engine.resolve_pass();
        assert_eq!(engine.holder_track(), Some(passer));
    }
}
