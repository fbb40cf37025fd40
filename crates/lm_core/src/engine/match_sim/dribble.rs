//! Holder drift. Runs first in the resolver order each tick.

use crate::engine::actions::{self, DribbleContext, DribbleRolls};
use crate::engine::pitch::GridPos;
use crate::models::team::TeamSide;

use super::MatchEngine;
use rand::Rng;

impl MatchEngine {
    /// The holder drifts horizontally toward the opponent's goal, one cell
    /// in its own half and two to three in the attacking half. A
    /// goalkeeper holder is pinned to its home coordinate instead.
    pub(crate) fn resolve_dribble(&mut self) {
        let Some(holder) = self.holder_track() else {
            return;
        };
        let (role, pos, home) = {
            let p = &self.players[holder];
            (p.role, p.pos, p.home)
        };

        if role.is_goalkeeper() {
            self.players[holder].pos = home;
            return;
        }

        let side = TeamSide::of_track(holder);
        let direction = self.attack_direction(side);
        let ctx = DribbleContext {
            in_attacking_half: self.pitch.in_attacking_half(pos, direction),
            step_own_half: self.config.dribble_step_own_half,
            step_attacking_min: self.config.dribble_step_attacking_min,
            step_attacking_max: self.config.dribble_step_attacking_max,
        };
        let rolls = DribbleRolls { step_roll: self.rng.gen() };
        let step = actions::resolve_dribble(&ctx, &rolls);

        // Take the longest drift that lands on a free cell; carrying the
        // ball into an occupied cell would break the one-player-per-cell
        // guarantee before the movement phase even runs.
        for magnitude in (1..=step).rev() {
            let next = self
                .pitch
                .clamp(GridPos::new(pos.x + direction.sign() * magnitude, pos.y));
            if next != pos && !self.cell_occupied_by_other(next, holder) {
                self.players[holder].pos = next;
                return;
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
    fn test_holder_drifts_toward_opponent_goal() {
        let mut engine = demo_engine(21);
        engine.tick(InputCommand::Confirm);
        let holder = engine.holder_track().unwrap();
        let before = engine.player(holder).unwrap().pos;
        engine.resolve_dribble();
        let after = engine.player(holder).unwrap().pos;
        // Home attacks rightward; the drift never goes backwards.
        assert!(after.x >= before.x);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn test_goalkeeper_holder_is_pinned_home() {
        let mut engine = demo_engine(22);
        engine.tick(InputCommand::Confirm);
        let keeper = engine.goalkeeper_of(crate::models::team::TeamSide::Home).unwrap();
        engine.give_ball(keeper);
        engine.resolve_dribble();
        let p = engine.player(keeper).unwrap();
        assert_eq!(p.pos, p.home);
    }

    #[test]
    fn test_drift_stays_inside_the_pitch() {
        let mut engine = demo_engine(23);
        engine.tick(InputCommand::Confirm);
        let holder = engine.holder_track().unwrap();
        // Park the holder on the attacked goal line.
        let edge = GridPos::new(engine.pitch().right, engine.pitch().center_y() - 3);
        engine.players[holder].pos = edge;
        engine.resolve_dribble();
        assert!(engine.pitch().contains(engine.player(holder).unwrap().pos));
    }
}
