//! Possession challenges around the holder.

use crate::engine::actions::{self, TackleContext, TackleRolls};
use crate::engine::events::MatchEvent;
use crate::models::team::TeamSide;

use super::MatchEngine;
use rand::Rng;

impl MatchEngine {
    /// Every outfield opponent within `tackle_radius` of the holder gets
    /// an independent fixed-probability challenge, scanned in roster
    /// order; the first success takes the ball and ends the scan for the
    /// tick.
    pub(crate) fn resolve_tackles(&mut self) {
        let Some(holder) = self.holder_track() else {
            return;
        };
        let holder_pos = self.players[holder].pos;
        let defending = TeamSide::of_track(holder).opponent();
        let chance = self.tackle_chance(defending);

        for track in self.track_range(defending) {
            let challenger = &self.players[track];
            if challenger.role.is_goalkeeper() {
                continue;
            }
            let distance = challenger.pos.distance(holder_pos);
            if distance > self.config.tackle_radius {
                continue;
            }
            let ctx = TackleContext {
                distance,
                radius: self.config.tackle_radius,
                tackle_chance: chance,
            };
            let rolls = TackleRolls { success_roll: self.rng.gen() };
            if actions::resolve_tackle(&ctx, &rolls).success {
                self.give_ball(track);
                self.emit(MatchEvent::tackle(self.minute(), defending.is_home(), track));
                break;
            }
        }
    }
}
