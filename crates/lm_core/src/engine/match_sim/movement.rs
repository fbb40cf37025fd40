//! Off-ball movement over the occupancy grid.

use crate::engine::grid::OccupancyGrid;
use crate::engine::pathfind;
use crate::engine::pitch::{AttackDirection, GridPos};
use crate::models::team::TeamSide;

use super::MatchEngine;

impl MatchEngine {
    /// Rebuild the occupancy grid from all current coordinates (holder
    /// included) and walk every non-holder one BFS step toward its
    /// target. Movers mark their new cell immediately, so no two players
    /// share a cell once the phase completes; a player with no route
    /// simply holds position for the tick.
    pub(crate) fn update_movement(&mut self) {
        let mut grid = OccupancyGrid::for_pitch(&self.pitch);
        for p in &self.players {
            grid.mark(p.pos);
        }

        let holder = self.holder_track();
        for track in 0..self.players.len() {
            if Some(track) == holder {
                continue;
            }
            if self.players[track].role.is_goalkeeper() {
                // Keepers hold their line irrespective of possession.
                let home = self.players[track].home;
                self.players[track].pos = home;
                grid.mark(home);
                continue;
            }
            let current = self.players[track].pos;
            let target = self.movement_target(track, holder);
            if let Some(next) = pathfind::next_step_toward(&grid, current, target) {
                self.players[track].pos = next;
                grid.mark(next);
            } else {
                log::trace!("no route for track {} toward {:?}", track, target);
            }
        }
    }

    /// Home anchor, pushed toward the attacking third while the player's
    /// team holds the ball, and further for players supporting close to
    /// their own holder.
    fn movement_target(&self, track: usize, holder: Option<usize>) -> GridPos {
        let side = TeamSide::of_track(track);
        let player = &self.players[track];
        let mut target = player.home;

        let team_holder = holder.filter(|&h| TeamSide::of_track(h) == side);
        if let Some(h) = team_holder {
            let direction = self.attack_direction(side);
            let pushed = player.home.x + direction.sign() * self.config.attack_offset;
            // Never retreat from ground already gained.
            target.x = match direction {
                AttackDirection::Right => pushed.max(player.pos.x),
                AttackDirection::Left => pushed.min(player.pos.x),
            };
            if player.pos.distance(self.players[h].pos) < self.config.support_radius {
                target.x += direction.sign() * self.config.support_offset;
            }
        }

        self.pitch.clamp(target)
    }
}
