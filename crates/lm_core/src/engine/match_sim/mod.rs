//! Tick-driven match simulation.
//!
//! One `tick` call runs one simulation step: the clock advances, then the
//! possession resolvers fire in fixed order (dribble, tackle, pass, shot —
//! the order is also the tie-break between simultaneously eligible
//! events), then the half-time check, then collision-free movement over a
//! freshly rebuilt occupancy grid, and finally a `RenderFrame` can be
//! handed to the display layer.
//!
//! The engine is single-threaded and cooperative: exactly one tick
//! executes at a time, every event resolves synchronously within its
//! tick, and the per-match `ChaCha8Rng` is owned here and never shared.

mod dribble;
mod movement;
mod passing;
mod phase;
mod shooting;
mod snapshot;
mod tackle;
#[cfg(test)]
pub(crate) mod test_fixtures;
mod user_command;

pub use phase::{MatchClock, MatchPhase};
pub use snapshot::{PlayerMarker, RenderFrame};
pub use user_command::InputCommand;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::config::{EngineConfig, TacticalPreset};
use crate::engine::events::MatchEvent;
use crate::engine::formation::{assign_home_positions, Formation};
use crate::engine::pitch::{AttackDirection, GridPos, Pitch};
use crate::error::{EngineError, Result};
use crate::models::player::Role;
use crate::models::team::{TeamSheet, TeamSide, LINEUP_SIZE};
use crate::models::MatchReport;

pub const PLAYERS_ON_PITCH: usize = LINEUP_SIZE * 2;

/// Everything needed to start a match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub home_sheet: TeamSheet,
    pub away_sheet: TeamSheet,
    pub home_formation: Formation,
    pub away_formation: Formation,
    pub home_preset: TacticalPreset,
    pub away_preset: TacticalPreset,
    pub pitch: Pitch,
    pub config: EngineConfig,
    pub seed: u64,
}

impl MatchPlan {
    /// Plan with default pitch, formations, presets and tuning.
    pub fn friendly(home_sheet: TeamSheet, away_sheet: TeamSheet, seed: u64) -> Self {
        Self {
            home_sheet,
            away_sheet,
            home_formation: Formation::default(),
            away_formation: Formation::default(),
            home_preset: TacticalPreset::default(),
            away_preset: TacticalPreset::default(),
            pitch: Pitch::default(),
            config: EngineConfig::default(),
            seed,
        }
    }
}

/// One on-pitch player, owned by the engine for the match's duration and
/// mutated every tick. Never destroyed mid-match.
#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub name: String,
    pub role: Role,
    pub rating: u8,
    pub pos: GridPos,
    pub home: GridPos,
    pub has_ball: bool,
}

pub struct MatchEngine {
    rng: ChaCha8Rng,
    config: EngineConfig,
    pitch: Pitch,
    home_name: String,
    away_name: String,
    home_formation: Formation,
    away_formation: Formation,
    home_preset: TacticalPreset,
    away_preset: TacticalPreset,
    /// Track order: home lineup 0..11, away lineup 11..22.
    players: Vec<MatchPlayer>,
    clock: MatchClock,
    phase: MatchPhase,
    score_home: u8,
    score_away: u8,
    first_kickoff_side: TeamSide,
    halftime_reached: bool,
    report: Option<MatchReport>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn new(plan: MatchPlan) -> Result<Self> {
        plan.config.validate().map_err(EngineError::Config)?;
        plan.pitch.validate().map_err(EngineError::Config)?;

        let mut players = Vec::with_capacity(PLAYERS_ON_PITCH);
        for (sheet, formation, direction) in [
            (&plan.home_sheet, plan.home_formation, AttackDirection::Right),
            (&plan.away_sheet, plan.away_formation, AttackDirection::Left),
        ] {
            let homes = assign_home_positions(formation, &plan.pitch, direction);
            for (entry, home) in sheet.lineup(&formation.slot_roles()).into_iter().zip(homes) {
                players.push(MatchPlayer {
                    name: entry.name,
                    role: entry.role,
                    rating: entry.rating,
                    pos: home,
                    home,
                    has_ball: false,
                });
            }
        }

        let clock = MatchClock::new(plan.config.tick_minutes);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(plan.seed),
            config: plan.config,
            pitch: plan.pitch,
            home_name: plan.home_sheet.name,
            away_name: plan.away_sheet.name,
            home_formation: plan.home_formation,
            away_formation: plan.away_formation,
            home_preset: plan.home_preset,
            away_preset: plan.away_preset,
            players,
            clock,
            phase: MatchPhase::AwaitingKickoff { side: TeamSide::Home },
            score_home: 0,
            score_away: 0,
            first_kickoff_side: TeamSide::Home,
            halftime_reached: false,
            report: None,
            events: Vec::new(),
        })
    }

    // ===========================================
    // Accessors
    // ===========================================

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> (u8, u8) {
        (self.score_home, self.score_away)
    }

    pub fn minute(&self) -> u32 {
        self.clock.minute()
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn player(&self, track: usize) -> Option<&MatchPlayer> {
        self.players.get(track)
    }

    /// All 22 on-pitch players in track order.
    pub fn players(&self) -> &[MatchPlayer] {
        &self.players
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_name,
            TeamSide::Away => &self.away_name,
        }
    }

    /// Current ball holder's track id, if any.
    pub fn holder_track(&self) -> Option<usize> {
        self.players.iter().position(|p| p.has_ball)
    }

    /// Players holding the ball across both squads. 0 or 1 in any correct
    /// execution.
    pub fn holder_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_ball).count()
    }

    fn track_range(&self, side: TeamSide) -> std::ops::Range<usize> {
        match side {
            TeamSide::Home => 0..LINEUP_SIZE,
            TeamSide::Away => LINEUP_SIZE..PLAYERS_ON_PITCH,
        }
    }

    /// Fixed for the whole match: home attacks right, away attacks left.
    /// Ends are never swapped between halves.
    fn attack_direction(&self, side: TeamSide) -> AttackDirection {
        match side {
            TeamSide::Home => AttackDirection::Right,
            TeamSide::Away => AttackDirection::Left,
        }
    }

    fn preset_of(&self, side: TeamSide) -> TacticalPreset {
        match side {
            TeamSide::Home => self.home_preset,
            TeamSide::Away => self.away_preset,
        }
    }

    pub(crate) fn shot_chances(&self, side: TeamSide) -> (f64, f64) {
        let bonus = self.preset_of(side).shot_bonus();
        (
            (self.config.shot_chance_attacking + bonus).clamp(0.0, 1.0),
            (self.config.shot_chance_defensive + bonus).clamp(0.0, 1.0),
        )
    }

    pub(crate) fn tackle_chance(&self, side: TeamSide) -> f64 {
        (self.config.tackle_chance + self.preset_of(side).tackle_bonus()).clamp(0.0, 1.0)
    }

    pub(crate) fn goalkeeper_of(&self, side: TeamSide) -> Option<usize> {
        self.track_range(side).find(|&t| self.players[t].role.is_goalkeeper())
    }

    // ===========================================
    // Possession
    // ===========================================

    /// Hand the ball to one player, clearing every other flag in the same
    /// operation.
    pub(crate) fn give_ball(&mut self, track: usize) {
        for p in &mut self.players {
            p.has_ball = false;
        }
        self.players[track].has_ball = true;
    }

    pub(crate) fn clear_ball(&mut self) {
        for p in &mut self.players {
            p.has_ball = false;
        }
    }

    /// Kickoff taker: a random forward, falling back to any outfielder,
    /// then to the first player.
    fn select_kickoff_player(&mut self, side: TeamSide) -> usize {
        let range = self.track_range(side);
        let forwards: Vec<usize> = range
            .clone()
            .filter(|&t| matches!(self.players[t].role, Role::Forward))
            .collect();
        let candidates: Vec<usize> = if forwards.is_empty() {
            range.clone().filter(|&t| self.players[t].role.is_outfield()).collect()
        } else {
            forwards
        };
        match candidates.len() {
            0 => range.start,
            n => candidates[self.rng.gen_range(0..n)],
        }
    }

    fn start_kickoff(&mut self, side: TeamSide) {
        let taker = self.select_kickoff_player(side);
        self.give_ball(taker);
        self.emit(MatchEvent::kick_off(self.clock.minute(), side.is_home(), taker));
        self.phase = MatchPhase::Running;
    }

    // ===========================================
    // Tick pipeline
    // ===========================================

    /// One loop iteration: apply the input event, then, if the match is
    /// running, one simulation step. Returns the phase after the step so
    /// the outer loop can poll for confirmation gates.
    pub fn tick(&mut self, command: InputCommand) -> MatchPhase {
        self.apply_command(command);

        if self.phase == MatchPhase::Running {
            self.clock.advance();
            if self.clock.minutes() >= self.config.full_time_minute {
                self.end_match();
                return self.phase;
            }

            self.resolve_dribble();
            self.resolve_tackles();
            self.resolve_pass();
            self.resolve_shot();
            self.check_half_time();
            self.update_movement();

            debug_assert!(
                self.holder_count() <= 1,
                "possession contract violated: {} holders",
                self.holder_count()
            );
            #[cfg(feature = "strict_contracts")]
            assert!(self.holder_count() <= 1, "possession contract violated");
        }

        self.phase
    }

    fn apply_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::None => {}
            InputCommand::Quit => {
                if !self.phase.is_ended() {
                    self.end_match();
                }
            }
            InputCommand::TogglePause => {
                self.phase = match self.phase {
                    MatchPhase::Running => MatchPhase::Paused,
                    MatchPhase::Paused => MatchPhase::Running,
                    other => other,
                };
            }
            InputCommand::Confirm => match self.phase {
                MatchPhase::AwaitingKickoff { side } => self.start_kickoff(side),
                MatchPhase::HalfBreak => self.restart_second_half(),
                _ => {}
            },
        }
    }

    fn check_half_time(&mut self) {
        if !self.halftime_reached && self.clock.minutes() >= self.config.half_time_minute {
            self.halftime_reached = true;
            self.clear_ball();
            self.emit(MatchEvent::half_time(self.clock.minute()));
            self.phase = MatchPhase::HalfBreak;
        }
    }

    /// Second half: formation assignment runs again with the unchanged
    /// direction flags, and kickoff goes to the team that did not start
    /// the match.
    fn restart_second_half(&mut self) {
        for (side, formation) in
            [(TeamSide::Home, self.home_formation), (TeamSide::Away, self.away_formation)]
        {
            let homes = assign_home_positions(formation, &self.pitch, self.attack_direction(side));
            for (track, home) in self.track_range(side).zip(homes) {
                self.players[track].home = home;
            }
        }
        self.start_kickoff(self.first_kickoff_side.opponent());
    }

    fn end_match(&mut self) {
        if self.phase.is_ended() {
            return;
        }
        self.phase = MatchPhase::Ended;
        self.emit(MatchEvent::full_time(self.clock.minute()));
        self.report = Some(MatchReport {
            home_name: self.home_name.clone(),
            away_name: self.away_name.clone(),
            score_home: self.score_home,
            score_away: self.score_away,
        });
    }

    /// The final score, yielded exactly once after the match has ended.
    pub fn take_report(&mut self) -> Option<MatchReport> {
        if self.phase.is_ended() {
            self.report.take()
        } else {
            None
        }
    }

    /// Run to full time without a host loop, auto-confirming every gate.
    pub fn simulate(&mut self) -> MatchReport {
        // 900 running ticks plus a confirmation tick per restart; the
        // bound only guards against a stuck phase.
        let max_iterations = 4 * (self.config.full_time_minute / self.config.tick_minutes) as u64;
        for _ in 0..max_iterations {
            let command = if self.phase.awaits_confirmation() {
                InputCommand::Confirm
            } else {
                InputCommand::None
            };
            if self.tick(command).is_ended() {
                break;
            }
        }
        if !self.phase.is_ended() {
            self.end_match();
        }
        self.take_report().unwrap_or_else(|| MatchReport {
            home_name: self.home_name.clone(),
            away_name: self.away_name.clone(),
            score_home: self.score_home,
            score_away: self.score_away,
        })
    }

    pub(crate) fn emit(&mut self, event: MatchEvent) {
        let actor = event
            .player_track_id
            .and_then(|t| self.players.get(t as usize))
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        log::info!(
            "{}' {:?} ({}) {}",
            event.minute,
            event.event_type,
            if event.is_home_team { &self.home_name } else { &self.away_name },
            actor
        );
        self.events.push(event);
    }

    /// Whether any player other than `exclude` stands on `pos`.
    pub(crate) fn cell_occupied_by_other(&self, pos: GridPos, exclude: usize) -> bool {
        self.players.iter().enumerate().any(|(i, p)| i != exclude && p.pos == pos)
    }
}
