//! Live match terminal runner.
//!
//! Drives one `lm_core` match per invocation: either rendered tick by
//! tick in the terminal (watch mode) or straight to the final report
//! (`--headless`). Team sheets load from JSON files shaped like
//! `{"name": "...", "entries": [{"name": "...", "role": "forward",
//! "rating": 74}, ...]}`; missing sheets fall back to demo squads and
//! short sheets degrade to synthesized placeholders inside the engine.

mod input;
mod render;

use std::path::PathBuf;
use std::time::Duration;
use std::{fs, thread};

use anyhow::{Context, Result};
use clap::Parser;

use input::InputChannel;
use lm_core::{
    EventType, Formation, MatchEngine, MatchPlan, MatchReport, Role, SheetEntry, TeamSheet,
    TeamSide,
};

#[derive(Parser)]
#[command(name = "lm_cli")]
#[command(about = "Run a live football match simulation in the terminal", long_about = None)]
struct Cli {
    /// RNG seed for the match
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Speed multiplier: simulation ticks per second in watch mode
    #[arg(long, default_value_t = 10)]
    speed: u32,

    /// Home team sheet JSON path
    #[arg(long)]
    home: Option<PathBuf>,

    /// Away team sheet JSON path
    #[arg(long)]
    away: Option<PathBuf>,

    /// Formation code for both teams (4-3-3, 4-4-2, 3-5-2)
    #[arg(long, default_value = "4-3-3")]
    formation: String,

    /// Simulate straight to full time and print the report
    #[arg(long, default_value_t = false)]
    headless: bool,
}

/// Win/loss bookkeeping for one club; lives outside the engine and is fed
/// exactly one report per match.
#[derive(Debug, Default)]
struct ClubRecord {
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
}

impl ClubRecord {
    fn record(&mut self, goals_for: u8, goals_against: u8) {
        self.played += 1;
        self.goals_for += goals_for as u32;
        self.goals_against += goals_against as u32;
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let home_sheet = load_sheet(cli.home.as_deref(), "Home FC")?;
    let away_sheet = load_sheet(cli.away.as_deref(), "Away United")?;
    let formation = Formation::from_code(&cli.formation)
        .with_context(|| format!("unknown formation: {}", cli.formation))?;

    let mut plan = MatchPlan::friendly(home_sheet, away_sheet, cli.seed);
    plan.home_formation = formation;
    plan.away_formation = formation;

    let mut engine = MatchEngine::new(plan).context("match setup failed")?;

    let report = if cli.headless {
        run_headless(&mut engine)
    } else {
        run_watch(&mut engine, cli.speed)?
    };

    print_report(&engine, &report);
    Ok(())
}

fn load_sheet(path: Option<&std::path::Path>, fallback_name: &str) -> Result<TeamSheet> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading team sheet {}", path.display()))?;
            TeamSheet::from_json(&text)
                .with_context(|| format!("parsing team sheet {}", path.display()))
        }
        None => Ok(demo_sheet(fallback_name)),
    }
}

fn demo_sheet(name: &str) -> TeamSheet {
    let mut entries = vec![SheetEntry::new(format!("{} Keeper", name), Role::Goalkeeper, 70)];
    for i in 1..=4 {
        entries.push(SheetEntry::new(format!("{} Back {}", name, i), Role::Defender, 68));
    }
    for i in 1..=3 {
        entries.push(SheetEntry::new(format!("{} Mid {}", name, i), Role::Midfielder, 69));
    }
    for i in 1..=3 {
        entries.push(SheetEntry::new(format!("{} Striker {}", name, i), Role::Forward, 71));
    }
    TeamSheet::new(name, entries)
}

fn run_headless(engine: &mut MatchEngine) -> MatchReport {
    let report = engine.simulate();
    for event in engine.events() {
        println!("{}", format_event(engine, event));
    }
    report
}

/// One tick, one input poll, one render pass per iteration. The sleep
/// length comes from the speed multiplier and is shortened while paused
/// so resumes feel immediate.
fn run_watch(engine: &mut MatchEngine, speed: u32) -> Result<MatchReport> {
    let input = InputChannel::spawn();
    let tick_sleep = Duration::from_millis(1000 / u64::from(speed.max(1)));
    let paused_sleep = tick_sleep.min(Duration::from_millis(50));
    let mut seen_events = 0;

    loop {
        let phase = engine.tick(input.poll());

        let pitch = *engine.pitch();
        let frame = engine.frame();
        let home = engine.team_name(TeamSide::Home).to_string();
        let away = engine.team_name(TeamSide::Away).to_string();
        print!("\x1b[2J\x1b[H{}", render::render(&frame, &pitch, &home, &away));
        for event in &engine.events()[seen_events..] {
            println!("{}", format_event(engine, event));
        }
        seen_events = engine.events().len();

        if phase.is_ended() {
            break;
        }
        thread::sleep(if phase == lm_core::MatchPhase::Paused { paused_sleep } else { tick_sleep });
    }

    Ok(engine.take_report().unwrap_or_else(|| MatchReport {
        home_name: engine.team_name(TeamSide::Home).to_string(),
        away_name: engine.team_name(TeamSide::Away).to_string(),
        score_home: engine.score().0,
        score_away: engine.score().1,
    }))
}

fn format_event(engine: &MatchEngine, event: &lm_core::MatchEvent) -> String {
    let actor = event
        .player_track_id
        .and_then(|t| engine.player(t as usize))
        .map(|p| p.name.as_str())
        .unwrap_or("");
    let label = match event.event_type {
        EventType::KickOff => "kick-off",
        EventType::Goal => "GOAL!",
        EventType::Save => "save",
        EventType::Tackle => "tackle",
        EventType::Interception => "pass cut out",
        EventType::HalfTime => "half-time",
        EventType::FullTime => "full-time",
    };
    format!("{:>3}' {} {}", event.minute, label, actor)
}

fn print_report(engine: &MatchEngine, report: &MatchReport) {
    let mut home_record = ClubRecord::default();
    let mut away_record = ClubRecord::default();
    let (home_gf, home_ga) = report.score_for(TeamSide::Home);
    let (away_gf, away_ga) = report.score_for(TeamSide::Away);
    home_record.record(home_gf, home_ga);
    away_record.record(away_gf, away_ga);

    println!();
    println!(
        "Final score: {} {} - {} {}",
        report.home_name, report.score_home, report.score_away, report.away_name
    );
    for (name, record) in
        [(engine.team_name(TeamSide::Home), &home_record), (engine.team_name(TeamSide::Away), &away_record)]
    {
        println!(
            "{}: P{} W{} D{} L{} GF{} GA{}",
            name, record.played, record.won, record.drawn, record.lost, record.goals_for,
            record.goals_against
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_record_tallies() {
        let mut record = ClubRecord::default();
        record.record(2, 1);
        record.record(0, 0);
        record.record(1, 3);
        assert_eq!(record.played, 3);
        assert_eq!(record.won, 1);
        assert_eq!(record.drawn, 1);
        assert_eq!(record.lost, 1);
        assert_eq!(record.goals_for, 3);
        assert_eq!(record.goals_against, 4);
    }

    #[test]
    fn test_demo_sheet_fills_a_lineup() {
        let sheet = demo_sheet("Demo FC");
        assert_eq!(sheet.entries.len(), 11);
        assert_eq!(sheet.entries.iter().filter(|e| e.role.is_goalkeeper()).count(), 1);
    }

    #[test]
    fn test_headless_match_produces_report() {
        let plan = MatchPlan::friendly(demo_sheet("Alpha"), demo_sheet("Beta"), 3);
        let mut engine = MatchEngine::new(plan).unwrap();
        let report = run_headless(&mut engine);
        assert_eq!(report.home_name, "Alpha");
        assert_eq!(report.away_name, "Beta");
    }
}
