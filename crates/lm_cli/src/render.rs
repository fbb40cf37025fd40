//! ASCII renderer over the engine's per-tick render frames.

use lm_core::{MatchPhase, Pitch, RenderFrame};

/// Paint one frame into a text buffer: border, players, scoreboard.
/// Home players draw as `H`, away as `A`, the holder as `@`.
pub fn render(frame: &RenderFrame, pitch: &Pitch, home_name: &str, away_name: &str) -> String {
    let cols = pitch.cols() + 2;
    let rows = pitch.rows() + 2;
    let mut cells = vec![vec![' '; cols]; rows];

    for c in cells[0].iter_mut() {
        *c = '-';
    }
    for c in cells[rows - 1].iter_mut() {
        *c = '-';
    }
    for row in cells.iter_mut() {
        row[0] = '|';
        row[cols - 1] = '|';
    }
    let center = pitch.cols() / 2 + 1;
    for row in cells.iter_mut().take(rows - 1).skip(1) {
        row[center] = ':';
    }

    for marker in &frame.players {
        let gx = (marker.x - pitch.left) as usize + 1;
        let gy = (marker.y - pitch.top) as usize + 1;
        cells[gy][gx] = if marker.has_ball {
            '@'
        } else if marker.is_home_team {
            'H'
        } else {
            'A'
        };
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}' | {} {} - {} {} | {}\n",
        frame.minute,
        home_name,
        frame.score_home,
        frame.score_away,
        away_name,
        phase_label(frame.phase)
    ));
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn phase_label(phase: MatchPhase) -> &'static str {
    match phase {
        MatchPhase::AwaitingKickoff { .. } => "kickoff - press Enter",
        MatchPhase::Running => "live",
        MatchPhase::Paused => "paused - p resumes",
        MatchPhase::HalfBreak => "half-time - press Enter",
        MatchPhase::Ended => "full time",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lm_core::{InputCommand, MatchEngine, MatchPlan, TeamSheet};

    #[test]
    fn test_render_places_22_markers() {
        let plan = MatchPlan::friendly(
            TeamSheet::new("Home FC", Vec::new()),
            TeamSheet::new("Away United", Vec::new()),
            1,
        );
        let mut engine = MatchEngine::new(plan).unwrap();
        engine.tick(InputCommand::Confirm);
        let pitch = *engine.pitch();
        let text = render(&engine.frame(), &pitch, "Home FC", "Away United");
        let markers = text.chars().filter(|c| matches!(c, 'H' | 'A' | '@')).count();
        assert_eq!(markers, 22);
        assert!(text.contains("Home FC 0 - 0 Away United"));
    }
}
