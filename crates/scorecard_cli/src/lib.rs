//! Scorecard CLI Library
//!
//! File-driven helpers behind the `scorecard` binary:
//! event script → final count, team sheet → validation report,
//! BA feed → leaderboard.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use scorecard_core::{
    leaderboard, AtBatState, BattingAverageEntry, CounterRules, LeaderboardRow, ScorecardConfig,
    ScorecardSession, ScoreboardMarkers, ScoringEvent, TeamSheet,
};

/// Result of replaying an event script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub rules: CounterRules,
    pub events_applied: usize,
    pub state: AtBatState,
    pub markers: ScoreboardMarkers,
}

/// Pick rules: `--strict` wins over a config file, which wins over defaults.
pub fn resolve_rules(config: Option<&Path>, strict: bool) -> Result<CounterRules> {
    if strict {
        return Ok(CounterRules::strict());
    }
    match config {
        Some(path) => Ok(ScorecardConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?
            .rules),
        None => Ok(CounterRules::default()),
    }
}

/// Read a JSON array of scoring events.
pub fn read_events(path: &Path) -> Result<Vec<ScoringEvent>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid events JSON: {}", path.display()))
}

pub fn replay_file(events_path: &Path, rules: CounterRules) -> Result<ReplayReport> {
    let events = read_events(events_path)?;
    let session = ScorecardSession::replay(rules, events);
    Ok(ReplayReport {
        rules,
        events_applied: session.history().len(),
        state: session.snapshot(),
        markers: session.markers(),
    })
}

/// Text rendering of the scoreboard: filled slots as `●`, empty as `○`.
pub fn render_board(markers: &ScoreboardMarkers) -> String {
    fn row(label: &str, slots: &[bool]) -> String {
        let marks: Vec<&str> = slots.iter().map(|f| if *f { "●" } else { "○" }).collect();
        format!("{:<3} {}", label, marks.join(" "))
    }

    let bases = [markers.bases.first, markers.bases.second, markers.bases.third];
    [
        row("B", &markers.balls),
        row("S", &markers.strikes),
        row("O", &markers.outs),
        format!("{:<3} {}", "1B", if bases[0] { "◆" } else { "◇" }),
        format!("{:<3} {}", "2B", if bases[1] { "◆" } else { "◇" }),
        format!("{:<3} {}", "3B", if bases[2] { "◆" } else { "◇" }),
    ]
    .join("\n")
}

pub fn load_team_sheet(path: &Path) -> Result<TeamSheet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team sheet: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid team sheet JSON: {}", path.display()))
}

pub fn leaders_from_file(path: &Path, limit: usize) -> Result<Vec<LeaderboardRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read BA feed: {}", path.display()))?;
    let entries: Vec<BattingAverageEntry> =
        serde_json::from_str(&text).with_context(|| format!("Invalid BA feed: {}", path.display()))?;
    Ok(leaderboard(&entries, limit))
}
