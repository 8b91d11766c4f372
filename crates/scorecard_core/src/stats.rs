//! Batting average leaderboard for the dashboard summary widgets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScorecardError};

/// League-average baseline the leaderboard compares against.
pub const BA_BASELINE: f64 = 0.250;
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

/// One row of the batting-average comparison feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingAverageEntry {
    pub player_name: String,
    pub ba: f64,
}

/// Raw counting stats for a batter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattingLine {
    pub player_name: String,
    pub at_bats: u32,
    pub hits: u32,
}

impl BattingLine {
    /// Hits can never outnumber at-bats.
    pub fn check(&self) -> Result<()> {
        if self.hits > self.at_bats {
            return Err(ScorecardError::Validation(format!(
                "{}: hits ({}) exceed at-bats ({})",
                self.player_name, self.hits, self.at_bats
            )));
        }
        Ok(())
    }

    /// Capped at 1.000 for lines that fail [`BattingLine::check`].
    pub fn batting_average(&self) -> f64 {
        if self.at_bats == 0 {
            return 0.0;
        }
        self.hits.min(self.at_bats) as f64 / self.at_bats as f64
    }

    pub fn to_entry(&self) -> BattingAverageEntry {
        BattingAverageEntry { player_name: self.player_name.clone(), ba: self.batting_average() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player_name: String,
    pub ba: f64,
    /// (ba - baseline) / baseline
    pub percent_vs_baseline: f64,
}

/// First `limit` entries in feed order. The feed arrives already ranked.
pub fn leaderboard(entries: &[BattingAverageEntry], limit: usize) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, e)| LeaderboardRow {
            rank: i + 1,
            player_name: e.player_name.clone(),
            ba: e.ba,
            percent_vs_baseline: (e.ba - BA_BASELINE) / BA_BASELINE,
        })
        .collect()
}
