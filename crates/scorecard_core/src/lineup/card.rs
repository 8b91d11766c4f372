use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use crate::error::{Result, ScorecardError};

pub const MAX_STARTERS: usize = 13;
pub const MAX_SUBSTITUTES: usize = 9;
/// Innings tracked per lineup row and per line score.
pub const INNINGS: usize = 10;

/// One batting-order row. `positions[i]` is the scorebook position number
/// (1 = pitcher … 9 = right field) played in inning `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LineupEntry {
    #[validate(range(min = 1, max = 13, message = "Batting order must be 1-13"))]
    pub batting_order: u8,

    #[serde(default)]
    #[validate(range(max = 99, message = "Player No must be 0-99"))]
    pub player_no: Option<u16>,

    #[validate(length(min = 1, message = "Player Name is required!"))]
    pub player_name: String,

    #[serde(default)]
    #[validate(custom = "validate_positions")]
    pub positions: Vec<Option<u8>>,
}

impl LineupEntry {
    pub fn new(batting_order: u8, player_no: Option<u16>, player_name: impl Into<String>) -> Self {
        Self { batting_order, player_no, player_name: player_name.into(), positions: Vec::new() }
    }

    pub fn position_in(&self, inning: usize) -> Option<u8> {
        inning.checked_sub(1).and_then(|i| self.positions.get(i).copied().flatten())
    }
}

#[allow(clippy::ptr_arg)]
fn validate_positions(positions: &Vec<Option<u8>>) -> std::result::Result<(), ValidationError> {
    if positions.len() > INNINGS {
        let mut err = ValidationError::new("innings");
        err.message = Some(Cow::from(format!("At most {} innings", INNINGS)));
        return Err(err);
    }
    if positions.iter().flatten().any(|p| !(1..=9).contains(p)) {
        let mut err = ValidationError::new("position");
        err.message = Some(Cow::from("Position must be 1-9"));
        return Err(err);
    }
    Ok(())
}

/// Starters in batting order plus the bench.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineupCard {
    pub starters: Vec<LineupEntry>,
    #[serde(default)]
    pub substitutes: Vec<LineupEntry>,
}

impl LineupCard {
    /// Row-level and card-level checks; every problem is reported.
    pub fn check(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.starters.len() > MAX_STARTERS {
            problems.push(format!("starters: at most {} players", MAX_STARTERS));
        }
        if self.substitutes.len() > MAX_SUBSTITUTES {
            problems.push(format!("substitutes: at most {} players", MAX_SUBSTITUTES));
        }

        for (group, entries) in [("starters", &self.starters), ("substitutes", &self.substitutes)] {
            for (i, entry) in entries.iter().enumerate() {
                if let Err(ScorecardError::Validation(msg)) =
                    entry.validate().map_err(ScorecardError::from)
                {
                    problems.push(format!("{}[{}]: {}", group, i, msg));
                }
            }
        }

        let mut orders = HashSet::new();
        for entry in &self.starters {
            if !orders.insert(entry.batting_order) {
                problems.push(format!("starters: duplicate batting order {}", entry.batting_order));
            }
        }

        let mut numbers = HashSet::new();
        for entry in self.starters.iter().chain(&self.substitutes) {
            if let Some(no) = entry.player_no {
                if !numbers.insert(no) {
                    problems.push(format!("duplicate player number {}", no));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ScorecardError::Validation(problems.join("; ")))
        }
    }

    /// Starters sorted by batting order.
    pub fn batting_order(&self) -> Vec<&LineupEntry> {
        let mut starters: Vec<&LineupEntry> = self.starters.iter().collect();
        starters.sort_by_key(|e| e.batting_order);
        starters
    }

    pub fn find_by_number(&self, player_no: u16) -> Option<&LineupEntry> {
        self.starters.iter().chain(&self.substitutes).find(|e| e.player_no == Some(player_no))
    }
}
