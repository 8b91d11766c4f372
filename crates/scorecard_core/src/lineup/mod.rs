//! Game setup, batting lineup and line score.

pub mod card;
pub mod game;
pub mod line_score;

pub use card::{LineupCard, LineupEntry, INNINGS, MAX_STARTERS, MAX_SUBSTITUTES};
pub use game::GameSetup;
pub use line_score::{LineScore, TeamLine, TeamSide};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScorecardError};

/// What the create-team screen submits: header plus lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub game: GameSetup,
    #[serde(flatten)]
    pub lineup: LineupCard,
}

impl TeamSheet {
    pub fn check(&self) -> Result<()> {
        let problems: Vec<String> = [self.game.check(), self.lineup.check()]
            .into_iter()
            .filter_map(|r| r.err())
            .map(|e| match e {
                ScorecardError::Validation(msg) => msg,
                other => other.to_string(),
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ScorecardError::Validation(problems.join("; ")))
        }
    }

    /// Empty line score headed by this game's two teams.
    pub fn line_score(&self) -> LineScore {
        LineScore::new(self.game.team_name.clone(), self.game.opponent_team.clone())
    }
}
