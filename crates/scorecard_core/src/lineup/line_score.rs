use serde::{Deserialize, Serialize};

use super::card::INNINGS;
use crate::error::{Result, ScorecardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

/// Runs per inning for one team. `None` means the inning has not been entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamLine {
    pub team_name: String,
    pub runs_by_inning: [Option<u32>; INNINGS],
}

impl TeamLine {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self { team_name: team_name.into(), runs_by_inning: [None; INNINGS] }
    }

    pub fn final_score(&self) -> u32 {
        self.runs_by_inning.iter().flatten().sum()
    }

    pub fn innings_played(&self) -> usize {
        self.runs_by_inning.iter().filter(|r| r.is_some()).count()
    }
}

/// Inning-by-inning score for both teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub home: TeamLine,
    pub away: TeamLine,
}

impl LineScore {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self { home: TeamLine::new(home), away: TeamLine::new(away) }
    }

    pub fn team(&self, side: TeamSide) -> &TeamLine {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamLine {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Overwrites the entry for `inning` (1-based).
    pub fn record_runs(&mut self, side: TeamSide, inning: usize, runs: u32) -> Result<()> {
        if !(1..=INNINGS).contains(&inning) {
            return Err(ScorecardError::InvalidArgument(format!(
                "Inning must be 1-{}, got {}",
                INNINGS, inning
            )));
        }
        self.team_mut(side).runs_by_inning[inning - 1] = Some(runs);
        Ok(())
    }

    pub fn final_score(&self, side: TeamSide) -> u32 {
        self.team(side).final_score()
    }

    /// Side with more runs, `None` on a tie.
    pub fn leader(&self) -> Option<TeamSide> {
        let (home, away) = (self.home.final_score(), self.away.final_score());
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_sums_entered_innings() {
        let mut score = LineScore::new("Owls", "Hawks");
        score.record_runs(TeamSide::Home, 1, 2).unwrap();
        score.record_runs(TeamSide::Home, 3, 1).unwrap();
        score.record_runs(TeamSide::Away, 1, 0).unwrap();
        score.record_runs(TeamSide::Away, 10, 4).unwrap();

        assert_eq!(score.final_score(TeamSide::Home), 3);
        assert_eq!(score.final_score(TeamSide::Away), 4);
        assert_eq!(score.home.innings_played(), 2);
        assert_eq!(score.leader(), Some(TeamSide::Away));
    }

    #[test]
    fn test_record_overwrites() {
        let mut score = LineScore::new("Owls", "Hawks");
        score.record_runs(TeamSide::Home, 2, 5).unwrap();
        score.record_runs(TeamSide::Home, 2, 1).unwrap();
        assert_eq!(score.final_score(TeamSide::Home), 1);
    }

    #[test]
    fn test_inning_out_of_range() {
        let mut score = LineScore::new("Owls", "Hawks");
        assert!(matches!(
            score.record_runs(TeamSide::Home, 0, 1),
            Err(ScorecardError::InvalidArgument(_))
        ));
        assert!(score.record_runs(TeamSide::Away, 11, 1).is_err());
        assert_eq!(score.leader(), None);
    }
}
