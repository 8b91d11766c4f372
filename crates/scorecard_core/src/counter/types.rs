use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;

/// Highest ball count held at rest. A fourth ball is not tracked.
pub const MAX_BALLS: u8 = 3;
/// Highest strike count held at rest. The next strike is a strikeout.
pub const MAX_STRIKES: u8 = 2;
/// Outs per half-inning.
pub const MAX_OUTS: u8 = 3;

/// Scoreboard slot counts used by the marker projection.
pub const BALL_SLOTS: usize = 4;
pub const STRIKE_SLOTS: usize = 3;
pub const OUT_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    First,
    Second,
    Third,
}

/// Runner occupancy. Three independent flags, not a runner count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bases {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl Bases {
    pub const EMPTY: Bases = Bases { first: false, second: false, third: false };

    pub fn is_occupied(&self, base: Base) -> bool {
        match base {
            Base::First => self.first,
            Base::Second => self.second,
            Base::Third => self.third,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn occupied(&self) -> Vec<Base> {
        [Base::First, Base::Second, Base::Third]
            .into_iter()
            .filter(|b| self.is_occupied(*b))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "triple")]
    Triple,
    #[serde(rename = "homeRun", alias = "home_run")]
    HomeRun,
}

impl HitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitKind::Single => "single",
            HitKind::Double => "double",
            HitKind::Triple => "triple",
            HitKind::HomeRun => "homeRun",
        }
    }

    /// Base state a hit of this kind leaves behind. `None` for a home run,
    /// whose effect depends on the configured policy.
    pub fn resulting_bases(&self) -> Option<Bases> {
        match self {
            HitKind::Single => Some(Bases { first: true, second: false, third: false }),
            HitKind::Double => Some(Bases { first: true, second: true, third: false }),
            HitKind::Triple => Some(Bases { first: true, second: true, third: true }),
            HitKind::HomeRun => None,
        }
    }
}

impl fmt::Display for HitKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HitKind {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(HitKind::Single),
            "double" => Ok(HitKind::Double),
            "triple" => Ok(HitKind::Triple),
            "homeRun" | "home_run" => Ok(HitKind::HomeRun),
            other => Err(ScorecardError::InvalidArgument(format!("Unknown hit kind: {}", other))),
        }
    }
}

/// Count, outs and runners for one at-bat context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AtBatState {
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub bases: Bases,
}

impl AtBatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every counter sits inside its at-rest domain.
    pub fn is_at_rest(&self) -> bool {
        self.balls <= MAX_BALLS && self.strikes <= MAX_STRIKES && self.outs <= MAX_OUTS
    }
}

/// Filled/unfilled scoreboard slots derived from an `AtBatState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardMarkers {
    pub outs: [bool; OUT_SLOTS],
    pub balls: [bool; BALL_SLOTS],
    pub strikes: [bool; STRIKE_SLOTS],
    pub bases: Bases,
}

impl ScoreboardMarkers {
    pub fn from_state(state: &AtBatState) -> Self {
        Self {
            outs: fill_slots(state.outs),
            balls: fill_slots(state.balls),
            strikes: fill_slots(state.strikes),
            bases: state.bases,
        }
    }
}

fn fill_slots<const N: usize>(count: u8) -> [bool; N] {
    std::array::from_fn(|i| i < count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_kind_parse() {
        assert_eq!("double".parse::<HitKind>().unwrap(), HitKind::Double);
        assert_eq!("homeRun".parse::<HitKind>().unwrap(), HitKind::HomeRun);
        assert_eq!("home_run".parse::<HitKind>().unwrap(), HitKind::HomeRun);

        let err = "bunt".parse::<HitKind>().unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidArgument(_)));
    }

    #[test]
    fn test_hit_kind_serde_names() {
        assert_eq!(serde_json::to_string(&HitKind::HomeRun).unwrap(), "\"homeRun\"");
        let kind: HitKind = serde_json::from_str("\"home_run\"").unwrap();
        assert_eq!(kind, HitKind::HomeRun);
    }

    #[test]
    fn test_markers_fill_below_count() {
        let state = AtBatState {
            balls: 2,
            strikes: 1,
            outs: 3,
            bases: Bases { first: false, second: true, third: false },
        };
        let markers = ScoreboardMarkers::from_state(&state);

        assert_eq!(markers.balls, [true, true, false, false]);
        assert_eq!(markers.strikes, [true, false, false]);
        assert_eq!(markers.outs, [true, true, true]);
        assert!(markers.bases.second);
        assert!(!markers.bases.first);
    }

    #[test]
    fn test_bases_occupied_order() {
        let bases = Bases { first: true, second: false, third: true };
        assert_eq!(bases.occupied(), vec![Base::First, Base::Third]);
        assert!(!bases.is_empty());
        assert!(Bases::EMPTY.is_empty());
    }
}
