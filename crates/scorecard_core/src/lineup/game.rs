use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::error::{Result, ScorecardError};

pub const GAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// Header of a scorecard: who is playing, where and when.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct GameSetup {
    #[validate(length(min = 1, message = "Team Name is required!"))]
    pub team_name: String,

    #[validate(length(min = 1, message = "Game is required!"))]
    pub game_name: String,

    #[validate(
        length(min = 1, message = "Date is required!"),
        custom = "validate_game_date"
    )]
    pub game_date: String,

    #[validate(length(min = 1, message = "Opponent is required!"))]
    pub opponent_team: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl GameSetup {
    /// Validate every field, reporting all failures at once.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(ScorecardError::from)
    }

    pub fn game_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.game_date, GAME_DATE_FORMAT).map_err(|e| {
            ScorecardError::InvalidArgument(format!("Invalid game date {:?}: {}", self.game_date, e))
        })
    }
}

// Empty dates are reported by the length rule.
fn validate_game_date(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() || NaiveDate::parse_from_str(value, GAME_DATE_FORMAT).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("date_format");
    err.message = Some(Cow::from("Date must be YYYY-MM-DD"));
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_setup() -> GameSetup {
        GameSetup {
            team_name: "Riverside Owls".to_string(),
            game_name: "Spring League G3".to_string(),
            game_date: "2024-04-13".to_string(),
            opponent_team: "Hillcrest Hawks".to_string(),
            location: None,
        }
    }

    #[test]
    fn test_valid_setup() {
        let setup = valid_setup();
        assert!(setup.check().is_ok());
        assert_eq!(setup.game_date().unwrap(), NaiveDate::from_ymd_opt(2024, 4, 13).unwrap());
    }

    #[test]
    fn test_required_fields_reported_together() {
        let err = GameSetup::default().check().unwrap_err();
        let msg = match err {
            ScorecardError::Validation(msg) => msg,
            other => panic!("unexpected error: {other}"),
        };
        assert!(msg.contains("Team Name is required!"));
        assert!(msg.contains("Game is required!"));
        assert!(msg.contains("Date is required!"));
        assert!(msg.contains("Opponent is required!"));
        assert!(!msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_bad_date() {
        let setup = GameSetup { game_date: "13/04/2024".to_string(), ..valid_setup() };
        assert!(matches!(setup.check(), Err(ScorecardError::Validation(_))));
        assert!(matches!(setup.game_date(), Err(ScorecardError::InvalidArgument(_))));
    }

    #[test]
    fn test_location_is_optional() {
        let setup: GameSetup = serde_json::from_str(
            r#"{"team_name":"A","game_name":"G","game_date":"2024-05-01","opponent_team":"B"}"#,
        )
        .unwrap();
        assert!(setup.location.is_none());
        assert!(setup.check().is_ok());
    }
}
