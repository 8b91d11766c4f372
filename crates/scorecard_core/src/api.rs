//! Scorecard JSON API
//!
//! String-in / string-out entry points for a front end that only speaks JSON.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::CounterRules;
use crate::counter::{AtBatState, HitKind, ScoreboardMarkers};
use crate::error::{Result, ScorecardError};
use crate::session::{ScorecardSession, ScoringEvent};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEventsRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub rules: Option<CounterRules>,
    pub events: Vec<WireEvent>,
}

/// Event as a front end sends it. The hit kind stays a string until
/// [`WireEvent::into_event`] so an unknown name surfaces as
/// `InvalidArgument` rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WireEvent {
    Ball,
    Strike,
    Out,
    Hit { kind: String },
    EndHalfInning,
}

impl WireEvent {
    pub fn into_event(self) -> Result<ScoringEvent> {
        Ok(match self {
            WireEvent::Ball => ScoringEvent::Ball,
            WireEvent::Strike => ScoringEvent::Strike,
            WireEvent::Out => ScoringEvent::Out,
            WireEvent::Hit { kind } => ScoringEvent::Hit { kind: kind.parse::<HitKind>()? },
            WireEvent::EndHalfInning => ScoringEvent::EndHalfInning,
        })
    }
}

impl From<ScoringEvent> for WireEvent {
    fn from(event: ScoringEvent) -> Self {
        match event {
            ScoringEvent::Ball => WireEvent::Ball,
            ScoringEvent::Strike => WireEvent::Strike,
            ScoringEvent::Out => WireEvent::Out,
            ScoringEvent::Hit { kind } => WireEvent::Hit { kind: kind.as_str().to_string() },
            ScoringEvent::EndHalfInning => WireEvent::EndHalfInning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEventsResponse {
    pub schema_version: u8,
    pub state: AtBatState,
    pub markers: ScoreboardMarkers,
    pub events_applied: usize,
}

impl ScoreEventsResponse {
    pub fn from_session(session: &ScorecardSession) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            state: session.snapshot(),
            markers: session.markers(),
            events_applied: session.history().len(),
        }
    }
}

/// Apply a batch of scoring events to a fresh counter and return the result.
pub fn apply_events_json(request_json: &str) -> Result<String> {
    let request: ScoreEventsRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(ScorecardError::InvalidArgument(format!(
            "Unsupported schema version: {}",
            request.schema_version
        )));
    }

    // Convert the whole batch first: a bad event rejects the request untouched.
    let events = request
        .events
        .into_iter()
        .map(WireEvent::into_event)
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| warn!(error = %e, "rejected scoring event"))?;

    let session = ScorecardSession::replay(request.rules.unwrap_or_default(), events);
    let response = ScoreEventsResponse::from_session(&session);

    serde_json::to_string(&response)
        .map_err(|e| ScorecardError::Serialization(format!("Response encoding failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_events_json() {
        let request = json!({
            "schema_version": 1,
            "events": [
                {"event": "strike"},
                {"event": "strike"},
                {"event": "ball"},
                {"event": "hit", "kind": "single"}
            ]
        });

        let out = apply_events_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["state"]["balls"], 1);
        assert_eq!(parsed["state"]["strikes"], 2);
        assert_eq!(parsed["state"]["outs"], 0);
        assert_eq!(parsed["state"]["bases"]["first"], true);
        assert_eq!(parsed["markers"]["strikes"], json!([true, true, false]));
        assert_eq!(parsed["events_applied"], 4);
    }

    #[test]
    fn test_rules_override() {
        let request = json!({
            "schema_version": 1,
            "rules": {"manual_out": "saturate"},
            "events": [{"event": "out"}, {"event": "out"}, {"event": "out"}, {"event": "out"}]
        });

        let out = apply_events_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["state"]["outs"], 3);
    }

    #[test]
    fn test_schema_version_mismatch() {
        let request = json!({"schema_version": 2, "events": []});
        let err = apply_events_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidArgument(_)));
    }

    #[test]
    fn test_malformed_request() {
        let err = apply_events_json("{\"schema_version\": 1, \"events\": [").unwrap_err();
        assert!(matches!(err, ScorecardError::Deserialization(_)));

        let err = apply_events_json(r#"{"schema_version": 1, "events": [{"event": "bunt"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ScorecardError::Deserialization(_)));
    }

    #[test]
    fn test_unknown_hit_kind_is_invalid_argument() {
        let err = apply_events_json(
            r#"{"schema_version": 1, "events": [{"event": "ball"}, {"event": "hit", "kind": "bunt"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidArgument(ref msg) if msg.contains("bunt")));
    }

    #[test]
    fn test_wire_event_hit_names() {
        let event: WireEvent = serde_json::from_str(r#"{"event":"hit","kind":"home_run"}"#).unwrap();
        assert_eq!(event.into_event().unwrap(), ScoringEvent::Hit { kind: HitKind::HomeRun });

        let wire = WireEvent::from(ScoringEvent::Hit { kind: HitKind::HomeRun });
        assert_eq!(wire, WireEvent::Hit { kind: "homeRun".to_string() });
        let wire = WireEvent::from(ScoringEvent::EndHalfInning);
        assert_eq!(wire.into_event().unwrap(), ScoringEvent::EndHalfInning);
    }
}
