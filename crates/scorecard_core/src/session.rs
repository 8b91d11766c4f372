//! Scoring Session
//!
//! One owned counter per scorecard screen, plus the ordered list of events a
//! scorekeeper entered. Events are processed strictly in arrival order.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CounterRules;
use crate::counter::{AtBatCounter, AtBatState, HitKind, ScoreboardMarkers};

/// One scorekeeper input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScoringEvent {
    Ball,
    Strike,
    Out,
    Hit { kind: HitKind },
    EndHalfInning,
}

/// An applied event and the state it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub seq: u64,
    pub event: ScoringEvent,
    pub state_after: AtBatState,
}

#[derive(Debug, Clone, Default)]
pub struct ScorecardSession {
    counter: AtBatCounter,
    history: Vec<RecordedEvent>,
}

impl ScorecardSession {
    pub fn new(rules: CounterRules) -> Self {
        Self { counter: AtBatCounter::with_rules(rules), history: Vec::new() }
    }

    /// Rebuild a session by applying `events` in order.
    pub fn replay<I>(rules: CounterRules, events: I) -> Self
    where
        I: IntoIterator<Item = ScoringEvent>,
    {
        let mut session = Self::new(rules);
        let applied = session.apply_all(events);
        info!(events = applied, outs = session.snapshot().outs, "replayed scoring session");
        session
    }

    pub fn apply(&mut self, event: ScoringEvent) -> AtBatState {
        let state_after = match event {
            ScoringEvent::Ball => self.counter.record_ball(),
            ScoringEvent::Strike => self.counter.record_strike(),
            ScoringEvent::Out => self.counter.record_out(),
            ScoringEvent::Hit { kind } => self.counter.record_hit(kind),
            ScoringEvent::EndHalfInning => self.counter.end_half_inning(),
        };

        let seq = self.history.len() as u64 + 1;
        self.history.push(RecordedEvent { seq, event, state_after });
        state_after
    }

    /// Returns the number of events applied.
    pub fn apply_all<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = ScoringEvent>,
    {
        let start = self.history.len();
        for event in events {
            self.apply(event);
        }
        self.history.len() - start
    }

    pub fn end_half_inning(&mut self) -> AtBatState {
        self.apply(ScoringEvent::EndHalfInning)
    }

    pub fn snapshot(&self) -> AtBatState {
        self.counter.state()
    }

    pub fn markers(&self) -> ScoreboardMarkers {
        self.counter.markers()
    }

    pub fn rules(&self) -> CounterRules {
        self.counter.rules()
    }

    pub fn history(&self) -> &[RecordedEvent] {
        &self.history
    }

    pub fn events(&self) -> Vec<ScoringEvent> {
        self.history.iter().map(|r| r.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Bases;

    #[test]
    fn test_event_wire_format() {
        let event = ScoringEvent::Hit { kind: HitKind::Double };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"hit","kind":"double"}"#);

        let parsed: ScoringEvent = serde_json::from_str(r#"{"event":"strike"}"#).unwrap();
        assert_eq!(parsed, ScoringEvent::Strike);

        let parsed: ScoringEvent =
            serde_json::from_str(r#"{"event":"hit","kind":"homeRun"}"#).unwrap();
        assert_eq!(parsed, ScoringEvent::Hit { kind: HitKind::HomeRun });

        let json = serde_json::to_string(&ScoringEvent::EndHalfInning).unwrap();
        assert_eq!(json, r#"{"event":"end_half_inning"}"#);
        let parsed: ScoringEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ScoringEvent::EndHalfInning);
    }

    #[test]
    fn test_unknown_hit_kind_rejected_on_the_wire() {
        let result = serde_json::from_str::<ScoringEvent>(r#"{"event":"hit","kind":"bunt"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_sequence() {
        let mut session = ScorecardSession::default();
        session.apply(ScoringEvent::Ball);
        session.apply(ScoringEvent::Strike);
        session.apply(ScoringEvent::Hit { kind: HitKind::Single });

        let seqs: Vec<u64> = session.history().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(session.history()[2].state_after, session.snapshot());
        assert_eq!(session.history()[0].state_after.balls, 1);
        assert_eq!(session.history()[2].seq, session.history().len() as u64);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let events = vec![
            ScoringEvent::Strike,
            ScoringEvent::Strike,
            ScoringEvent::Ball,
            ScoringEvent::Hit { kind: HitKind::Single },
        ];
        let a = ScorecardSession::replay(CounterRules::default(), events.clone());
        let b = ScorecardSession::replay(CounterRules::default(), a.events());

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.history(), b.history());
        assert_eq!(a.snapshot().bases, Bases { first: true, second: false, third: false });
    }

    #[test]
    fn test_end_half_inning_is_recorded() {
        let mut session = ScorecardSession::new(CounterRules::strict());
        session.apply_all([ScoringEvent::Out, ScoringEvent::Out, ScoringEvent::Out]);
        assert_eq!(session.snapshot().outs, 3);

        let state = session.end_half_inning();
        assert_eq!(state, AtBatState::default());
        assert_eq!(session.history().last().unwrap().event, ScoringEvent::EndHalfInning);
    }
}
