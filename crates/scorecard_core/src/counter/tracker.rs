use tracing::{debug, warn};

use super::types::*;
use crate::config::{CounterRules, HomeRunPolicy, OutPolicy};
use crate::error::Result;

impl AtBatState {
    /// Ball count stops at three; a walk is not detected here.
    pub fn after_ball(self) -> Self {
        Self { balls: self.balls.saturating_add(1).min(MAX_BALLS), ..self }
    }

    /// Third strike resets strikes and adds an out, capped at three.
    pub fn after_strike(self) -> Self {
        if self.strikes < MAX_STRIKES {
            Self { strikes: self.strikes + 1, ..self }
        } else {
            Self { strikes: 0, outs: self.outs.saturating_add(1).min(MAX_OUTS), ..self }
        }
    }

    /// Manual out control. Past three outs the policy decides.
    pub fn after_out(self, policy: OutPolicy) -> Self {
        let outs = if self.outs < MAX_OUTS {
            self.outs + 1
        } else {
            match policy {
                OutPolicy::Wrap => 0,
                OutPolicy::Saturate => MAX_OUTS,
            }
        };
        Self { outs, ..self }
    }

    /// Bases are replaced wholesale, never advanced.
    pub fn after_hit(self, kind: HitKind, policy: HomeRunPolicy) -> Self {
        let bases = match (kind.resulting_bases(), policy) {
            (Some(bases), _) => bases,
            (None, HomeRunPolicy::NoOp) => self.bases,
            (None, HomeRunPolicy::ClearBases) => Bases::EMPTY,
        };
        Self { bases, ..self }
    }
}

/// Live count tracker for one scorecard session.
#[derive(Debug, Clone, Default)]
pub struct AtBatCounter {
    state: AtBatState,
    rules: CounterRules,
}

impl AtBatCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: CounterRules) -> Self {
        Self { state: AtBatState::default(), rules }
    }

    pub fn rules(&self) -> CounterRules {
        self.rules
    }

    /// Current snapshot.
    pub fn state(&self) -> AtBatState {
        self.state
    }

    pub fn markers(&self) -> ScoreboardMarkers {
        ScoreboardMarkers::from_state(&self.state)
    }

    pub fn record_ball(&mut self) -> AtBatState {
        self.transition("ball", |s, _| s.after_ball())
    }

    pub fn record_strike(&mut self) -> AtBatState {
        self.transition("strike", |s, _| s.after_strike())
    }

    pub fn record_out(&mut self) -> AtBatState {
        self.transition("out", |s, rules| s.after_out(rules.manual_out))
    }

    pub fn record_hit(&mut self, kind: HitKind) -> AtBatState {
        self.transition(kind.as_str(), |s, rules| s.after_hit(kind, rules.home_run))
    }

    /// Record a hit from its wire name, e.g. a button id.
    pub fn record_hit_named(&mut self, kind: &str) -> Result<AtBatState> {
        let kind = kind.parse::<HitKind>().inspect_err(|_| warn!(kind, "rejected hit kind"))?;
        Ok(self.record_hit(kind))
    }

    /// Clears count, outs and runners. Nothing calls this implicitly.
    pub fn end_half_inning(&mut self) -> AtBatState {
        self.transition("end_half_inning", |_, _| AtBatState::default())
    }

    fn transition<F>(&mut self, label: &str, f: F) -> AtBatState
    where
        F: FnOnce(AtBatState, CounterRules) -> AtBatState,
    {
        let before = self.state;
        self.state = f(before, self.rules);
        debug!(
            event = label,
            balls = self.state.balls,
            strikes = self.state.strikes,
            outs = self.state.outs,
            first = self.state.bases.first,
            second = self.state.bases.second,
            third = self.state.bases.third,
            "at-bat transition"
        );
        debug_assert!(self.state.is_at_rest());
        self.state
    }
}
