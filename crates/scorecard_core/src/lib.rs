//! # scorecard_core - Baseball Scorecard Engine
//!
//! Live at-bat tracking for a baseball scorecard, plus the game setup,
//! lineup and statistics models that surround it.
//!
//! ## Features
//! - Ball / strike / out counters and base-runner markers
//! - Configurable out and home-run policies
//! - Event-sourced scoring session with deterministic replay
//! - JSON API for easy integration with a web front end

pub mod api;
pub mod config;
pub mod counter;
pub mod error;
pub mod lineup;
pub mod session;
pub mod stats;

pub use api::{apply_events_json, ScoreEventsRequest, ScoreEventsResponse, WireEvent};
pub use config::{CounterRules, HomeRunPolicy, OutPolicy, ScorecardConfig};
pub use counter::{AtBatCounter, AtBatState, Base, Bases, HitKind, ScoreboardMarkers};
pub use error::{Result, ScorecardError};
pub use lineup::{GameSetup, LineScore, LineupCard, LineupEntry, TeamSheet, TeamSide};
pub use session::{RecordedEvent, ScorecardSession, ScoringEvent};
pub use stats::{leaderboard, BattingAverageEntry, BattingLine, LeaderboardRow};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
