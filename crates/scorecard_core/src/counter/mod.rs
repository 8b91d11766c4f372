//! At-bat count tracking: balls, strikes, outs and base runners.

pub mod tracker;
pub mod types;

pub use tracker::AtBatCounter;
pub use types::{
    AtBatState, Base, Bases, HitKind, ScoreboardMarkers, BALL_SLOTS, MAX_BALLS, MAX_OUTS,
    MAX_STRIKES, OUT_SLOTS, STRIKE_SLOTS,
};
