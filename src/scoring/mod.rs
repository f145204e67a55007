//! Scoreboard: per-team point breakdown from tableau state.

pub mod score;

pub use score::{
    calculate_score, Score, ALL_SAFETIES, COUP_FOURRE, DELAYED_ACTION, EACH_SAFETY, EXTENSION,
    SAFE_TRIP, SHUTOUT, TRIP_COMPLETED,
};
