//! Core types: players and teams, game state, configuration, RNG, errors and
//! round setup.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod setup;
pub mod state;

pub use config::{RoundConfig, BASE_DISTANCE, EXTENDED_DISTANCE, HAND_SIZE, MAX_SPEED};
pub use error::{PlayError, SetupError};
pub use player::{Player, PlayerId, TeamId};
pub use rng::GameRng;
pub use setup::{GameBuilder, MAX_PLAYERS};
pub use state::{Game, Placement, PlayRecord};
