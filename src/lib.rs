//! # mille-bornes
//!
//! Rules engine for a Mille Bornes-style team racing card game.
//!
//! ## Design Principles
//!
//! 1. **Closed taxonomy**: Cards are an enum; every rule matches exhaustively.
//!
//! 2. **Owned state**: A round is one `Game` value passed by `&mut` into the
//!    engine. Displays read a cheap `snapshot()` between turns.
//!
//! 3. **Deterministic**: All randomness comes from a seeded `GameRng`.
//!
//! ## Playing a turn
//!
//! ```
//! use mille_bornes::core::GameBuilder;
//! use mille_bornes::rules::{apply_move, legal_moves, round_outcome};
//! use mille_bornes::scoring::calculate_score;
//!
//! let mut game = GameBuilder::new()
//!     .team("blue", ["Ada", "Cy"])
//!     .team("red", ["Bo", "Di"])
//!     .build(42)
//!     .unwrap();
//!
//! while round_outcome(&game).is_none() {
//!     let moves = legal_moves(&game);
//!     let Some(&chosen) = moves.iter().find(|m| m.target.is_some()).or(moves.first()) else {
//!         break;
//!     };
//!     apply_move(&mut game, chosen).unwrap();
//! }
//!
//! let scores = calculate_score(&game);
//! assert_eq!(scores.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - `cards`: Card taxonomy and the standard deck
//! - `tableau`: Teams and their play areas
//! - `core`: Players, game state, configuration, RNG, errors, round setup
//! - `rules`: Turn order, legality, play execution, round status
//! - `scoring`: End-of-round point breakdown

pub mod cards;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod tableau;

// Re-export commonly used types
pub use crate::cards::{BattleCard, Card, CardCategory, Distance, Hazard, Remedy, Safety, SafetyCard, Speed};

pub use crate::core::{
    Game, GameBuilder, GameRng, Placement, PlayError, PlayRecord, Player, PlayerId, RoundConfig,
    SetupError, TeamId,
};

pub use crate::rules::{
    apply, apply_move, has_valid_target, is_legal, is_legal_against, legal_moves, next_player,
    player_order, round_outcome, submit, valid_targets, Move, RoundOutcome,
};

pub use crate::scoring::{calculate_score, Score};

pub use crate::tableau::{Tableau, Team};
