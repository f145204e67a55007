//! Rules engine: turn order, legality, play execution and round status.
//!
//! A caller holds a `Game`, asks [`legal_moves`] (or [`is_legal`]) what the
//! current player may do, and feeds the chosen move to [`apply`]. Scoring
//! lives in `crate::scoring`.

pub mod executor;
pub mod legality;
pub mod moves;
pub mod outcome;
pub mod sequencer;

pub use executor::{apply, apply_move, submit, Move};
pub use legality::{has_valid_target, is_legal, is_legal_against, valid_targets};
pub use moves::{legal_moves, legal_plays};
pub use outcome::{completed_teams, has_completed_trip, remaining_distance, round_outcome, RoundOutcome};
pub use sequencer::{next_player, player_order};
