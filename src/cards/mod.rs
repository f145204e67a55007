//! Card system: the closed card taxonomy and the standard deck.
//!
//! ## Key Types
//!
//! - `Card`: A playing card, one variant per category
//! - `CardCategory`: Distance, speed, hazard, remedy or safety
//! - `BattleCard`: What a battle area can hold (hazard or remedy)
//! - `SafetyCard`: Safety kind plus its coup-fourré flag

pub mod card;
pub mod deck;

pub use card::{BattleCard, Card, CardCategory, Distance, Hazard, Remedy, Safety, SafetyCard, Speed};
pub use deck::{standard_deck, STANDARD_DECK_SIZE, STANDARD_LIMIT};
