//! Tableau model: each team's battle, speed, distance and safety areas.

pub mod areas;
pub mod team;

pub use areas::Tableau;
pub use team::Team;
