//! End-of-round scoring.
//!
//! Every `Score` carries every field. Bonuses that depend on completing the
//! trip are 0 until the team has covered the required distance.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Safety;
use crate::core::{Game, TeamId};
use crate::rules::outcome::has_completed_trip;
use crate::tableau::Team;

/// Points per safety held.
pub const EACH_SAFETY: u32 = 100;
/// Bonus for holding all four safeties.
pub const ALL_SAFETIES: u32 = 300;
/// Bonus per safety played as a coup-fourré.
pub const COUP_FOURRE: u32 = 300;
/// Bonus for covering the required distance.
pub const TRIP_COMPLETED: u32 = 400;
/// Bonus for completing after the deck ran out.
pub const DELAYED_ACTION: u32 = 300;
/// Bonus for completing without a 200 km card.
pub const SAFE_TRIP: u32 = 300;
/// Bonus for completing an extended round.
pub const EXTENSION: u32 = 200;
/// Bonus for completing while no opponent has moved.
pub const SHUTOUT: u32 = 500;

/// Point breakdown for one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub distance: u32,
    pub each_safety: u32,
    pub all_safeties: u32,
    pub coup_fourre: u32,
    pub trip_completed: u32,
    pub delayed_action: u32,
    pub safe_trip: u32,
    pub extension_bonus: u32,
    pub shutout: u32,
}

impl Score {
    /// Sum of all fields.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.distance
            + self.each_safety
            + self.all_safeties
            + self.coup_fourre
            + self.trip_completed
            + self.delayed_action
            + self.safe_trip
            + self.extension_bonus
            + self.shutout
    }
}

/// Score every team. Pure; may be called at any point in the round.
#[must_use]
pub fn calculate_score(game: &Game) -> FxHashMap<TeamId, Score> {
    game.teams
        .iter()
        .map(|team| (team.id, score_team(game, team)))
        .collect()
}

fn score_team(game: &Game, team: &Team) -> Score {
    let tableau = &team.tableau;
    let safeties = tableau.safety_area.len() as u32;
    let holds_all = Safety::ALL.iter().all(|&kind| tableau.has_safety(kind));

    let mut score = Score {
        distance: tableau.total_distance(),
        each_safety: EACH_SAFETY * safeties,
        all_safeties: if holds_all { ALL_SAFETIES } else { 0 },
        coup_fourre: COUP_FOURRE * tableau.coup_fourre_count() as u32,
        ..Score::default()
    };

    if has_completed_trip(game, team.id) {
        let shutout = game
            .teams
            .iter()
            .filter(|other| other.id != team.id)
            .all(|other| other.tableau.total_distance() == 0);

        score.trip_completed = TRIP_COMPLETED;
        score.delayed_action = if game.deck_size() == 0 { DELAYED_ACTION } else { 0 };
        score.safe_trip = if tableau.played_200() { 0 } else { SAFE_TRIP };
        score.extension_bonus = if game.extension { EXTENSION } else { 0 };
        score.shutout = if shutout { SHUTOUT } else { 0 };
    }

    score
}
