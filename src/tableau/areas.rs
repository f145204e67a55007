//! A team's play area.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{BattleCard, Distance, Hazard, Remedy, Safety, SafetyCard, Speed};

/// Per-team play area.
///
/// `distance_area` only grows during a round; nothing ever removes a played
/// distance card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    /// Last hazard or remedy played here. `None` until the team first rolls.
    pub battle_area: Option<BattleCard>,

    /// Active speed card. `None` means no limit.
    pub speed_area: Option<Speed>,

    /// Distance cards in the order they were played.
    pub distance_area: Vec<Distance>,

    /// Safeties collected, at most one per kind.
    pub safety_area: SmallVec<[SafetyCard; 4]>,
}

impl Tableau {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all distance cards played.
    #[must_use]
    pub fn total_distance(&self) -> u32 {
        self.distance_area.iter().map(|d| d.amount()).sum()
    }

    /// Whether the battle area holds `Roll`.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.battle_area.is_some_and(BattleCard::is_roll)
    }

    /// Hazard currently blocking the team, if any.
    #[must_use]
    pub fn active_hazard(&self) -> Option<Hazard> {
        match self.battle_area {
            Some(BattleCard::Hazard(h)) => Some(h),
            Some(BattleCard::Remedy(_)) | None => None,
        }
    }

    /// Largest distance card the team may play, given `max_speed` as the cap
    /// when no limit is in force.
    #[must_use]
    pub fn speed_limit(&self, max_speed: u32) -> u32 {
        match self.speed_area {
            Some(Speed::Limit(cap)) => cap,
            Some(Speed::Unlimited) | None => max_speed,
        }
    }

    /// Whether a speed limit is in force.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        matches!(self.speed_area, Some(Speed::Limit(_)))
    }

    #[must_use]
    pub fn has_safety(&self, kind: Safety) -> bool {
        self.safety_area.iter().any(|s| s.kind == kind)
    }

    /// Number of safeties played as a coup-fourré.
    #[must_use]
    pub fn coup_fourre_count(&self) -> usize {
        self.safety_area.iter().filter(|s| s.coup_fourre).count()
    }

    /// Whether any 200 km card has been played.
    #[must_use]
    pub fn played_200(&self) -> bool {
        self.distance_area.contains(&Distance::D200)
    }

    pub(crate) fn set_battle(&mut self, card: BattleCard) {
        self.battle_area = Some(card);
    }

    pub(crate) fn set_speed(&mut self, speed: Speed) {
        self.speed_area = Some(speed);
    }

    pub(crate) fn push_distance(&mut self, distance: Distance) {
        self.distance_area.push(distance);
    }

    /// Add a safety. Returns false, leaving the area unchanged, if the team
    /// already holds this kind.
    pub(crate) fn push_safety(&mut self, safety: SafetyCard) -> bool {
        if self.has_safety(safety.kind) {
            return false;
        }
        self.safety_area.push(safety);
        true
    }

    /// Shorthand used when setting up positions by hand.
    #[must_use]
    pub fn rolling() -> Self {
        Self {
            battle_area: Some(BattleCard::Remedy(Remedy::Roll)),
            ..Self::default()
        }
    }
}
