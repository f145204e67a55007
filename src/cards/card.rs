//! Card taxonomy.
//!
//! Every card belongs to exactly one [`CardCategory`]. The category decides
//! which legality rule applies and which tableau area the card lands in.
//!
//! ```
//! use mille_bornes::cards::{Card, CardCategory, Distance, Hazard, Remedy};
//!
//! assert_eq!(Card::Distance(Distance::D75).category(), CardCategory::Distance);
//! assert_eq!(Remedy::Repair.cures(), Some(Hazard::Crash));
//! assert_eq!(Remedy::Roll.cures(), Some(Hazard::Stop));
//! ```

use serde::{Deserialize, Serialize};

/// Distance card. Carries a positive amount in kilometres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Distance {
    D25,
    D50,
    D75,
    D100,
    D200,
}

impl Distance {
    /// All distance cards, shortest first.
    pub const ALL: [Distance; 5] = [
        Distance::D25,
        Distance::D50,
        Distance::D75,
        Distance::D100,
        Distance::D200,
    ];

    /// Kilometres covered by this card.
    #[must_use]
    pub const fn amount(self) -> u32 {
        match self {
            Distance::D25 => 25,
            Distance::D50 => 50,
            Distance::D75 => 75,
            Distance::D100 => 100,
            Distance::D200 => 200,
        }
    }
}

/// Speed card: a limit played on an opponent, or its removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    /// Caps each distance play at the given amount.
    Limit(u32),
    /// Cancels a limit.
    Unlimited,
}

/// Hazard played on an opponent's battle area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    Crash,
    Empty,
    Flat,
    Stop,
}

impl Hazard {
    pub const ALL: [Hazard; 4] = [Hazard::Crash, Hazard::Empty, Hazard::Flat, Hazard::Stop];

    /// The remedy that clears this hazard.
    #[must_use]
    pub const fn remedy(self) -> Remedy {
        match self {
            Hazard::Crash => Remedy::Repair,
            Hazard::Empty => Remedy::Gas,
            Hazard::Flat => Remedy::Spare,
            Hazard::Stop => Remedy::Roll,
        }
    }

    /// The safety granting immunity to this hazard.
    #[must_use]
    pub const fn safety(self) -> Safety {
        match self {
            Hazard::Crash => Safety::Ace,
            Hazard::Empty => Safety::Tanker,
            Hazard::Flat => Safety::Sealant,
            Hazard::Stop => Safety::Emergency,
        }
    }
}

/// Remedy played on the acting team's own battle area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remedy {
    Repair,
    Gas,
    Spare,
    /// Cures `Stop` and also starts movement.
    Roll,
}

impl Remedy {
    pub const ALL: [Remedy; 4] = [Remedy::Repair, Remedy::Gas, Remedy::Spare, Remedy::Roll];

    /// The hazard this remedy cancels.
    #[must_use]
    pub const fn cures(self) -> Option<Hazard> {
        match self {
            Remedy::Repair => Some(Hazard::Crash),
            Remedy::Gas => Some(Hazard::Empty),
            Remedy::Spare => Some(Hazard::Flat),
            Remedy::Roll => Some(Hazard::Stop),
        }
    }
}

/// Safety kind. Each grants permanent immunity to one hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Safety {
    Ace,
    Tanker,
    Sealant,
    Emergency,
}

impl Safety {
    pub const ALL: [Safety; 4] = [Safety::Ace, Safety::Tanker, Safety::Sealant, Safety::Emergency];

    /// The hazard this safety protects against.
    #[must_use]
    pub const fn protects_against(self) -> Hazard {
        match self {
            Safety::Ace => Hazard::Crash,
            Safety::Tanker => Hazard::Empty,
            Safety::Sealant => Hazard::Flat,
            Safety::Emergency => Hazard::Stop,
        }
    }
}

/// A safety card, flagged when it was played as a coup-fourré.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafetyCard {
    pub kind: Safety,
    pub coup_fourre: bool,
}

impl SafetyCard {
    /// A safety card as it sits in a hand.
    #[must_use]
    pub const fn new(kind: Safety) -> Self {
        Self {
            kind,
            coup_fourre: false,
        }
    }

    /// The same card marked as an immediate counter.
    #[must_use]
    pub const fn as_coup_fourre(self) -> Self {
        Self {
            kind: self.kind,
            coup_fourre: true,
        }
    }
}

/// Category of a card. Determines legality rules and tableau placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Distance,
    Speed,
    Hazard,
    Remedy,
    Safety,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Distance(Distance),
    Speed(Speed),
    Hazard(Hazard),
    Remedy(Remedy),
    Safety(SafetyCard),
}

impl Card {
    /// Shorthand for a safety card as held in a hand.
    #[must_use]
    pub const fn safety(kind: Safety) -> Self {
        Card::Safety(SafetyCard::new(kind))
    }

    #[must_use]
    pub const fn category(&self) -> CardCategory {
        match self {
            Card::Distance(_) => CardCategory::Distance,
            Card::Speed(_) => CardCategory::Speed,
            Card::Hazard(_) => CardCategory::Hazard,
            Card::Remedy(_) => CardCategory::Remedy,
            Card::Safety(_) => CardCategory::Safety,
        }
    }

    /// Whether the card is played against an opponent rather than on the
    /// acting team's own tableau.
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Card::Hazard(_) | Card::Speed(Speed::Limit(_)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Distance(d) => write!(f, "{} km", d.amount()),
            Card::Speed(Speed::Limit(cap)) => write!(f, "Limit {cap}"),
            Card::Speed(Speed::Unlimited) => write!(f, "Unlimited"),
            Card::Hazard(h) => write!(f, "{h:?}"),
            Card::Remedy(r) => write!(f, "{r:?}"),
            Card::Safety(s) if s.coup_fourre => write!(f, "{:?} (coup-fourré)", s.kind),
            Card::Safety(s) => write!(f, "{:?}", s.kind),
        }
    }
}

/// Card occupying a battle area: the active hazard or the remedy that
/// resolved it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleCard {
    Hazard(Hazard),
    Remedy(Remedy),
}

impl BattleCard {
    /// Whether the team is moving.
    #[must_use]
    pub const fn is_roll(self) -> bool {
        matches!(self, BattleCard::Remedy(Remedy::Roll))
    }
}

impl From<BattleCard> for Card {
    fn from(card: BattleCard) -> Self {
        match card {
            BattleCard::Hazard(h) => Card::Hazard(h),
            BattleCard::Remedy(r) => Card::Remedy(r),
        }
    }
}
