//! Standard deck composition.

use super::card::{Card, Distance, Hazard, Remedy, Safety, Speed};

/// Cap carried by the speed limit cards of the standard deck.
pub const STANDARD_LIMIT: u32 = 50;

/// Number of cards in [`standard_deck`].
pub const STANDARD_DECK_SIZE: usize = 106;

/// The 106-card standard deck, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let counts: &[(Card, usize)] = &[
        (Card::Distance(Distance::D25), 10),
        (Card::Distance(Distance::D50), 10),
        (Card::Distance(Distance::D75), 10),
        (Card::Distance(Distance::D100), 12),
        (Card::Distance(Distance::D200), 4),
        (Card::Hazard(Hazard::Crash), 3),
        (Card::Hazard(Hazard::Empty), 3),
        (Card::Hazard(Hazard::Flat), 3),
        (Card::Hazard(Hazard::Stop), 5),
        (Card::Speed(Speed::Limit(STANDARD_LIMIT)), 4),
        (Card::Remedy(Remedy::Repair), 6),
        (Card::Remedy(Remedy::Gas), 6),
        (Card::Remedy(Remedy::Spare), 6),
        (Card::Remedy(Remedy::Roll), 14),
        (Card::Speed(Speed::Unlimited), 6),
        (Card::safety(Safety::Ace), 1),
        (Card::safety(Safety::Tanker), 1),
        (Card::safety(Safety::Sealant), 1),
        (Card::safety(Safety::Emergency), 1),
    ];

    counts
        .iter()
        .flat_map(|&(card, n)| std::iter::repeat(card).take(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;

    fn count(deck: &[Card], category: CardCategory) -> usize {
        deck.iter().filter(|c| c.category() == category).count()
    }

    #[test]
    fn test_standard_deck_size() {
        assert_eq!(standard_deck().len(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        assert_eq!(count(&deck, CardCategory::Distance), 46);
        assert_eq!(count(&deck, CardCategory::Hazard), 14);
        assert_eq!(count(&deck, CardCategory::Speed), 10);
        assert_eq!(count(&deck, CardCategory::Remedy), 32);
        assert_eq!(count(&deck, CardCategory::Safety), 4);
    }

    #[test]
    fn test_one_of_each_safety() {
        let deck = standard_deck();
        for kind in Safety::ALL {
            assert_eq!(deck.iter().filter(|&&c| c == Card::safety(kind)).count(), 1);
        }
    }
}
