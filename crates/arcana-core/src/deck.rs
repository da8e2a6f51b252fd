//! Canonical deck construction.
//!
//! The deck is the 22 major arcana in traditional order followed by the
//! 56 suited cards, grouped by suit (Wands, Cups, Swords, Pentacles) and
//! ordered Ace through King within each suit.

use serde::{Deserialize, Serialize};

use crate::card::{Card, MajorArcana, Rank, Suit};
use crate::error::TarotError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 78;

/// The full ordered card catalog. Immutable once built.
///
/// Serializes as the plain card list. Deserializing only accepts the
/// canonical 78-card sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 78-card deck in canonical order.
    pub fn standard() -> Self {
        let majors = MajorArcana::all().iter().copied().map(Card::Major);
        let minors = Suit::all()
            .iter()
            .flat_map(|&suit| Rank::all().iter().map(move |&rank| Card::minor(rank, suit)));
        Self {
            cards: majors.chain(minors).collect(),
        }
    }

    /// The cards in canonical order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns true if `card` is part of the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = TarotError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let standard = Self::standard();
        if cards != standard.cards {
            return Err(TarotError::InvalidDeck(format!(
                "expected the {DECK_SIZE} standard cards in canonical order, got {} cards",
                cards.len()
            )));
        }
        Ok(standard)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// Build the canonical 78-card deck.
pub fn build_deck() -> Deck {
    Deck::standard()
}
