//! Drawing cards from a deck.
//!
//! A draw shuffles a fresh copy of the deck with a uniform Fisher–Yates
//! shuffle and deals from the top, so no card can repeat within one draw.
//! When reversals are allowed, each dealt card is flipped independently
//! with probability one half.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DrawnCard, Orientation};
use crate::deck::Deck;
use crate::error::{TarotError, TarotResult};

/// Probability that a single dealt card lands reversed.
pub const REVERSAL_CHANCE: f64 = 0.5;

/// Draw `count` distinct cards from `deck` in random order.
///
/// The first element is the first card dealt. Fails with
/// [`TarotError::InvalidSpreadSize`] if `count` exceeds the deck size.
pub fn draw<R: Rng + ?Sized>(
    deck: &Deck,
    count: usize,
    allow_reversals: bool,
    rng: &mut R,
) -> TarotResult<Vec<DrawnCard>> {
    if count > deck.len() {
        return Err(TarotError::InvalidSpreadSize {
            requested: count,
            available: deck.len(),
        });
    }

    let mut shuffled: Vec<Card> = deck.cards().to_vec();
    shuffled.shuffle(rng);

    let drawn: Vec<DrawnCard> = shuffled
        .into_iter()
        .take(count)
        .map(|card| DrawnCard {
            card,
            orientation: orientation(allow_reversals, rng),
        })
        .collect();

    tracing::debug!(
        count,
        allow_reversals,
        reversed = drawn.iter().filter(|d| d.is_reversed()).count(),
        "drew cards"
    );

    Ok(drawn)
}

fn orientation<R: Rng + ?Sized>(allow_reversals: bool, rng: &mut R) -> Orientation {
    if allow_reversals && rng.random_bool(REVERSAL_CHANCE) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}
