//! Error types for deck draws and spread lookup.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while resolving a spread or drawing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TarotError {
    /// The spread name is not in the catalog.
    #[error("unknown spread type: {0}")]
    UnknownSpreadType(String),

    /// More cards were requested than the deck holds.
    #[error("invalid spread size: requested {requested} cards from a deck of {available}")]
    InvalidSpreadSize {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },

    /// A card list that is not the standard deck.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),
}
