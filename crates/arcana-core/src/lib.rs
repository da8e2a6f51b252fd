//! Tarot deck and spread engine.
//!
//! Builds the canonical 78-card deck, deals cards with a uniform shuffle and
//! optional per-card reversals, and lays them out in named spreads
//! (single, three-card, five-card, Celtic Cross). Every draw takes its own
//! random source, so seeded draws are reproducible and independent.

pub mod card;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod reading;
pub mod spread;

pub use card::{Card, DrawnCard, MajorArcana, Orientation, Rank, Suit};
pub use config::ReadingConfig;
pub use deck::{DECK_SIZE, Deck, build_deck};
pub use draw::draw;
pub use error::{TarotError, TarotResult};
pub use reading::{Placement, Reading, compose, compose_spread};
pub use spread::{PositionLabel, SPREADS, Spread, SpreadKind, resolve_spread};
