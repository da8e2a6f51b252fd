//! Composing a full reading: resolve a spread, deal it, label each card.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::DrawnCard;
use crate::deck::build_deck;
use crate::draw::draw;
use crate::error::TarotResult;
use crate::spread::{PositionLabel, Spread, SpreadKind, resolve_spread};

/// A drawn card sitting in a spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// What the position stands for.
    pub label: PositionLabel,
    /// The card dealt into it.
    pub drawn: DrawnCard,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            PositionLabel::Ordinal(n) => write!(f, "{n}. {}", self.drawn),
            PositionLabel::Named(name) => write!(f, "{name}: {}", self.drawn),
        }
    }
}

/// The result of laying out a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The spread that was laid.
    pub spread: SpreadKind,
    /// Whether cards could land reversed.
    pub allow_reversals: bool,
    /// Free-text question, carried for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Cards in position order.
    pub placements: Vec<Placement>,
}

impl Reading {
    /// Attach the querent's question, stored exactly as given.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Number of cards in the reading.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if no cards were dealt.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of cards that landed reversed.
    pub fn reversed_count(&self) -> usize {
        self.placements.iter().filter(|p| p.drawn.is_reversed()).count()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in &self.placements {
            writeln!(f, "{placement}")?;
        }
        Ok(())
    }
}

/// Lay out the spread called `spread_name`.
pub fn compose<R: Rng + ?Sized>(
    spread_name: &str,
    allow_reversals: bool,
    rng: &mut R,
) -> TarotResult<Reading> {
    let spread = resolve_spread(spread_name)?;
    compose_spread(spread, allow_reversals, rng)
}

/// Lay out an already resolved spread.
pub fn compose_spread<R: Rng + ?Sized>(
    spread: &Spread,
    allow_reversals: bool,
    rng: &mut R,
) -> TarotResult<Reading> {
    let deck = build_deck();
    let drawn = draw(&deck, spread.size, allow_reversals, rng)?;

    let placements = drawn
        .into_iter()
        .enumerate()
        .map(|(i, drawn)| Placement {
            label: spread.label(i),
            drawn,
        })
        .collect();

    tracing::debug!(spread = spread.name, allow_reversals, "composed reading");

    Ok(Reading {
        spread: spread.kind,
        allow_reversals,
        question: None,
        placements,
    })
}
