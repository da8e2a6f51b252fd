//! Spread layouts and their position tables.
//!
//! A spread fixes how many cards are drawn and, for structured layouts,
//! what each position in the layout stands for. Layouts without named
//! positions are labeled with 1-based ordinals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TarotError, TarotResult};

/// Position names for the three-card spread.
pub const THREE_CARD_POSITIONS: &[&str] = &["Past", "Present", "Future"];

/// Position names for the Celtic Cross, in the order cards are laid.
pub const CELTIC_CROSS_POSITIONS: &[&str] = &[
    "Present/Significator",
    "Challenge",
    "Foundation/Past",
    "Recent Past",
    "Crown/Potential",
    "Near Future",
    "Self",
    "Environment",
    "Hopes/Fears",
    "Outcome",
];

/// The spreads known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpreadKind {
    /// A single card.
    #[default]
    Single,
    /// Past, present and future.
    Three,
    /// Five cards with ordinal positions.
    Five,
    /// The ten-card Celtic Cross.
    CelticCross,
}

impl SpreadKind {
    /// All spread kinds in catalog order.
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::Three, Self::Five, Self::CelticCross]
    }

    /// The catalog entry for this kind.
    pub fn spread(self) -> &'static Spread {
        match self {
            Self::Single => &SPREADS[0],
            Self::Three => &SPREADS[1],
            Self::Five => &SPREADS[2],
            Self::CelticCross => &SPREADS[3],
        }
    }

    /// The canonical spread name.
    pub fn name(self) -> &'static str {
        self.spread().name
    }

    /// Parse a spread name, accepting a few spellings of the Celtic Cross.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "single" | "one" => Some(Self::Single),
            "three" => Some(Self::Three),
            "five" => Some(Self::Five),
            "celticcross" | "celtic cross" | "celtic" => Some(Self::CelticCross),
            _ => None,
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpreadKind {
    type Err = TarotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_spread(s).map(|spread| spread.kind)
    }
}

/// A named layout: how many cards it takes and what each position means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spread {
    /// Which spread this is.
    pub kind: SpreadKind,
    /// Canonical name.
    pub name: &'static str,
    /// Number of cards drawn.
    pub size: usize,
    /// Named positions, one per card, or `None` for ordinal labels.
    pub positions: Option<&'static [&'static str]>,
}

impl Spread {
    /// The label for the card at `index` (0-based).
    ///
    /// Falls back to the 1-based ordinal when the spread has no named
    /// positions.
    pub fn label(&self, index: usize) -> PositionLabel {
        match self.positions.and_then(|names| names.get(index)) {
            Some(name) => PositionLabel::Named((*name).to_string()),
            None => PositionLabel::Ordinal(index + 1),
        }
    }

    /// Labels for every position in order.
    pub fn labels(&self) -> Vec<PositionLabel> {
        (0..self.size).map(|i| self.label(i)).collect()
    }
}

/// The label attached to a spread position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionLabel {
    /// A named position such as "Past".
    Named(String),
    /// A 1-based position number.
    Ordinal(usize),
}

impl PositionLabel {
    /// Returns true for ordinal labels.
    pub fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal(_))
    }
}

impl fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Ordinal(n) => write!(f, "{n}"),
        }
    }
}

/// The spread catalog, in [`SpreadKind::all`] order.
pub static SPREADS: [Spread; 4] = [
    Spread {
        kind: SpreadKind::Single,
        name: "single",
        size: 1,
        positions: None,
    },
    Spread {
        kind: SpreadKind::Three,
        name: "three",
        size: 3,
        positions: Some(THREE_CARD_POSITIONS),
    },
    Spread {
        kind: SpreadKind::Five,
        name: "five",
        size: 5,
        positions: None,
    },
    Spread {
        kind: SpreadKind::CelticCross,
        name: "celticCross",
        size: 10,
        positions: Some(CELTIC_CROSS_POSITIONS),
    },
];

/// Look up a spread by name.
///
/// Fails with [`TarotError::UnknownSpreadType`] if the name is not in the
/// catalog.
pub fn resolve_spread(name: &str) -> TarotResult<&'static Spread> {
    SpreadKind::parse(name)
        .map(SpreadKind::spread)
        .ok_or_else(|| TarotError::UnknownSpreadType(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(resolve_spread("single").unwrap().size, 1);
        assert_eq!(resolve_spread("three").unwrap().size, 3);
        assert_eq!(resolve_spread("five").unwrap().size, 5);
        assert_eq!(resolve_spread("celticCross").unwrap().size, 10);
    }

    #[test]
    fn named_positions_match_size() {
        for spread in &SPREADS {
            if let Some(positions) = spread.positions {
                assert_eq!(positions.len(), spread.size, "{}", spread.name);
            }
        }
    }

    #[test]
    fn celtic_cross_positions() {
        let spread = resolve_spread("celticCross").unwrap();
        let positions = spread.positions.unwrap();
        assert_eq!(positions.len(), 10);
        assert_eq!(positions[0], "Present/Significator");
        assert_eq!(positions[9], "Outcome");
    }

    #[test]
    fn celtic_aliases() {
        for name in ["celtic", "Celtic Cross", "celtic-cross", "celtic_cross", "CELTICCROSS"] {
            assert_eq!(resolve_spread(name).unwrap().kind, SpreadKind::CelticCross, "{name}");
        }
    }

    #[test]
    fn unknown_spread_fails() {
        assert_eq!(
            resolve_spread("unknown").unwrap_err(),
            TarotError::UnknownSpreadType("unknown".to_string())
        );
        assert!(resolve_spread("").is_err());
    }

    #[test]
    fn labels() {
        let three = SpreadKind::Three.spread();
        let labels: Vec<String> = three.labels().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Past", "Present", "Future"]);

        let five = SpreadKind::Five.spread();
        assert_eq!(five.label(0), PositionLabel::Ordinal(1));
        assert_eq!(five.label(4), PositionLabel::Ordinal(5));
        assert!(five.labels().iter().all(PositionLabel::is_ordinal));
    }

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in SpreadKind::all() {
            assert_eq!(kind.spread().kind, *kind);
            assert_eq!(kind.name().parse::<SpreadKind>().unwrap(), *kind);
        }
        assert_eq!(SpreadKind::CelticCross.to_string(), "celticCross");
    }
}
