//! Card identities and per-draw orientation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits of the minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Wands (fire).
    Wands,
    /// Cups (water).
    Cups,
    /// Swords (air).
    Swords,
    /// Pentacles (earth).
    Pentacles,
}

impl Suit {
    /// All suits in canonical deck order.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    /// The suit's printable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a suited card, from Ace up through the four court cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page (court card).
    Page,
    /// Knight (court card).
    Knight,
    /// Queen (court card).
    Queen,
    /// King (court card).
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Page,
            Self::Knight,
            Self::Queen,
            Self::King,
        ]
    }

    /// The rank's printable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 22 trump cards, declared in their traditional numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorArcana {
    /// 0, The Fool.
    TheFool,
    /// I, The Magician.
    TheMagician,
    /// II, The High Priestess.
    TheHighPriestess,
    /// III, The Empress.
    TheEmpress,
    /// IV, The Emperor.
    TheEmperor,
    /// V, The Hierophant.
    TheHierophant,
    /// VI, The Lovers.
    TheLovers,
    /// VII, The Chariot.
    TheChariot,
    /// VIII, Strength.
    Strength,
    /// IX, The Hermit.
    TheHermit,
    /// X, Wheel of Fortune.
    WheelOfFortune,
    /// XI, Justice.
    Justice,
    /// XII, The Hanged Man.
    TheHangedMan,
    /// XIII, Death.
    Death,
    /// XIV, Temperance.
    Temperance,
    /// XV, The Devil.
    TheDevil,
    /// XVI, The Tower.
    TheTower,
    /// XVII, The Star.
    TheStar,
    /// XVIII, The Moon.
    TheMoon,
    /// XIX, The Sun.
    TheSun,
    /// XX, Judgement.
    Judgement,
    /// XXI, The World.
    TheWorld,
}

impl MajorArcana {
    /// All major arcana in canonical order (The Fool first, The World last).
    pub fn all() -> &'static [Self] {
        &[
            Self::TheFool,
            Self::TheMagician,
            Self::TheHighPriestess,
            Self::TheEmpress,
            Self::TheEmperor,
            Self::TheHierophant,
            Self::TheLovers,
            Self::TheChariot,
            Self::Strength,
            Self::TheHermit,
            Self::WheelOfFortune,
            Self::Justice,
            Self::TheHangedMan,
            Self::Death,
            Self::Temperance,
            Self::TheDevil,
            Self::TheTower,
            Self::TheStar,
            Self::TheMoon,
            Self::TheSun,
            Self::Judgement,
            Self::TheWorld,
        ]
    }

    /// The card's traditional number (The Fool is 0, The World is 21).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The card's printable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TheFool => "The Fool",
            Self::TheMagician => "The Magician",
            Self::TheHighPriestess => "The High Priestess",
            Self::TheEmpress => "The Empress",
            Self::TheEmperor => "The Emperor",
            Self::TheHierophant => "The Hierophant",
            Self::TheLovers => "The Lovers",
            Self::TheChariot => "The Chariot",
            Self::Strength => "Strength",
            Self::TheHermit => "The Hermit",
            Self::WheelOfFortune => "Wheel of Fortune",
            Self::Justice => "Justice",
            Self::TheHangedMan => "The Hanged Man",
            Self::Death => "Death",
            Self::Temperance => "Temperance",
            Self::TheDevil => "The Devil",
            Self::TheTower => "The Tower",
            Self::TheStar => "The Star",
            Self::TheMoon => "The Moon",
            Self::TheSun => "The Sun",
            Self::Judgement => "Judgement",
            Self::TheWorld => "The World",
        }
    }
}

impl fmt::Display for MajorArcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A card identity: either a named trump or a rank of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    /// One of the 22 major arcana.
    Major(MajorArcana),
    /// A suited (minor arcana) card.
    Minor {
        /// The card's rank.
        rank: Rank,
        /// The card's suit.
        suit: Suit,
    },
}

impl Card {
    /// Build a suited card.
    pub fn minor(rank: Rank, suit: Suit) -> Self {
        Self::Minor { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major(major) => write!(f, "{major}"),
            Self::Minor { rank, suit } => write!(f, "{rank} of {suit}"),
        }
    }
}

/// Which way up a card landed. Assigned per draw, never per card identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The card reads normally.
    #[default]
    Upright,
    /// The card landed upside down.
    Reversed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A card as it came out of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card identity.
    pub card: Card,
    /// How the card landed.
    pub orientation: Orientation,
}

impl DrawnCard {
    /// An upright draw of `card`.
    pub fn upright(card: Card) -> Self {
        Self {
            card,
            orientation: Orientation::Upright,
        }
    }

    /// A reversed draw of `card`.
    pub fn reversed(card: Card) -> Self {
        Self {
            card,
            orientation: Orientation::Reversed,
        }
    }

    /// Returns true if the card landed reversed.
    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }
}

impl fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reversed() {
            write!(f, "{} (Reversed)", self.card)
        } else {
            write!(f, "{}", self.card)
        }
    }
}
