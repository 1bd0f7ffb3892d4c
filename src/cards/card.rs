//! Card values: ranks, the decorative suit, and face state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;

/// Card rank, Ace low.
///
/// Discriminants are the numeric rank values (Ace = 1 ... King = 13), so
/// "one less" comparisons work on [`Rank::value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order (A, 2, ..., K).
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 through 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// True if `self` sits exactly one rank above `other` (e.g. 7 over 6).
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }

    /// Short label used by card faces and asset names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suit. Only spades are dealt; the suit only selects the face image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    Spades,
}

impl Suit {
    /// Name used in asset file names.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
        }
    }
}

/// A single card.
///
/// The rank never changes after creation; `face_up` is flipped in place by
/// the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    /// Whether the face is visible.
    pub face_up: bool,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self { rank, face_up: false }
    }

    /// A face-up card.
    #[must_use]
    pub const fn face_up(rank: Rank) -> Self {
        Self { rank, face_up: true }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        Suit::Spades
    }

    /// Turn the card face-up. Returns true if it was face-down.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.face_up, true)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}", self.rank)
        } else {
            f.write_str("##")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_is_one_above() {
        assert!(Rank::Seven.is_one_above(Rank::Six));
        assert!(!Rank::Seven.is_one_above(Rank::Five));
        assert!(!Rank::Seven.is_one_above(Rank::Eight));
        assert!(Rank::Two.is_one_above(Rank::Ace));
        // No wrap-around between King and Ace.
        assert!(!Rank::Ace.is_one_above(Rank::King));
    }

    #[test]
    fn test_reveal() {
        let mut card = Card::new(Rank::Five);
        assert!(!card.face_up);
        assert!(card.reveal());
        assert!(card.face_up);
        assert!(!card.reveal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::face_up(Rank::Jack).to_string(), "J");
        assert_eq!(Card::new(Rank::Jack).to_string(), "##");
        assert_eq!(Card::new(Rank::Ace).suit(), Suit::Spades);
    }
}
