//! Card system: ranks, cards, the deck, and completed sequences.
//!
//! ## Key Types
//!
//! - `Rank`: Ace (1) through King (13)
//! - `Suit`: decorative; every card is a spade
//! - `Card`: rank plus face state
//! - `CompletedSequence`: a King-to-Ace run taken off the tableau
//!
//! ## Deck
//!
//! `create_deck` builds 8 copies of each rank (104 cards) face-down and
//! shuffles them with the game's seeded RNG.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit, RANK_COUNT};
pub use deck::{create_deck, ordered_deck, CompletedSequence, DECK_COPIES, DECK_SIZE};
