//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit, in ascending strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs (weakest).
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades (strongest).
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Diamonds, Self::Spades];

    /// Returns the suit's strength index (0 = clubs, 3 = spades).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CardError::InvalidSuit(value))
    }
}

/// Number of distinct ranks.
pub const RANKS: u8 = 13;

/// Highest valid rank (the two).
pub const MAX_RANK: u8 = RANKS - 1;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each seat.
pub const HAND_SIZE: usize = 13;

const RANK_SYMBOLS: [char; RANKS as usize] = [
    '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A', '2',
];

/// A playing card.
///
/// Ranks run from 0 (the three) to 12 (the two). Cards order by rank first and
/// suit second; the field order below is what the derived `Ord` relies on.
///
/// `==` compares the physical card (rank and suit). Use [`Card::same_rank`]
/// when only the rank matters, as when grouping pairs and triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "(u8, u8)", try_from = "(u8, u8)")
)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is above 12.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, CardError, Suit};
    ///
    /// let three_of_clubs = Card::new(0, Suit::Clubs).unwrap();
    /// assert_eq!(three_of_clubs.to_string(), "3C");
    /// assert_eq!(Card::new(13, Suit::Clubs), Err(CardError::InvalidRank(13)));
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Returns the rank (0 = three, 12 = two).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns whether both cards share a rank, ignoring suit.
    #[must_use]
    pub const fn same_rank(self, other: Self) -> bool {
        self.rank == other.rank
    }

    /// Returns the card `k` ranks higher in the same suit, wrapping past the two.
    ///
    /// The wrap makes this unsuitable for deciding whether a run is a legal
    /// straight; the classifier compares ranks directly.
    #[must_use]
    pub const fn successor(self, k: u8) -> Self {
        let rank = ((self.rank as u16 + k as u16) % RANKS as u16) as u8;
        Self {
            rank,
            suit: self.suit,
        }
    }

    /// Returns the card's position (0 to 51) in the sorted deck.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.rank as usize * Suit::ALL.len() + self.suit as usize
    }

    /// Iterates over the full deck in ascending order.
    pub fn deck() -> impl Iterator<Item = Self> {
        (0..RANKS).flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Self { rank, suit }))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_SYMBOLS[usize::from(self.rank)],
            self.suit.symbol()
        )
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the two-character notation used by [`Display`](fmt::Display),
    /// e.g. `3C`, `TH`, `2S`. Lowercase is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Parse);
        };

        let rank = rank.to_ascii_uppercase();
        let rank = RANK_SYMBOLS
            .iter()
            .position(|&symbol| symbol == rank)
            .ok_or(CardError::Parse)?;
        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'S' => Suit::Spades,
            _ => return Err(CardError::Parse),
        };

        Self::new(rank as u8, suit)
    }
}

impl From<Card> for (u8, u8) {
    fn from(card: Card) -> Self {
        (card.rank, card.suit.index())
    }
}

impl TryFrom<(u8, u8)> for Card {
    type Error = CardError;

    fn try_from((rank, suit): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(rank, Suit::try_from(suit)?)
    }
}
