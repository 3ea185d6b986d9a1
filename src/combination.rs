//! Combination categories and the hand classifier.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// Largest number of cards a single play may contain.
pub const MAX_PLAY: usize = 5;

/// The kind of a combination, which a trick requires once it is led.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// A single card.
    HighCard,
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    Triple,
    /// Five consecutive ranks.
    Straight,
    /// Three of one rank and two of another.
    FullHouse,
    /// Four cards of one rank (a bomb).
    Quad,
}

impl Category {
    /// Returns the number of cards every combination of this category uses.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::HighCard => 1,
            Self::Pair => 2,
            Self::Triple => 3,
            Self::Quad => 4,
            Self::Straight | Self::FullHouse => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::Triple => "triple",
            Self::Straight => "straight",
            Self::FullHouse => "full house",
            Self::Quad => "quad",
        })
    }
}

/// The result of classifying a set of cards.
///
/// Single-group combinations carry their deciding card: the highest card of
/// the group or run. Its rank is the rank key and its suit breaks ties between
/// two plays with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combination {
    /// Not a recognized combination.
    Invalid,
    /// A single card.
    HighCard(Card),
    /// A pair, keyed by its higher card.
    Pair(Card),
    /// A triple, keyed by its highest card.
    Triple(Card),
    /// A straight, keyed by its top card.
    Straight(Card),
    /// A full house.
    FullHouse {
        /// Rank of the three matching cards.
        triple: u8,
        /// Higher card of the pair, used only when triple ranks coincide.
        pair: Card,
    },
    /// Four of a kind, keyed by rank.
    Quad(u8),
}

impl Combination {
    /// Returns the category, or `None` for [`Combination::Invalid`].
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Invalid => None,
            Self::HighCard(_) => Some(Category::HighCard),
            Self::Pair(_) => Some(Category::Pair),
            Self::Triple(_) => Some(Category::Triple),
            Self::Straight(_) => Some(Category::Straight),
            Self::FullHouse { .. } => Some(Category::FullHouse),
            Self::Quad(_) => Some(Category::Quad),
        }
    }

    /// Returns whether this is a recognized combination.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns whether this is a quad.
    #[must_use]
    pub const fn is_quad(&self) -> bool {
        matches!(self, Self::Quad(_))
    }

    /// Orders two combinations of the same category.
    ///
    /// Returns `None` when the categories differ or either side is invalid.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::HighCard(a), Self::HighCard(b))
            | (Self::Pair(a), Self::Pair(b))
            | (Self::Triple(a), Self::Triple(b))
            | (Self::Straight(a), Self::Straight(b)) => Some(a.cmp(b)),
            (
                Self::FullHouse {
                    triple: a,
                    pair: pair_a,
                },
                Self::FullHouse {
                    triple: b,
                    pair: pair_b,
                },
            ) => Some(a.cmp(b).then_with(|| pair_a.cmp(pair_b))),
            (Self::Quad(a), Self::Quad(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Classifies a set of cards.
///
/// Only the rank multiset (and, for straights, the sorted run) decides the
/// category, so the result does not depend on the order of `cards`. Sets that
/// name the same physical card twice are [`Combination::Invalid`].
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Combination, classify};
///
/// let cards: Vec<Card> = ["3C", "4D", "5H", "6S", "7C"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(classify(&cards), Combination::Straight("7C".parse().unwrap()));
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Combination {
    let Some(&first) = cards.first() else {
        return Combination::Invalid;
    };
    if cards.len() > MAX_PLAY {
        return Combination::Invalid;
    }

    let mut buffer = [first; MAX_PLAY];
    let sorted = &mut buffer[..cards.len()];
    sorted.copy_from_slice(cards);
    sorted.sort_unstable();

    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Combination::Invalid;
    }

    let low = sorted[0];
    let high = sorted[sorted.len() - 1];
    let one_rank = low.same_rank(high);

    match sorted.len() {
        1 => Combination::HighCard(high),
        2 if one_rank => Combination::Pair(high),
        3 if one_rank => Combination::Triple(high),
        4 if one_rank => Combination::Quad(high.rank()),
        5 => classify_five(sorted),
        _ => Combination::Invalid,
    }
}

/// Classifies five distinct, sorted cards.
fn classify_five(sorted: &[Card]) -> Combination {
    let mut groups = sorted.chunk_by(|a, b| a.same_rank(*b));
    match (groups.next(), groups.next(), groups.next()) {
        (Some(low), Some(high), None) => match (low.len(), high.len()) {
            (3, 2) => Combination::FullHouse {
                triple: low[0].rank(),
                pair: high[1],
            },
            (2, 3) => Combination::FullHouse {
                triple: high[0].rank(),
                pair: low[1],
            },
            _ => Combination::Invalid,
        },
        _ if sorted
            .windows(2)
            .all(|step| step[1].rank() == step[0].rank() + 1) =>
        {
            Combination::Straight(sorted[sorted.len() - 1])
        }
        _ => Combination::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn cards(notation: &str) -> Vec<Card> {
        notation
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect()
    }

    fn card(notation: &str) -> Card {
        notation.parse().unwrap()
    }

    #[test]
    fn sizes_without_a_shape_are_invalid() {
        assert_eq!(classify(&[]), Combination::Invalid);
        assert_eq!(classify(&cards("3C 4C")), Combination::Invalid);
        assert_eq!(classify(&cards("3C 3D 4C")), Combination::Invalid);
        assert_eq!(classify(&cards("3C 4C 5C 6C")), Combination::Invalid);
        assert_eq!(classify(&cards("3C 4C 5C 6C 7C 8C")), Combination::Invalid);
    }

    #[test]
    fn groups_keyed_by_highest_card() {
        assert_eq!(classify(&cards("KD")), Combination::HighCard(card("KD")));
        assert_eq!(classify(&cards("9S 9C")), Combination::Pair(card("9S")));
        assert_eq!(
            classify(&cards("JH JC JD")),
            Combination::Triple(card("JD"))
        );
        assert_eq!(classify(&cards("2C 2S 2H 2D")), Combination::Quad(12));
    }

    #[test]
    fn straights_do_not_wrap() {
        assert_eq!(
            classify(&cards("7C 3C 5H 4D 6S")),
            Combination::Straight(card("7C"))
        );
        assert_eq!(
            classify(&cards("JC QD KH AS 2C")),
            Combination::Straight(card("2C"))
        );
        assert_eq!(classify(&cards("AC 2D 3H 4S 5C")), Combination::Invalid);
        assert_eq!(classify(&cards("KC AD 2H 3S 4C")), Combination::Invalid);
        assert_eq!(classify(&cards("3C 4D 5H 6S 8C")), Combination::Invalid);
    }

    #[test]
    fn full_house_keyed_by_triple() {
        assert_eq!(
            classify(&cards("8C 8H 8S 4D 4C")),
            Combination::FullHouse {
                triple: 5,
                pair: card("4D"),
            }
        );
        assert_eq!(
            classify(&cards("8C 8H QS QD QC")),
            Combination::FullHouse {
                triple: 9,
                pair: card("8H"),
            }
        );
        assert_eq!(classify(&cards("8C 8H 8S 8D 4C")), Combination::Invalid);
        assert_eq!(classify(&cards("8C 8H 4S 4D 5C")), Combination::Invalid);
    }

    #[test]
    fn category_size_matches_classified_cards() {
        for notation in [
            "9D",
            "9C 9S",
            "9C 9D 9S",
            "9C 9D 9H 9S",
            "5C 6D 7H 8S 9C",
            "5C 5D 9H 9S 9C",
        ] {
            let played = cards(notation);
            let category = classify(&played).category().unwrap();
            assert_eq!(category.size(), played.len(), "{notation}");
        }
    }

    #[test]
    fn repeated_physical_card_is_invalid() {
        let three = card("3C");
        assert_eq!(classify(&[three, three]), Combination::Invalid);
    }

    #[test]
    fn compare_respects_category() {
        let low = classify(&cards("5C 5D"));
        let high = classify(&cards("5H 5S"));
        assert_eq!(low.compare(&high), Some(Ordering::Less));
        assert_eq!(low.compare(&classify(&cards("5C"))), None);
        assert_eq!(Combination::Invalid.compare(&Combination::Invalid), None);
    }
}
