//! A seat's hand of cards.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::card::Card;
use crate::combination::{Combination, MAX_PLAY, classify};

/// A set of cards that forms a recognized combination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    /// The cards, in ascending order.
    pub cards: Vec<Card>,
    /// What the cards classify as.
    pub combination: Combination,
}

/// An ordered, duplicate-free collection of cards held by one seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in ascending order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card, keeping the hand sorted.
    ///
    /// Returns `false` (and leaves the hand unchanged) if the card is already held.
    pub fn add(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(_) => false,
            Err(index) => {
                self.cards.insert(index, card);
                true
            }
        }
    }

    /// Returns the cards in ascending order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the exact card is held.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Returns the first of `cards` that is not held, if any.
    #[must_use]
    pub fn first_missing(&self, cards: &[Card]) -> Option<Card> {
        cards.iter().copied().find(|&card| !self.contains(card))
    }

    /// Removes every card in `cards`.
    ///
    /// Nothing is removed unless every card is held; on failure the first
    /// missing card is returned.
    ///
    /// # Errors
    ///
    /// Returns the first card of `cards` that is not in the hand.
    pub fn remove_all(&mut self, cards: &[Card]) -> Result<(), Card> {
        if let Some(missing) = self.first_missing(cards) {
            return Err(missing);
        }
        self.cards.retain(|card| !cards.contains(card));
        Ok(())
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Lists every subset of the hand that classifies as a recognized combination.
    ///
    /// Subsets are produced smallest first, each in ascending card order.
    pub fn combinations(&self) -> impl Iterator<Item = Play> + '_ {
        (1..=MAX_PLAY.min(self.cards.len())).flat_map(move |size| self.combinations_of(size))
    }

    /// Lists the recognized combinations made of exactly `size` cards.
    pub fn combinations_of(&self, size: usize) -> impl Iterator<Item = Play> + '_ {
        self.cards
            .iter()
            .copied()
            .combinations(size)
            .filter_map(|cards| {
                let combination = classify(&cards);
                combination
                    .is_valid()
                    .then_some(Play { cards, combination })
            })
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards: Vec<Card> = iter.into_iter().collect();
        cards.sort_unstable();
        cards.dedup();
        Self { cards }
    }
}
