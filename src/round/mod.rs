//! Round engine and state management.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::seat::{SEATS, Seat};
use crate::trick::Trick;

mod actions;
pub mod state;
mod view;

pub use state::{Action, PlayRecord, RoundStatus};
pub use view::SeatView;

/// A single round of play, from the deal until one seat empties its hand.
///
/// The round owns every seat's hand, the current [`Trick`], the discard stack
/// and the history of accepted actions. It changes only through
/// [`Round::submit_play`] and [`Round::pass`]; a call that fails leaves the
/// round exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Hands indexed by seat.
    hands: [Hand; SEATS],
    /// Whose turn it is, or who won.
    status: RoundStatus,
    /// Trick number within this round: how many tricks have been completed.
    round: u32,
    /// The trick in progress.
    trick: Trick,
    /// Played cards, in the order they were played.
    discard: Vec<Card>,
    /// Accepted actions, oldest first.
    history: Vec<PlayRecord>,
    /// Rule options.
    options: RoundOptions,
}

impl Round {
    /// Shuffles a fresh deck with `rng` and deals thirteen cards to each seat.
    ///
    /// The holder of [`RoundOptions::opening_card`] leads; without an opening
    /// card seat 0 leads.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Round, RoundOptions};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let round = Round::deal(RoundOptions::default(), &mut rng);
    /// assert!(round.turn().is_some());
    /// ```
    pub fn deal<R: Rng + ?Sized>(options: RoundOptions, rng: &mut R) -> Self {
        let mut deck: Vec<Card> = Card::deck().collect();
        deck.shuffle(rng);

        let hands: [Hand; SEATS] = core::array::from_fn(|seat| {
            deck[seat * HAND_SIZE..(seat + 1) * HAND_SIZE]
                .iter()
                .copied()
                .collect()
        });

        let first = options
            .opening_card
            .and_then(|card| {
                Seat::ALL
                    .into_iter()
                    .find(|seat| hands[seat.index()].contains(card))
            })
            .unwrap_or(Seat::ALL[0]);

        tracing::debug!(first = %first, "dealt round");
        Self::assemble(hands, first, options)
    }

    /// Deals a round from a deterministic seed.
    ///
    /// The same seed and options always produce the same deal.
    #[must_use]
    pub fn with_seed(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::deal(options, &mut rng)
    }

    /// Builds a round from explicit hands, with `first` on turn.
    ///
    /// Hands need not cover the whole deck, but no card may appear twice and
    /// every seat must hold at least one card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DuplicateCard`] if a card is dealt twice, or
    /// [`DealError::EmptyHand`] if a seat has no cards.
    pub fn from_hands<I>(
        hands: [I; SEATS],
        first: Seat,
        options: RoundOptions,
    ) -> Result<Self, DealError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut dealt = [false; DECK_SIZE];
        let mut built: [Hand; SEATS] = Default::default();

        for (seat, cards) in Seat::ALL.into_iter().zip(hands) {
            let hand = &mut built[seat.index()];
            for card in cards {
                if core::mem::replace(&mut dealt[card.ordinal()], true) {
                    return Err(DealError::DuplicateCard(card));
                }
                hand.add(card);
            }
            if hand.is_empty() {
                return Err(DealError::EmptyHand(seat));
            }
        }

        Ok(Self::assemble(built, first, options))
    }

    fn assemble(hands: [Hand; SEATS], first: Seat, options: RoundOptions) -> Self {
        Self {
            hands,
            status: RoundStatus::AwaitingPlay(first),
            round: 0,
            trick: Trick::open().with_quads_are_bombs(options.quads_are_bombs),
            discard: Vec::new(),
            history: Vec::new(),
            options,
        }
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns whose turn it is or who won.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the seat on turn, or `None` once the round is won.
    #[must_use]
    pub const fn turn(&self) -> Option<Seat> {
        self.status.turn()
    }

    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        self.status.winner()
    }

    /// Returns the trick number, counting completed tricks from 0.
    ///
    /// This is not a count of rounds; a [`Round`] is one whole deal.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the trick in progress.
    #[must_use]
    pub const fn trick(&self) -> &Trick {
        &self.trick
    }

    /// Returns a seat's hand.
    ///
    /// Only the owning seat should be shown this; see [`Round::view`].
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Returns how many cards a seat holds.
    #[must_use]
    pub fn hand_size(&self, seat: Seat) -> usize {
        self.hands[seat.index()].len()
    }

    /// Returns every played card, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    /// Returns the number of cards held plus discarded.
    ///
    /// This stays constant for the whole round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.discard.len()
    }
}
