//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::seat::Seat;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 0..=12.
    #[error("rank {0} is out of range")]
    InvalidRank(u8),
    /// Suit index outside 0..=3.
    #[error("suit {0} is out of range")]
    InvalidSuit(u8),
    /// Text is not a two-character card such as `3C` or `TH`.
    #[error("unrecognized card notation")]
    Parse,
}

/// A seat index outside 0 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seat index {0} is out of range")]
pub struct InvalidSeat(pub u8);

/// Why a play was refused by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalPlay {
    /// The cards do not form any recognized combination.
    #[error("cards do not form a recognized combination")]
    NotARecognizedCombination,
    /// The combination differs from the trick's category and is not a bomb.
    #[error("combination does not match the trick's category")]
    CategoryMismatch,
    /// The combination matches the category but is not higher than the leader.
    #[error("combination does not beat the leading play")]
    DoesNotBeatLeader,
}

/// Errors that can occur when a seat plays or passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// A card is not in the acting seat's hand.
    #[error("{0} is not in hand")]
    NotInHand(Card),
    /// The same card was named more than once.
    #[error("{0} was named more than once")]
    DuplicateCard(Card),
    /// The play breaks the rules.
    #[error("illegal play: {0}")]
    IllegalPlay(#[from] IllegalPlay),
    /// The seat on turn cannot pass while the trick is open.
    #[error("cannot pass while the trick is open")]
    CannotPassWhenTrickOpen,
    /// The round has already been won.
    #[error("the round is over")]
    OperationOnTerminalRound,
}

/// Errors that can occur when setting up a round from explicit hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A card was dealt more than once.
    #[error("{0} was dealt more than once")]
    DuplicateCard(Card),
    /// A seat was dealt no cards.
    #[error("{0} has no cards")]
    EmptyHand(Seat),
}
