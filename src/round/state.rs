//! Round state and history types.

use crate::hand::Play;
use crate::seat::Seat;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStatus {
    /// Waiting for the given seat to play or pass.
    AwaitingPlay(Seat),
    /// The given seat emptied its hand; no further actions are accepted.
    RoundWon(Seat),
}

impl RoundStatus {
    /// Returns the seat on turn, or `None` once the round is won.
    #[must_use]
    pub const fn turn(self) -> Option<Seat> {
        match self {
            Self::AwaitingPlay(seat) => Some(seat),
            Self::RoundWon(_) => None,
        }
    }

    /// Returns the winner, if the round is over.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::AwaitingPlay(_) => None,
            Self::RoundWon(seat) => Some(seat),
        }
    }
}

/// Something a seat did on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The seat played these cards.
    Play(Play),
    /// The seat passed.
    Pass,
}

/// One accepted action in the round's history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayRecord {
    /// Seat that acted.
    pub seat: Seat,
    /// Trick number the action belongs to (tricks completed before it).
    pub round: u32,
    /// What the seat did.
    pub action: Action,
}
