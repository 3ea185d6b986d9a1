use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::Category;
use crate::seat::{SEATS, Seat};
use crate::trick::Lead;

use super::{PlayRecord, Round, RoundStatus};

/// What one seat is allowed to see of a round.
///
/// Other seats appear only as hand sizes; their unplayed cards are never
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatView {
    /// The seat this view belongs to.
    pub seat: Seat,
    /// The seat's own cards.
    pub hand: Vec<Card>,
    /// Cards held by every seat, indexed by seat.
    pub hand_sizes: [usize; SEATS],
    /// Whose turn it is or who won.
    pub status: RoundStatus,
    /// Trick number, counting completed tricks from 0.
    pub round: u32,
    /// Category the current trick requires, or `None` while it is open.
    pub category: Option<Category>,
    /// The play to beat, if any.
    pub lead: Option<Lead>,
    /// Seats still in the current trick.
    pub active: Vec<Seat>,
    /// Every accepted action so far.
    pub history: Vec<PlayRecord>,
}

impl Round {
    /// Projects the round as `seat` is allowed to see it.
    #[must_use]
    pub fn view(&self, seat: Seat) -> SeatView {
        SeatView {
            seat,
            hand: self.hand(seat).cards().to_vec(),
            hand_sizes: Seat::ALL.map(|other| self.hand_size(other)),
            status: self.status,
            round: self.round,
            category: self.trick.category(),
            lead: self.trick.lead().cloned(),
            active: self.trick.active_seats().collect(),
            history: self.history.clone(),
        }
    }
}
