//! A round shared between callers.

use crate::card::Card;
use crate::combination::Combination;
use crate::error::PlayError;
use crate::round::{Round, RoundStatus, SeatView};
use crate::seat::Seat;
use crate::sync::Mutex;

/// A [`Round`] behind its own lock.
///
/// Each call holds the lock for the whole operation, so two actions on the
/// same table never interleave. Separate tables share nothing.
pub struct Table {
    round: Mutex<Round>,
}

impl Table {
    /// Wraps a round.
    #[must_use]
    pub const fn new(round: Round) -> Self {
        Self {
            round: Mutex::new(round),
        }
    }

    /// Plays `cards` for `seat`. See [`Round::submit_play`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Round::submit_play`].
    pub fn submit_play(&self, seat: Seat, cards: &[Card]) -> Result<Combination, PlayError> {
        self.round.lock().submit_play(seat, cards)
    }

    /// Passes for `seat`. See [`Round::pass`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Round::pass`].
    pub fn pass(&self, seat: Seat) -> Result<(), PlayError> {
        self.round.lock().pass(seat)
    }

    /// Returns what `seat` may see of the round.
    #[must_use]
    pub fn view(&self, seat: Seat) -> SeatView {
        self.round.lock().view(seat)
    }

    /// Returns whose turn it is or who won.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.lock().status()
    }

    /// Returns a copy of the full round state.
    #[must_use]
    pub fn snapshot(&self) -> Round {
        self.round.lock().clone()
    }

    /// Unwraps the round.
    #[must_use]
    pub fn into_inner(self) -> Round {
        self.round.into_inner()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::options::RoundOptions;

    #[test]
    fn concurrent_duplicate_plays_apply_once() {
        let round = Round::with_seed(RoundOptions::default(), 21);
        let opener = round.turn().unwrap();
        let lowest = round.hand(opener).cards()[0];
        let table = Arc::new(Table::new(round));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = Arc::clone(&table);
                thread::spawn(move || table.submit_play(opener, &[lowest]))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|result| **result == Err(PlayError::NotYourTurn))
                .count(),
            3
        );
        assert_eq!(table.snapshot().discard(), &[lowest]);
        assert_eq!(table.status(), RoundStatus::AwaitingPlay(opener.next()));
    }
}
