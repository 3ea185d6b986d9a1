use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::{Category, Combination, MAX_PLAY, classify};
use crate::error::PlayError;
use crate::hand::Play;
use crate::seat::Seat;

use super::{Action, PlayRecord, Round, RoundStatus};

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|&(index, card)| cards[..index].contains(card))
        .map(|(_, &card)| card)
}

impl Round {
    fn ensure_turn(&self, seat: Seat) -> Result<(), PlayError> {
        match self.status {
            RoundStatus::RoundWon(_) => Err(PlayError::OperationOnTerminalRound),
            RoundStatus::AwaitingPlay(turn) if turn != seat => Err(PlayError::NotYourTurn),
            RoundStatus::AwaitingPlay(_) => Ok(()),
        }
    }

    /// Runs every check `submit_play` makes, without changing anything.
    fn validate_play(&self, seat: Seat, cards: &[Card]) -> Result<Combination, PlayError> {
        self.ensure_turn(seat)?;

        if let Some(card) = first_duplicate(cards) {
            return Err(PlayError::DuplicateCard(card));
        }

        if let Some(card) = self.hands[seat.index()].first_missing(cards) {
            return Err(PlayError::NotInHand(card));
        }

        let combination = classify(cards);
        self.trick.check(&combination)?;

        Ok(combination)
    }

    /// Plays `cards` from `seat`'s hand.
    ///
    /// On success the cards move to the discard stack, the play leads the
    /// trick, and the turn passes to the next seat still in the trick. Emptying
    /// the hand wins the round.
    ///
    /// Returns the combination the cards formed.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not `seat`'s turn, a card
    /// is named twice or is not in the hand, or the play is illegal. The round
    /// is unchanged after any error.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, Combination, Round, RoundOptions, Seat};
    ///
    /// let hands = [["3C", "9D"], ["4D", "TD"], ["5H", "JD"], ["6S", "QD"]]
    ///     .map(|hand| hand.map(|c| c.parse::<Card>().unwrap()));
    /// let mut round = Round::from_hands(hands, Seat::ALL[0], RoundOptions::default()).unwrap();
    ///
    /// let three: Card = "3C".parse().unwrap();
    /// assert_eq!(round.submit_play(Seat::ALL[0], &[three]), Ok(Combination::HighCard(three)));
    /// assert_eq!(round.turn(), Some(Seat::ALL[1]));
    /// ```
    pub fn submit_play(&mut self, seat: Seat, cards: &[Card]) -> Result<Combination, PlayError> {
        let combination = match self.validate_play(seat, cards) {
            Ok(combination) => combination,
            Err(err) => {
                tracing::trace!(seat = %seat, error = %err, "play rejected");
                return Err(err);
            }
        };

        let mut played: Vec<Card> = cards.to_vec();
        played.sort_unstable();

        let hand = &mut self.hands[seat.index()];
        hand.remove_all(&played).map_err(PlayError::NotInHand)?;
        let emptied = hand.is_empty();

        self.discard.extend_from_slice(&played);
        let play = Play {
            cards: played,
            combination,
        };
        self.history.push(PlayRecord {
            seat,
            round: self.round,
            action: Action::Play(play.clone()),
        });
        self.trick.take_lead(seat, play);

        tracing::debug!(seat = %seat, combination = ?combination, "play accepted");

        if emptied {
            self.status = RoundStatus::RoundWon(seat);
            tracing::info!(seat = %seat, tricks = self.round, "round won");
        } else {
            self.status = RoundStatus::AwaitingPlay(self.trick.next_active(seat));
        }

        Ok(combination)
    }

    /// Passes for `seat`, which sits out the rest of the trick.
    ///
    /// When only the leader is left in the trick it resets: the trick reopens,
    /// every seat rejoins, and the leader leads the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not `seat`'s turn, or the
    /// trick is open. The round is unchanged after any error.
    pub fn pass(&mut self, seat: Seat) -> Result<(), PlayError> {
        if let Err(err) = self.ensure_turn(seat) {
            tracing::trace!(seat = %seat, error = %err, "pass rejected");
            return Err(err);
        }
        if self.trick.is_open() {
            tracing::trace!(seat = %seat, "pass rejected on open trick");
            return Err(PlayError::CannotPassWhenTrickOpen);
        }

        self.history.push(PlayRecord {
            seat,
            round: self.round,
            action: Action::Pass,
        });
        tracing::debug!(seat = %seat, "pass");

        if let Some(leader) = self.trick.withdraw(seat) {
            self.trick = self.trick.reopened();
            self.round += 1;
            self.status = RoundStatus::AwaitingPlay(leader);
            tracing::info!(leader = %leader, round = self.round, "trick reset");
        } else {
            self.status = RoundStatus::AwaitingPlay(self.trick.next_active(seat));
        }

        Ok(())
    }

    /// Lists every play `seat` could make right now.
    ///
    /// Returns nothing when it is not `seat`'s turn or the round is over.
    /// Passing is never included; when the list is empty and the trick is led,
    /// the seat still has to call [`Round::pass`] itself.
    #[must_use]
    pub fn legal_plays(&self, seat: Seat) -> Vec<Play> {
        if self.ensure_turn(seat).is_err() {
            return Vec::new();
        }

        let hand = &self.hands[seat.index()];
        let candidates: Vec<Play> = match self.trick.category() {
            None => hand.combinations().collect(),
            Some(category) => {
                let bombs = self.trick.quads_are_bombs();
                (1..=MAX_PLAY)
                    .filter(|&size| {
                        size == category.size() || (bombs && size == Category::Quad.size())
                    })
                    .flat_map(|size| hand.combinations_of(size))
                    .collect()
            }
        };

        candidates
            .into_iter()
            .filter(|play| self.trick.check(&play.combination).is_ok())
            .collect()
    }
}
