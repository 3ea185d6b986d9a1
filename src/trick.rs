//! Trick state and play legality.

use core::cmp::Ordering;

use crate::combination::{Category, Combination};
use crate::error::IllegalPlay;
use crate::hand::Play;
use crate::seat::{SEATS, Seat};

/// Returns whether `candidate` may open a trick.
///
/// Any recognized combination can lead.
#[must_use]
pub const fn can_open(candidate: &Combination) -> bool {
    candidate.is_valid()
}

/// Checks `candidate` against the leading combination of a trick.
///
/// A quad beats any non-quad when `quads_are_bombs` is set. Otherwise the
/// categories must match and the candidate must rank strictly higher.
///
/// # Errors
///
/// Returns the [`IllegalPlay`] reason the candidate loses.
pub fn check_against(
    candidate: &Combination,
    leading: &Combination,
    quads_are_bombs: bool,
) -> Result<(), IllegalPlay> {
    if !candidate.is_valid() {
        return Err(IllegalPlay::NotARecognizedCombination);
    }

    if quads_are_bombs && candidate.is_quad() && !leading.is_quad() {
        return Ok(());
    }

    match candidate.compare(leading) {
        None => Err(IllegalPlay::CategoryMismatch),
        Some(Ordering::Greater) => Ok(()),
        Some(_) => Err(IllegalPlay::DoesNotBeatLeader),
    }
}

/// The currently unbeaten play of a trick and who made it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lead {
    /// Seat that made the play.
    pub seat: Seat,
    /// The play itself.
    pub play: Play,
}

/// One exchange of plays within a round.
///
/// A trick is open until someone leads; from then on every play must beat the
/// [`Lead`]. Seats that pass sit out until the trick resets. Whether a quad
/// beats other categories is fixed when the trick is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    lead: Option<Lead>,
    active: [bool; SEATS],
    quads_are_bombs: bool,
}

impl Trick {
    /// Creates an open trick with every seat active and quads acting as bombs.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            lead: None,
            active: [true; SEATS],
            quads_are_bombs: true,
        }
    }

    /// Sets whether a quad beats any non-quad lead.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::Trick;
    ///
    /// let trick = Trick::open().with_quads_are_bombs(false);
    /// assert!(!trick.quads_are_bombs());
    /// ```
    #[must_use]
    pub const fn with_quads_are_bombs(mut self, bombs: bool) -> Self {
        self.quads_are_bombs = bombs;
        self
    }

    /// Returns whether a quad beats any non-quad lead in this trick.
    #[must_use]
    pub const fn quads_are_bombs(&self) -> bool {
        self.quads_are_bombs
    }

    /// Returns a fresh open trick with the same rules.
    #[must_use]
    pub(crate) const fn reopened(&self) -> Self {
        Self::open().with_quads_are_bombs(self.quads_are_bombs)
    }

    /// Returns whether nobody has led yet.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.lead.is_none()
    }

    /// Returns the leading play, if any.
    #[must_use]
    pub const fn lead(&self) -> Option<&Lead> {
        self.lead.as_ref()
    }

    /// Returns the category every play must match, or `None` while open.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.lead
            .as_ref()
            .and_then(|lead| lead.play.combination.category())
    }

    /// Returns whether `seat` may still act in this trick.
    #[must_use]
    pub const fn is_active(&self, seat: Seat) -> bool {
        self.active[seat.index()]
    }

    /// Iterates over seats still in the trick, in seat order.
    pub fn active_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        Seat::ALL.into_iter().filter(|&seat| self.is_active(seat))
    }

    /// Checks whether `candidate` may be played now.
    ///
    /// # Errors
    ///
    /// Returns the [`IllegalPlay`] reason the candidate is refused.
    pub fn check(&self, candidate: &Combination) -> Result<(), IllegalPlay> {
        match &self.lead {
            None if can_open(candidate) => Ok(()),
            None => Err(IllegalPlay::NotARecognizedCombination),
            Some(lead) => check_against(candidate, &lead.play.combination, self.quads_are_bombs),
        }
    }

    /// Returns whether `candidate` would be accepted.
    #[must_use]
    pub fn beats(&self, candidate: &Combination) -> bool {
        self.check(candidate).is_ok()
    }

    /// Returns the next active seat after `from` in rotation.
    ///
    /// Falls back to `from` itself when no other seat is active.
    pub(crate) fn next_active(&self, from: Seat) -> Seat {
        let mut seat = from.next();
        while seat != from {
            if self.is_active(seat) {
                return seat;
            }
            seat = seat.next();
        }
        from
    }

    pub(crate) fn take_lead(&mut self, seat: Seat, play: Play) {
        self.lead = Some(Lead { seat, play });
    }

    /// Removes `seat` from the trick.
    ///
    /// Returns the leader's seat when it is the only one left.
    pub(crate) fn withdraw(&mut self, seat: Seat) -> Option<Seat> {
        self.active[seat.index()] = false;
        let leader = self.lead.as_ref()?.seat;
        self.active_seats().eq([leader]).then_some(leader)
    }
}

impl Default for Trick {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Card;
    use crate::combination::classify;

    fn combo(notation: &str) -> Combination {
        let cards: alloc::vec::Vec<Card> = notation
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        classify(&cards)
    }

    fn led_by(seat: u8, notation: &str) -> Trick {
        let mut trick = Trick::open();
        let cards = notation
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect::<alloc::vec::Vec<Card>>();
        let combination = classify(&cards);
        trick.take_lead(Seat::new(seat).unwrap(), Play { cards, combination });
        trick
    }

    #[test]
    fn open_trick_accepts_any_valid_combination() {
        let trick = Trick::open();
        assert!(trick.beats(&combo("3C")));
        assert!(trick.beats(&combo("3C 4D 5H 6S 7C")));
        assert_eq!(
            trick.check(&combo("3C 4D")),
            Err(IllegalPlay::NotARecognizedCombination)
        );
        assert_eq!(trick.category(), None);
    }

    #[test]
    fn same_category_must_be_strictly_higher() {
        let trick = led_by(0, "9H");
        assert!(trick.beats(&combo("9S")));
        assert!(trick.beats(&combo("TC")));
        assert_eq!(
            trick.check(&combo("9C")),
            Err(IllegalPlay::DoesNotBeatLeader)
        );
        assert_eq!(trick.category(), Some(Category::HighCard));
    }

    #[test]
    fn pair_tie_broken_by_higher_suit() {
        let trick = led_by(1, "KC KD");
        assert!(trick.beats(&combo("KH KS")));
        assert!(!trick.beats(&combo("QH QS")));
    }

    #[test]
    fn mismatched_category_rejected() {
        let trick = led_by(0, "5C 5D");
        assert_eq!(
            trick.check(&combo("2S")),
            Err(IllegalPlay::CategoryMismatch)
        );
        assert_eq!(
            trick.check(&combo("8C 8D 8H")),
            Err(IllegalPlay::CategoryMismatch)
        );
    }

    #[test]
    fn quad_bombs_any_non_quad() {
        for lead in ["2S", "2S 2D", "2S 2D 2H", "TC JD QH KS AC", "AC AD AH KC KD"] {
            assert!(led_by(0, lead).beats(&combo("3C 3D 3H 3S")), "{lead}");
        }
        let quad_lead = led_by(0, "5C 5D 5H 5S");
        assert!(quad_lead.beats(&combo("6C 6D 6H 6S")));
        assert_eq!(
            quad_lead.check(&combo("4C 4D 4H 4S")),
            Err(IllegalPlay::DoesNotBeatLeader)
        );
        assert_eq!(
            quad_lead.check(&combo("2S")),
            Err(IllegalPlay::CategoryMismatch)
        );
    }

    #[test]
    fn bombs_can_be_disabled() {
        let mut trick = led_by(0, "9C").with_quads_are_bombs(false);
        let quad = combo("3C 3D 3H 3S");
        assert_eq!(trick.check(&quad), Err(IllegalPlay::CategoryMismatch));
        assert!(!trick.beats(&quad));

        trick.withdraw(Seat::new(1).unwrap());
        let reset = trick.reopened();
        assert!(reset.is_open());
        assert!(!reset.quads_are_bombs());
    }

    #[test]
    fn full_house_compares_triple_then_pair() {
        let trick = led_by(0, "5C 5D 5H 9C 9D");
        assert!(trick.beats(&combo("7C 7D 7H 4C 4D")));
        assert!(!trick.beats(&combo("4H 4S 4D 2C 2D")));

        let synthetic = Combination::FullHouse {
            triple: 2,
            pair: "9S".parse().unwrap(),
        };
        assert!(trick.beats(&synthetic));
        let lower_pair = Combination::FullHouse {
            triple: 2,
            pair: "8S".parse().unwrap(),
        };
        assert_eq!(
            trick.check(&lower_pair),
            Err(IllegalPlay::DoesNotBeatLeader)
        );
    }

    #[test]
    fn straight_tie_broken_by_top_card_suit() {
        let trick = led_by(0, "3C 4D 5H 6S 7D");
        assert!(trick.beats(&combo("3D 4C 5C 6C 7S")));
        assert!(!trick.beats(&combo("3D 4C 5C 6C 7C")));
    }

    #[test]
    fn withdraw_reports_lone_leader() {
        let mut trick = led_by(1, "4D");
        assert_eq!(trick.withdraw(Seat::new(2).unwrap()), None);
        assert_eq!(trick.withdraw(Seat::new(3).unwrap()), None);
        assert_eq!(
            trick.next_active(Seat::new(1).unwrap()),
            Seat::new(0).unwrap()
        );
        assert_eq!(
            trick.withdraw(Seat::new(0).unwrap()),
            Seat::new(1)
        );
        assert_eq!(
            trick.active_seats().collect::<alloc::vec::Vec<_>>(),
            vec![Seat::new(1).unwrap()]
        );
    }
}
