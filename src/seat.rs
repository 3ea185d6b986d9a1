//! Fixed seat positions around the table.

use core::fmt;

use crate::error::InvalidSeat;

/// Number of seats at a table.
pub const SEATS: usize = 4;

/// A seat position (0 to 3), independent of who sits there.
///
/// Turns rotate 0 → 1 → 2 → 3 → 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Seat(u8);

impl Seat {
    /// All seats in rotation order.
    pub const ALL: [Self; SEATS] = [Self(0), Self(1), Self(2), Self(3)];

    /// Creates a seat from its index, or `None` if the index is not 0 to 3.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < SEATS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the next seat in rotation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEATS as u8)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl TryFrom<u8> for Seat {
    type Error = InvalidSeat;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(InvalidSeat(index))
    }
}
