//! A Big Two rule engine with optional `no_std` support.
//!
//! The crate classifies plays into combinations, decides whether they beat the
//! trick in progress, and runs the turn and trick sequence of a four-seat
//! round until somebody sheds their last card. Dealing takes an injected
//! random source; input, presentation and scoring are left to the caller.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Round, RoundOptions, RoundStatus};
//!
//! let mut round = Round::with_seed(RoundOptions::default(), 42);
//! let opener = round.turn().unwrap();
//!
//! // The opener holds the three of clubs, the lowest single.
//! let lowest = round.hand(opener).cards()[0];
//! round.submit_play(opener, &[lowest]).unwrap();
//! assert_eq!(round.status(), RoundStatus::AwaitingPlay(opener.next()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combination;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod seat;
mod sync;
pub mod table;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Suit};
pub use combination::{Category, Combination, classify};
pub use error::{CardError, DealError, IllegalPlay, InvalidSeat, PlayError};
pub use hand::{Hand, Play};
pub use options::RoundOptions;
pub use round::{Action, PlayRecord, Round, RoundStatus, SeatView};
pub use seat::Seat;
pub use table::Table;
pub use trick::{Lead, Trick, can_open, check_against};
