//! Shared helpers for integration tests.

#![allow(dead_code)]

use bigtwo::{Card, Round, RoundOptions, Seat};
use tracing_subscriber::EnvFilter;

/// Installs a test-captured subscriber; `TEST_LOG` or `RUST_LOG` pick the level.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn card(notation: &str) -> Card {
    notation.parse().unwrap()
}

pub fn cards(notation: &str) -> Vec<Card> {
    notation.split_whitespace().map(card).collect()
}

pub fn seat(index: u8) -> Seat {
    Seat::new(index).unwrap()
}

/// Builds a round from four space-separated hands with `first` on turn.
pub fn round(hands: [&str; 4], first: u8) -> Round {
    Round::from_hands(hands.map(cards), seat(first), RoundOptions::default()).unwrap()
}

/// The full deck split by suit, one suit per seat: seat 0 holds the clubs.
pub fn suited_deal() -> Round {
    round(
        [
            "3C 4C 5C 6C 7C 8C 9C TC JC QC KC AC 2C",
            "3H 4H 5H 6H 7H 8H 9H TH JH QH KH AH 2H",
            "3D 4D 5D 6D 7D 8D 9D TD JD QD KD AD 2D",
            "3S 4S 5S 6S 7S 8S 9S TS JS QS KS AS 2S",
        ],
        0,
    )
}
