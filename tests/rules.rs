//! Classification and legality tests.

mod common;

use bigtwo::{
    Card, CardError, Category, Combination, IllegalPlay, Suit, Trick, can_open, check_against,
    classify,
};
use common::{card, cards};

#[test]
fn card_construction_range() {
    for rank in 0..=12 {
        for suit in Suit::ALL {
            let built = Card::new(rank, suit).unwrap();
            assert_eq!(built.rank(), rank);
            assert_eq!(built.suit(), suit);
        }
    }
    for rank in 13..=20 {
        assert_eq!(Card::new(rank, Suit::Hearts), Err(CardError::InvalidRank(rank)));
    }
}

#[test]
fn low_straight_is_keyed_by_seven() {
    assert_eq!(
        classify(&cards("3C 4D 5H 6S 7C")),
        Combination::Straight(card("7C"))
    );
}

#[test]
fn ace_two_three_four_five_does_not_wrap() {
    assert_eq!(classify(&cards("AC 2D 3H 4S 5C")), Combination::Invalid);
}

#[test]
fn categories_ignore_suit() {
    let mixed = classify(&cards("9C 9H 9S 4C 4H"));
    let other = classify(&cards("9D 9H 9S 4D 4S"));
    assert_eq!(mixed.category(), Some(Category::FullHouse));
    assert_eq!(mixed.category(), other.category());
}

#[test]
fn higher_full_house_wins() {
    let three_over = classify(&cards("3C 3D 3H 9C 9D"));
    let five_over = classify(&cards("5C 5D 5H 4C 4D"));
    assert!(matches!(three_over, Combination::FullHouse { triple: 0, .. }));
    assert!(matches!(five_over, Combination::FullHouse { triple: 2, .. }));
    assert_eq!(check_against(&five_over, &three_over, true), Ok(()));
    assert_eq!(
        check_against(&three_over, &five_over, true),
        Err(IllegalPlay::DoesNotBeatLeader)
    );
}

#[test]
fn equal_triples_fall_back_to_pair() {
    let leading = Combination::FullHouse {
        triple: 5,
        pair: card("9D"),
    };
    let higher_pair = Combination::FullHouse {
        triple: 5,
        pair: card("JC"),
    };
    let same = leading;
    assert_eq!(check_against(&higher_pair, &leading, true), Ok(()));
    assert_eq!(
        check_against(&same, &leading, true),
        Err(IllegalPlay::DoesNotBeatLeader)
    );
}

#[test]
fn invalid_never_opens_or_beats() {
    assert!(!can_open(&Combination::Invalid));
    assert!(can_open(&classify(&cards("2S"))));
    assert_eq!(
        check_against(&Combination::Invalid, &classify(&cards("3C")), true),
        Err(IllegalPlay::NotARecognizedCombination)
    );
    assert!(!Trick::open().beats(&Combination::Invalid));
}

#[test]
fn single_tie_broken_by_suit() {
    let leading = classify(&cards("KH"));
    assert_eq!(check_against(&classify(&cards("KD")), &leading, true), Ok(()));
    assert_eq!(
        check_against(&classify(&cards("KC")), &leading, true),
        Err(IllegalPlay::DoesNotBeatLeader)
    );
}
