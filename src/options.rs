//! Round configuration options.

use crate::card::{Card, Suit};

/// The three of clubs, which leads the first trick by default.
pub const THREE_OF_CLUBS: Card = match Card::new(0, Suit::Clubs) {
    Ok(card) => card,
    Err(_) => unreachable!(),
};

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_opening_card(None)
///     .with_quads_are_bombs(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Card whose holder leads a freshly dealt round.
    /// `None` lets seat 0 lead.
    pub opening_card: Option<Card>,
    /// Whether a quad beats any non-quad regardless of the trick's category.
    pub quads_are_bombs: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            opening_card: Some(THREE_OF_CLUBS),
            quads_are_bombs: true,
        }
    }
}

impl RoundOptions {
    /// Sets the card whose holder leads a dealt round.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_opening_card(Some("3D".parse().unwrap()));
    /// assert_eq!(options.opening_card.unwrap().to_string(), "3D");
    /// ```
    #[must_use]
    pub const fn with_opening_card(mut self, card: Option<Card>) -> Self {
        self.opening_card = card;
        self
    }

    /// Sets whether quads act as bombs.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_quads_are_bombs(false);
    /// assert!(!options.quads_are_bombs);
    /// ```
    #[must_use]
    pub const fn with_quads_are_bombs(mut self, bombs: bool) -> Self {
        self.quads_are_bombs = bombs;
        self
    }
}
