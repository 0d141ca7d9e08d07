//! Keystream generation over a borrowed deck.
//!
//! [`KeystreamGenerator`] drives a [`Deck`] through repeated keystream
//! rounds, skipping the rounds that land on a joker, and hands out one
//! letter per pull. It validates the deck once up front so no round ever
//! runs on a corrupt state, then borrows it exclusively for its lifetime:
//! each round depends on the exact prior state, so nothing else may touch
//! the deck while a stream is being drawn.

use crate::deck::Deck;
use crate::error::SolitaireError;

/// Pulls keystream letters from an exclusively borrowed deck.
///
/// # Examples
///
/// ```
/// use solitaire::{Deck, KeystreamGenerator};
///
/// let mut deck = Deck::new();
/// let mut keystream = KeystreamGenerator::new(&mut deck).unwrap();
/// let first = keystream.next_letter();
/// assert!(first.is_ascii_uppercase());
/// ```
pub struct KeystreamGenerator<'a> {
    deck: &'a mut Deck,
}

impl<'a> KeystreamGenerator<'a> {
    /// Wraps a deck after checking the 54-card permutation invariant.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidDeckState`] if the deck is not a
    /// permutation of the 54-card universe.
    pub fn new(deck: &'a mut Deck) -> Result<Self, SolitaireError> {
        deck.validate()?;
        Ok(KeystreamGenerator { deck })
    }

    /// Produces the next keystream letter, running as many rounds as it
    /// takes to get past joker outputs.
    pub fn next_letter(&mut self) -> char {
        self.deck.generate_letter()
    }

    /// Produces exactly `letters_needed` keystream letters in order.
    pub fn letters(&mut self, letters_needed: usize) -> String {
        self.deck.generate_keystream(letters_needed)
    }
}
