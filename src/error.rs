//! Error types for the Solitaire cipher library.

use std::fmt;

/// Errors produced by the Solitaire cipher library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// Card construction from an out-of-range rank or order, or an
    /// unrecognized rank/suit token.
    InvalidCardSpec,
    /// A deck that is not a permutation of the 54-card universe was passed
    /// to an operation that generates keystream.
    InvalidDeckState,
    /// Passphrase keying was attempted with no usable A-Z letters.
    EmptyPassphrase,
}

impl fmt::Display for SolitaireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolitaireError::InvalidCardSpec => {
                write!(f, "Card specification is not a valid rank, suit, or order")
            }
            SolitaireError::InvalidDeckState => {
                write!(f, "Deck is not a permutation of the 54-card universe")
            }
            SolitaireError::EmptyPassphrase => {
                write!(f, "Passphrase contains no usable letters")
            }
        }
    }
}

impl std::error::Error for SolitaireError {}
