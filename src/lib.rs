//! Solitaire keystream cipher engine.
//!
//! Solitaire is a stream cipher whose keystream comes from repeatedly
//! permuting a simulated 54-card deck (52 standard cards plus two
//! distinguishable jokers) through a fixed sequence of card-moving
//! operations, and whose plaintext is combined with that keystream using
//! modular letter arithmetic.
//!
//! # Architecture
//!
//! ```text
//! Card      (value unit: rank/suit or linear order, jokers alias order 53)
//!     ↑ 54 of them, always a permutation
//! Deck      (owns the permutation algorithms: perfect shuffle,
//!            joker advance, triple cut, count cut, keystream round)
//!     ↑ driven round by round
//! Keystream (pulls one letter per round, skipping joker outputs)
//!     ↑ one letter per message letter
//! Codec     (normalize + affine letter combination, 5-letter blocks)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with matching deck states:
//!
//! ```
//! use solitaire::{codec, Deck};
//!
//! let mut encoder_deck = Deck::new();
//! encoder_deck.key_with_passphrase("pluvial").unwrap();
//!
//! let mut decoder_deck = Deck::new();
//! decoder_deck.key_with_passphrase("pluvial").unwrap();
//!
//! let ciphertext = codec::encode("attack at dawn", &mut encoder_deck).unwrap();
//! let plaintext = codec::decode(&ciphertext, &mut decoder_deck).unwrap();
//! assert_eq!(plaintext, "ATTAC KATDA WNXXX");
//! ```
//!
//! Derive a shared starting permutation with perfect shuffles:
//!
//! ```
//! use solitaire::Deck;
//!
//! let mut deck = Deck::new();
//! deck.perfect_shuffle();
//! deck.perfect_shuffle();
//! assert!(!deck.is_ordered());
//! ```

#![deny(clippy::all)]

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod keystream;

pub use card::{Card, JokerId, Suit};
pub use deck::{Deck, DECK_LEN};
pub use error::SolitaireError;
pub use keystream::KeystreamGenerator;
