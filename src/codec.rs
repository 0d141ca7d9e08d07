//! Text normalization and the letter-combination codec.
//!
//! The codec turns raw text into fixed five-letter uppercase blocks and
//! combines message letters with keystream letters position-wise, working
//! directly on ASCII letter codes. The affine constants are load-bearing:
//! encoding adds `+1` and decoding adds `+25` before the mod-26 reduction,
//! and the pair is an exact inverse only because the letter-code base and
//! the offsets cancel mod 26. They must not be "simplified".
//!
//! Every call that draws keystream mutates the deck irreversibly; encode
//! and decode must be handed deck states that start at the same
//! configuration to stay synchronized. Nothing here clones or checkpoints
//! deck state.

use crate::deck::Deck;
use crate::error::SolitaireError;
use crate::keystream::KeystreamGenerator;

/// Letters per output block.
const BLOCK_LEN: usize = 5;

/// ASCII code of 'A', the base of all letter arithmetic.
const LETTER_BASE: u8 = b'A';

/// Padding letter appended to fill the last block.
const PAD_LETTER: u8 = b'X';

/// Normalizes raw text into five-letter uppercase blocks.
///
/// Uppercases, discards every character that is not A-Z, pads the filtered
/// stream with `X` to a multiple of 5, and groups the result into
/// space-separated 5-letter blocks.
///
/// # Examples
///
/// ```
/// use solitaire::codec;
///
/// assert_eq!(codec::normalize("what's going on??"), "WHATS GOING ONXXX");
/// ```
pub fn normalize(text: &str) -> String {
    let mut letters = letter_stream(text);
    pad(&mut letters);
    into_blocks(&letters)
}

/// Encrypts plaintext against the keystream drawn from `deck`.
///
/// The plaintext is normalized first, so the `X` padding is encrypted along
/// with the message. Per letter, `C = ((P + K + 1) % 26) + base` over ASCII
/// codes.
///
/// # Parameters
/// - `plaintext`: raw text; anything outside A-Z is discarded.
/// - `deck`: the keyed deck, consumed as the keystream advances.
///
/// # Returns
/// Uppercase ciphertext grouped in blocks of 5 separated by single spaces.
///
/// # Errors
/// Returns [`SolitaireError::InvalidDeckState`] if `deck` is not a
/// permutation of the 54-card universe; the check runs before any round.
///
/// # Examples
///
/// ```
/// use solitaire::{codec, Deck};
///
/// let ciphertext = codec::encode("ATTACKATDAWN", &mut Deck::new()).unwrap();
/// let plaintext = codec::decode(&ciphertext, &mut Deck::new()).unwrap();
/// assert_eq!(plaintext, "ATTAC KATDA WNXXX");
/// ```
pub fn encode(plaintext: &str, deck: &mut Deck) -> Result<String, SolitaireError> {
    let mut keystream = KeystreamGenerator::new(deck)?;
    let mut message = letter_stream(plaintext);
    pad(&mut message);
    let key = keystream.letters(message.len());
    let combined: Vec<u8> = message
        .iter()
        .zip(key.bytes())
        .map(|(&p, k)| ((p as u32 + k as u32 + 1) % 26) as u8 + LETTER_BASE)
        .collect();
    Ok(into_blocks(&combined))
}

/// Decrypts ciphertext against the keystream drawn from `deck`.
///
/// Per letter, `P = ((C - K + 25) % 26) + base`: the exact algebraic
/// inverse of [`encode`]. A deck state out of lock-step with the encoding
/// deck is not an error: it produces well-defined but meaningless output,
/// as a stream cipher must.
///
/// # Errors
/// Returns [`SolitaireError::InvalidDeckState`] if `deck` is not a
/// permutation of the 54-card universe; the check runs before any round.
pub fn decode(ciphertext: &str, deck: &mut Deck) -> Result<String, SolitaireError> {
    let mut keystream = KeystreamGenerator::new(deck)?;
    let message = letter_stream(ciphertext);
    let key = keystream.letters(message.len());
    let mut combined: Vec<u8> = message
        .iter()
        .zip(key.bytes())
        .map(|(&c, k)| ((c as u32 + 25 - k as u32) % 26) as u8 + LETTER_BASE)
        .collect();
    pad(&mut combined);
    Ok(into_blocks(&combined))
}

/// Uppercases and strips everything outside A-Z.
fn letter_stream(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8)
        .collect()
}

/// Pads with `X` until the length is a multiple of the block size.
fn pad(letters: &mut Vec<u8>) {
    while letters.len() % BLOCK_LEN != 0 {
        letters.push(PAD_LETTER);
    }
}

/// Groups letters into space-separated blocks.
fn into_blocks(letters: &[u8]) -> String {
    let mut blocks = String::with_capacity(letters.len() + letters.len() / BLOCK_LEN);
    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 && i % BLOCK_LEN == 0 {
            blocks.push(' ');
        }
        blocks.push(letter as char);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, JokerId};

    #[test]
    fn test_normalize_strips_pads_and_blocks() {
        assert_eq!(normalize("what's going on??"), "WHATS GOING ONXXX");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_normalize_exact_block_is_unpadded() {
        assert_eq!(normalize("hello"), "HELLO");
        assert_eq!(normalize("helloworld"), "HELLO WORLD");
    }

    #[test]
    fn test_normalize_discards_digits_and_symbols() {
        assert_eq!(normalize("a1b2c3"), "ABCXX");
    }

    #[test]
    fn test_encode_first_letters_against_frozen_keystream() {
        // The unkeyed keystream starts D, W, J; "A" normalizes to "AXXXX",
        // so the ciphertext must start (A+D+1), (X+W+1), (X+J+1).
        let ciphertext = encode("A", &mut Deck::new()).unwrap();
        assert_eq!(ciphertext.len(), 5);
        assert!(ciphertext.starts_with("EUH"));
    }

    #[test]
    fn test_encode_empty_plaintext() {
        assert_eq!(encode("", &mut Deck::new()).unwrap(), "");
    }

    #[test]
    fn test_round_trip_with_fresh_decks() {
        let ciphertext = encode("ATTACKATDAWN", &mut Deck::new()).unwrap();
        let plaintext = decode(&ciphertext, &mut Deck::new()).unwrap();
        assert_eq!(plaintext, "ATTAC KATDA WNXXX");
    }

    #[test]
    fn test_decode_formula_inverts_encode_for_all_letter_pairs() {
        for p in b'A'..=b'Z' {
            for k in b'A'..=b'Z' {
                let c = ((p as u32 + k as u32 + 1) % 26) as u8 + LETTER_BASE;
                let back = ((c as u32 + 25 - k as u32) % 26) as u8 + LETTER_BASE;
                assert_eq!(back, p, "combine not inverted for P={} K={}", p, k);
            }
        }
    }

    #[test]
    fn test_encode_rejects_corrupt_deck() {
        let mut corrupt = Deck::new();
        corrupt.cards_mut()[0] = Card::Joker(JokerId::B);
        assert_eq!(
            encode("HELLO", &mut corrupt),
            Err(SolitaireError::InvalidDeckState)
        );
        assert_eq!(
            decode("HELLO", &mut corrupt),
            Err(SolitaireError::InvalidDeckState)
        );
    }

    #[test]
    fn test_decode_pads_short_ciphertext() {
        // 3 ciphertext letters decode to 3 letters, re-blocked with padding.
        let plaintext = decode("AEK", &mut Deck::new()).unwrap();
        assert_eq!(plaintext.len(), 5);
        assert!(plaintext.ends_with("XX"));
    }
}
