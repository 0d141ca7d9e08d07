//! Deck state and the Solitaire permutation algorithms.
//!
//! A [`Deck`] is an ordered, mutable sequence of exactly 54 distinct cards,
//! always a permutation of the fixed universe (52 standard cards plus the
//! two jokers). It owns every card-moving operation the cipher is built
//! from: the perfect shuffle, the joker advance, the triple cut, the count
//! cut, and the composite keystream round that chains them.
//!
//! Positions are 0-based, 0..=53. Every operation preserves the permutation
//! invariant; a deck is created once per key, mutated in place while a
//! message is processed, and discarded afterwards. Sharing one deck across
//! unrelated messages lets one message decode the other.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, JokerId, JOKER_ORDER};
use crate::error::SolitaireError;

/// Number of cards in the deck.
pub const DECK_LEN: usize = 54;

/// Position of the bottom card.
const BOTTOM: usize = DECK_LEN - 1;

/// The 54-card deck driving keystream generation.
///
/// # Examples
///
/// ```
/// use solitaire::Deck;
///
/// let mut deck = Deck::new();
/// assert!(deck.is_ordered());
///
/// let keystream = deck.generate_keystream(10);
/// assert_eq!(keystream.len(), 10);
/// assert!(keystream.bytes().all(|b| b.is_ascii_uppercase()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates the unkeyed starting deck: the full universe in ascending
    /// order, order 1 at position 0 through Joker B at position 53.
    pub fn new() -> Self {
        let cards = (1..=DECK_LEN as u8)
            .map(|order| Card::from_order(order).expect("universe order is valid"))
            .collect();
        Deck { cards }
    }

    /// True iff every adjacent pair of positions (i, i+1) for i in 0..52
    /// ascends by exactly 1 in order.
    ///
    /// This is a strict ascending-by-1 check, not general sortedness: a
    /// sorted deck with gaps fails it. The final joker/joker pair sits
    /// outside the checked range (both jokers report the same order, so
    /// scanning it would make even a fresh deck read as unordered).
    pub fn is_ordered(&self) -> bool {
        (0..DECK_LEN - 2)
            .all(|i| self.cards[i + 1].order() as i32 - self.cards[i].order() as i32 == 1)
    }

    /// Current position of the given card.
    ///
    /// Jokers are matched by identity, since order alone cannot tell them
    /// apart; standard cards are matched by order, which is unique for
    /// them. The 54-card invariant guarantees the target is present, so a
    /// failed scan is deck corruption, not a recoverable condition.
    ///
    /// # Panics
    /// Panics if the card is absent, i.e. the deck was mutated outside the
    /// defined operations.
    pub fn locate(&self, target: Card) -> usize {
        let position = match target.identity() {
            Some(id) => self.cards.iter().position(|c| c.identity() == Some(id)),
            None => self.cards.iter().position(|c| c.order() == target.order()),
        };
        position.expect("deck invariant violated: card not present")
    }

    /// Splits the deck into two 27-card halves and interleaves them,
    /// starting with the first half.
    ///
    /// Deterministic and non-cryptographic; callers may apply it some
    /// number of times to derive a shared starting permutation. Not part
    /// of the keystream round.
    pub fn perfect_shuffle(&mut self) {
        let (top_half, bottom_half) = self.cards.split_at(DECK_LEN / 2);
        let mut shuffled = Vec::with_capacity(DECK_LEN);
        for (first, second) in top_half.iter().zip(bottom_half.iter()) {
            shuffled.push(*first);
            shuffled.push(*second);
        }
        self.cards = shuffled;
    }

    /// Removes the card at `position` and reinserts it `n` positions
    /// further down, treating the deck as circular.
    ///
    /// The wrap rule is `(position + n + 1) % 54`, not plain modulo: a card
    /// that passes the bottom reinserts just below the top card. The +1
    /// changes which slot receives the card when wrapping and must be
    /// exact.
    pub fn advance(&mut self, position: usize, n: usize) {
        let card = self.cards.remove(position);
        let destination = if position + n < DECK_LEN {
            position + n
        } else {
            (position + n + 1) % DECK_LEN
        };
        self.cards.insert(destination, card);
    }

    /// Exchanges the block above position `i1` with the block below
    /// position `i2`, leaving `[i1, i2]` in place.
    ///
    /// Requires `i1 <= i2 <= 53`. The result is `below ++ middle ++ above`.
    pub fn triple_cut(&mut self, i1: usize, i2: usize) {
        let mut cut = Vec::with_capacity(DECK_LEN);
        cut.extend_from_slice(&self.cards[i2 + 1..]);
        cut.extend_from_slice(&self.cards[i1..=i2]);
        cut.extend_from_slice(&self.cards[..i1]);
        self.cards = cut;
    }

    /// Cuts the deck by the order value of the bottom card, which itself
    /// stays fixed at the bottom.
    ///
    /// A joker at the bottom makes this a no-op. Otherwise the top `v`
    /// cards end up directly above the bottom card.
    pub fn count_cut(&mut self) {
        let value = self.cards[BOTTOM].order();
        if value == JOKER_ORDER {
            return;
        }
        self.cut_by(value as usize);
    }

    /// Count-cut mechanics shared with passphrase keying: cut the top
    /// `value` cards to just above the bottom card.
    fn cut_by(&mut self, value: usize) {
        self.triple_cut(value, BOTTOM);
        self.advance(BOTTOM - value, value);
    }

    /// One full keystream round: advance Joker A by 1, Joker B by 2,
    /// triple cut around the jokers, count cut. Exactly this sequence.
    pub fn solitaire_round(&mut self) {
        let a = self.locate(Card::Joker(JokerId::A));
        self.advance(a, 1);
        let b = self.locate(Card::Joker(JokerId::B));
        self.advance(b, 2);
        let a = self.locate(Card::Joker(JokerId::A));
        let b = self.locate(Card::Joker(JokerId::B));
        self.triple_cut(a.min(b), a.max(b));
        self.count_cut();
    }

    /// Reads the output letter for the current deck state, or `None` when
    /// the round must be skipped.
    ///
    /// Counts down from the top by the top card's order `v` (position 0
    /// holds the count and is excluded from it, so the card inspected is
    /// at position `v`). A joker there yields no output. Otherwise the
    /// letter is `order % 26` with 0 explicitly wrapped to 26; without
    /// the wrap, orders 26 and 52 would map outside A-Z.
    pub fn output_letter(&self) -> Option<char> {
        let count = self.cards[0].order() as usize;
        let order = self.cards[count].order();
        if order == JOKER_ORDER {
            return None;
        }
        let value = match order % 26 {
            0 => 26,
            v => v,
        };
        Some((b'A' + value - 1) as char)
    }

    /// Runs keystream rounds until one produces a non-joker output and
    /// returns that letter.
    ///
    /// Iterative, deliberately: message length is unbounded and a
    /// self-recursive retry would risk stack exhaustion.
    pub fn generate_letter(&mut self) -> char {
        loop {
            self.solitaire_round();
            if let Some(letter) = self.output_letter() {
                return letter;
            }
        }
    }

    /// Generates exactly `letters_needed` keystream letters, consuming
    /// deck state irreversibly.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// assert_eq!(a.generate_keystream(26), b.generate_keystream(26));
    /// ```
    pub fn generate_keystream(&mut self, letters_needed: usize) -> String {
        let mut keystream = String::with_capacity(letters_needed);
        for _ in 0..letters_needed {
            keystream.push(self.generate_letter());
        }
        keystream
    }

    /// Checks that the deck is a permutation of the 54-card universe.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidDeckState`] on a wrong length, a
    /// duplicated card, or a card outside the universe. Length plus
    /// no-duplicates implies no omissions.
    pub fn validate(&self) -> Result<(), SolitaireError> {
        if self.cards.len() != DECK_LEN {
            return Err(SolitaireError::InvalidDeckState);
        }
        let mut seen_standard = [false; 52];
        let mut seen_a = false;
        let mut seen_b = false;
        for card in &self.cards {
            match card {
                Card::Joker(JokerId::A) => {
                    if seen_a {
                        return Err(SolitaireError::InvalidDeckState);
                    }
                    seen_a = true;
                }
                Card::Joker(JokerId::B) => {
                    if seen_b {
                        return Err(SolitaireError::InvalidDeckState);
                    }
                    seen_b = true;
                }
                Card::Standard { rank, .. } => {
                    if !(1..=13).contains(rank) {
                        return Err(SolitaireError::InvalidDeckState);
                    }
                    let index = card.order() as usize - 1;
                    if seen_standard[index] {
                        return Err(SolitaireError::InvalidDeckState);
                    }
                    seen_standard[index] = true;
                }
            }
        }
        Ok(())
    }

    /// Keys the deck with a full random shuffle (Fisher-Yates behind the
    /// supplied RNG).
    ///
    /// The caller owns the RNG so keying stays reproducible under a seeded
    /// generator.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Keys the deck from a passphrase.
    ///
    /// For each A-Z letter (case-insensitive, everything else skipped):
    /// run one keystream round, then count-cut by the letter's value
    /// 1..=26. Both sides derive the same starting permutation from the
    /// same passphrase.
    ///
    /// # Errors
    /// Returns [`SolitaireError::EmptyPassphrase`] when no letter survives
    /// filtering; an unkeyed deck silently passing as keyed would be worse
    /// than an eager failure.
    pub fn key_with_passphrase(&mut self, passphrase: &str) -> Result<(), SolitaireError> {
        let mut keyed = false;
        for letter in passphrase.chars() {
            if !letter.is_ascii_alphabetic() {
                continue;
            }
            let value = (letter.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
            self.solitaire_round();
            self.cut_by(value);
            keyed = true;
        }
        if keyed {
            Ok(())
        } else {
            Err(SolitaireError::EmptyPassphrase)
        }
    }

    /// Number of cards in the deck. Always 54 for a valid deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true for a valid deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at the given position.
    pub fn card_at(&self, position: usize) -> Card {
        self.cards[position]
    }

    /// Read-only view of the full card sequence.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Test-only escape hatch for building corrupt states; the public
    /// operations cannot produce one.
    #[cfg(test)]
    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}
