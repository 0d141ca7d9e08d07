//! Card value type for the 54-card Solitaire deck.
//!
//! A [`Card`] is either one of the 52 standard cards or one of the two
//! jokers. Standard cards carry a derived *order*, their rank within the
//! full linear ordering: suits are weighted spades < clubs < diamonds <
//! hearts with aces low, so the Ace of Spades has order 1 and the King of
//! Hearts order 52. Both jokers report order [`JOKER_ORDER`] (53), so
//! order alone cannot tell them apart, only [`Card::identity`] can. The cipher
//! depends on this aliasing; lookups must branch on the variant, never on
//! the order value.

use crate::error::SolitaireError;

/// Order value shared by both jokers.
pub const JOKER_ORDER: u8 = 53;

/// One of the four standard suits, in deck-weight order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    /// Order contribution of the suit: 0, 13, 26, or 39.
    pub fn offset(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 13,
            Suit::Diamonds => 26,
            Suit::Hearts => 39,
        }
    }

    /// Parses a case-insensitive suit name.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidCardSpec`] for anything other than
    /// the four suit names.
    pub fn from_name(name: &str) -> Result<Self, SolitaireError> {
        if name.eq_ignore_ascii_case("spades") {
            Ok(Suit::Spades)
        } else if name.eq_ignore_ascii_case("clubs") {
            Ok(Suit::Clubs)
        } else if name.eq_ignore_ascii_case("diamonds") {
            Ok(Suit::Diamonds)
        } else if name.eq_ignore_ascii_case("hearts") {
            Ok(Suit::Hearts)
        } else {
            Err(SolitaireError::InvalidCardSpec)
        }
    }

    fn from_index(index: u8) -> Self {
        match index {
            0 => Suit::Spades,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Hearts,
        }
    }
}

/// Distinguishes the two jokers. This is the only field that can, since
/// both report the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokerId {
    A,
    B,
}

/// An immutable value identifying one of the 54 deck slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// A standard card: rank 1 (Ace) through 13 (King) in one of the four
    /// suits.
    Standard { rank: u8, suit: Suit },
    /// One of the two jokers.
    Joker(JokerId),
}

impl Card {
    /// Creates a standard card from a rank and suit.
    ///
    /// Jokers are constructed directly as [`Card::Joker`], never through
    /// this path.
    ///
    /// # Parameters
    /// - `rank`: 1 (Ace) through 13 (King).
    /// - `suit`: one of the four suits.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidCardSpec`] if `rank` is outside
    /// 1..=13.
    pub fn from_rank_suit(rank: u8, suit: Suit) -> Result<Self, SolitaireError> {
        if !(1..=13).contains(&rank) {
            return Err(SolitaireError::InvalidCardSpec);
        }
        Ok(Card::Standard { rank, suit })
    }

    /// Creates a card from its position in the 1..=54 linear ordering.
    ///
    /// Orders 1..=52 map deterministically to (rank, suit). Order 53 is
    /// Joker A and order 54 is Joker B; the resulting joker reports order
    /// 53 either way, so later order-based comparisons treat the two as
    /// equal-ranked sentinels.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidCardSpec`] if `order` is outside
    /// 1..=54.
    pub fn from_order(order: u8) -> Result<Self, SolitaireError> {
        match order {
            1..=52 => Ok(Card::Standard {
                rank: (order - 1) % 13 + 1,
                suit: Suit::from_index((order - 1) / 13),
            }),
            53 => Ok(Card::Joker(JokerId::A)),
            54 => Ok(Card::Joker(JokerId::B)),
            _ => Err(SolitaireError::InvalidCardSpec),
        }
    }

    /// Creates a card from name tokens, e.g. `("Jack", "Clubs")`,
    /// `("7", "hearts")`, or `("A", "Joker")` for a joker.
    ///
    /// Matching is case-insensitive. Numeric rank tokens 1..=13 are
    /// accepted alongside "Ace", "Jack", "Queen", and "King".
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidCardSpec`] for an unrecognized rank
    /// token or suit name; detection is eager, nothing is defaulted.
    pub fn from_names(rank: &str, suit: &str) -> Result<Self, SolitaireError> {
        if suit.eq_ignore_ascii_case("joker") {
            return if rank.eq_ignore_ascii_case("a") {
                Ok(Card::Joker(JokerId::A))
            } else if rank.eq_ignore_ascii_case("b") {
                Ok(Card::Joker(JokerId::B))
            } else {
                Err(SolitaireError::InvalidCardSpec)
            };
        }
        Self::from_rank_suit(Self::parse_rank(rank)?, Suit::from_name(suit)?)
    }

    fn parse_rank(token: &str) -> Result<u8, SolitaireError> {
        if token.eq_ignore_ascii_case("ace") {
            Ok(1)
        } else if token.eq_ignore_ascii_case("jack") {
            Ok(11)
        } else if token.eq_ignore_ascii_case("queen") {
            Ok(12)
        } else if token.eq_ignore_ascii_case("king") {
            Ok(13)
        } else {
            match token.parse::<u8>() {
                Ok(rank @ 1..=13) => Ok(rank),
                _ => Err(SolitaireError::InvalidCardSpec),
            }
        }
    }

    /// The card's rank within the full 1..=53 linear ordering.
    ///
    /// Standard cards occupy 1..=52; both jokers report [`JOKER_ORDER`].
    pub fn order(self) -> u8 {
        match self {
            Card::Standard { rank, suit } => rank + suit.offset(),
            Card::Joker(_) => JOKER_ORDER,
        }
    }

    /// Face rank 1..=13, or `None` for a joker.
    pub fn rank(self) -> Option<u8> {
        match self {
            Card::Standard { rank, .. } => Some(rank),
            Card::Joker(_) => None,
        }
    }

    /// Suit, or `None` for a joker.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(suit),
            Card::Joker(_) => None,
        }
    }

    /// Joker identity, or `None` for a standard card.
    pub fn identity(self) -> Option<JokerId> {
        match self {
            Card::Standard { .. } => None,
            Card::Joker(id) => Some(id),
        }
    }

    /// True for either joker.
    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }
}
