//! Card value model.
//!
//! A `Card` is nothing but its identity. Rank, suit, score and capture
//! values are looked up from fixed tables indexed by `identity mod 52`,
//! so identities past the first deck alias onto the same face.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TablicError};

/// Number of cards in one French deck.
pub const DECK_SIZE: u32 = 52;

const RANKS_PER_SUIT: u32 = 13;
const SUITS: u32 = 4;

#[rustfmt::skip]
const CARD_SCORE: [u32; DECK_SIZE as usize] = [
//  A  2  3  4  5  6  7  8  9 10  J  Q  K
    1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, // Spades
    1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, // Hearts
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, // Clubs
    1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 1, // Diamonds
];

/// Card rank, ordered Ace through King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    const ALL: [Rank; RANKS_PER_SUIT as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Values this rank may stand for when matching a capture sum.
    ///
    /// Only the Ace has two.
    #[must_use]
    pub const fn capture_values(self) -> &'static [u32] {
        match self {
            Rank::Ace => &[1, 11],
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten => &[10],
            Rank::Jack => &[12],
            Rank::Queen => &[13],
            Rank::King => &[14],
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    const ALL: [Suit; SUITS as usize] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card, identified by its position in the deck cycle.
///
/// Identity is `rank_index + 13 * suit_index`. Two cards are equal iff their
/// identities are, and a card compares equal to a bare integer holding its
/// identity.
///
/// ```
/// use tablic::cards::{Card, Rank, Suit};
///
/// let ten = Card::new(48).unwrap();
/// assert_eq!(ten.rank(), Rank::Ten);
/// assert_eq!(ten.suit(), Suit::Diamond);
/// assert_eq!(ten.score(), 2);
/// assert_eq!(ten, 48);
/// assert_eq!(ten.to_string(), "[10♦]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Card(u32);

impl Card {
    /// Create a card from its identity.
    ///
    /// Fails with `InvalidCard` for negative identities. Identities of 52 and
    /// above are accepted and share the face of `identity % 52`.
    pub fn new(id: i32) -> Result<Self> {
        u32::try_from(id)
            .map(Self)
            .map_err(|_| TablicError::InvalidCard(id))
    }

    /// Every card of a single deck, in identity order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).map(Card)
    }

    /// Raw identity.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    const fn face(self) -> usize {
        (self.0 % DECK_SIZE) as usize
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT) as usize]
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[((self.0 / RANKS_PER_SUIT) % SUITS) as usize]
    }

    /// Points this card is worth to whoever captures it.
    #[must_use]
    pub fn score(self) -> u32 {
        CARD_SCORE[self.face()]
    }

    /// Values this card may count as in a capture sum.
    #[must_use]
    pub fn capture_values(self) -> &'static [u32] {
        self.rank().capture_values()
    }
}

impl TryFrom<i32> for Card {
    type Error = TablicError;

    fn try_from(id: i32) -> Result<Self> {
        Card::new(id)
    }
}

impl From<Card> for i32 {
    fn from(card: Card) -> i32 {
        // Identities come from non-negative i32s.
        card.0 as i32
    }
}

impl PartialEq<u32> for Card {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<i32> for Card {
    fn eq(&self, other: &i32) -> bool {
        u32::try_from(*other).map_or(false, |id| id == self.0)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}{}]", self.rank(), self.suit())
    }
}

/// Displays a run of cards back to back, e.g. `[2♠][3♠]`.
#[derive(Clone, Copy, Debug)]
pub struct CardRun<'a>(pub &'a [Card]);

impl std::fmt::Display for CardRun<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in self.0 {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i32) -> Card {
        Card::new(id).unwrap()
    }

    #[test]
    fn test_negative_identity_rejected() {
        assert_eq!(Card::new(-1), Err(TablicError::InvalidCard(-1)));
        assert!(Card::try_from(i32::MIN).is_err());
    }

    #[test]
    fn test_identity_roundtrip() {
        for i in 0..52 {
            assert_eq!(card(i).id(), i as u32);
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(card(0), card(0));
        assert_eq!(card(0), 0);
        assert_eq!(card(0), 0u32);
        assert_ne!(card(0), card(1));
        assert_ne!(card(0), 1);
        assert_ne!(card(0), -1);
    }

    #[test]
    fn test_display_all_faces() {
        let suits = ["♠", "♥", "♣", "♦"];
        let ranks = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

        let mut id = 0;
        for suit in suits {
            for rank in ranks {
                assert_eq!(card(id).to_string(), format!("[{rank}{suit}]"));
                id += 1;
            }
        }
    }

    #[test]
    fn test_score_standard() {
        for c in Card::all() {
            if c == 27 || c == 48 {
                continue;
            }
            let expected = if (1..9).contains(&(c.id() % 13)) { 0 } else { 1 };
            assert_eq!(c.score(), expected, "{c}");
        }
    }

    #[test]
    fn test_score_special_cases() {
        assert_eq!(card(27).to_string(), "[2♣]");
        assert_eq!(card(27).score(), 1);
        assert_eq!(card(48).to_string(), "[10♦]");
        assert_eq!(card(48).score(), 2);
    }

    #[test]
    fn test_full_deck_score() {
        assert_eq!(Card::all().map(Card::score).sum::<u32>(), 22);
    }

    #[test]
    fn test_capture_values() {
        for c in Card::all() {
            let expected = match c.id() % 13 {
                0 => vec![1, 11],
                r @ 1..=9 => vec![r + 1],
                10 => vec![12],
                11 => vec![13],
                _ => vec![14],
            };
            assert_eq!(c.capture_values(), expected.as_slice(), "{c}");
        }
    }

    #[test]
    fn test_multi_deck_identities_alias() {
        let second_deck_ace = card(52);
        assert_eq!(second_deck_ace.rank(), Rank::Ace);
        assert_eq!(second_deck_ace.suit(), Suit::Spade);
        assert_eq!(second_deck_ace.capture_values(), &[1, 11]);
        assert_eq!(card(100).score(), card(48).score());
        assert_ne!(second_deck_ace, card(0));
    }

    #[test]
    fn test_card_run_display() {
        let cards = [card(1), card(2), card(48)];
        assert_eq!(CardRun(&cards).to_string(), "[2♠][3♠][10♦]");
        assert_eq!(CardRun(&[]).to_string(), "");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&card(13)).unwrap();
        assert_eq!(json, "13");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card(13));

        assert!(serde_json::from_str::<Card>("-4").is_err());
    }
}
