//! Card types: suits, colours, ranks and the cards built from them.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the colour of the suit.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Hearts | Self::Diamonds => Colour::Red,
            Self::Clubs | Self::Spades => Colour::Black,
        }
    }

    /// Returns the display glyph of the suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the upper-case name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "HEARTS",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Spades => "SPADES",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl Colour {
    /// Returns the two suits of this colour.
    #[must_use]
    pub const fn suits(self) -> [Suit; 2] {
        match self {
            Self::Red => [Suit::Hearts, Suit::Diamonds],
            Self::Black => [Suit::Clubs, Suit::Spades],
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "RED",
            Self::Black => "BLACK",
        })
    }
}

/// Parity of a rank's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Odd numeric value.
    Odd,
    /// Even numeric value.
    Even,
}

/// Card rank.
///
/// Ranks carry the game's own numeric mapping: A=1, 2..=10 literal, J=11,
/// K=12, Q=13. The queen sits above the king, and parity bets and the odd/even
/// deck edits depend on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in listing order (A, 2..10, J, Q, K).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Face ranks.
    pub const FACES: [Self; 3] = [Self::Jack, Self::Queen, Self::King];

    /// Returns the numeric value of the rank (K=12, Q=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::King => 12,
            Self::Queen => 13,
        }
    }

    /// Returns the parity of the numeric value.
    #[must_use]
    pub const fn parity(self) -> Parity {
        if self.value() % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// Returns whether this is a face rank (J, Q, K).
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns the rank symbol ("A", "2", ..., "10", "J", "Q", "K").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a rank symbol, ignoring case.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the colour of the card.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.suit.colour()
    }

    /// Returns whether the card is a face card.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        self.rank.is_face()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.glyph())
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
