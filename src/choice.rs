//! The player's bet: an amount and a choice of what the drawn card will be.

use core::fmt;

use crate::card::{Card, Colour, Rank, Suit};
use crate::error::BetError;

/// Bet category, without the chosen value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An exact rank and suit.
    Individual,
    /// A suit.
    Suit,
    /// A colour.
    Colour,
    /// A rank in any suit.
    Number,
}

/// What the player bets the drawn card will be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// The exact card.
    Individual(Card),
    /// Any card of the suit.
    Suit(Suit),
    /// Any card of the colour.
    Colour(Colour),
    /// Any card of the rank, regardless of suit.
    Number(Rank),
}

impl Choice {
    /// Returns the category of the choice.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Individual(_) => Category::Individual,
            Self::Suit(_) => Category::Suit,
            Self::Colour(_) => Category::Colour,
            Self::Number(_) => Category::Number,
        }
    }

    /// Returns whether the card satisfies this choice.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match *self {
            Self::Individual(chosen) => *card == chosen,
            Self::Suit(suit) => card.suit == suit,
            Self::Colour(colour) => card.colour() == colour,
            Self::Number(rank) => card.rank == rank,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(card) => write!(f, "{} of {} (individual)", card.rank, card.suit),
            Self::Suit(suit) => write!(f, "suit {suit}"),
            Self::Colour(colour) => write!(f, "colour {colour}"),
            Self::Number(rank) => write!(f, "rank {rank} (number)"),
        }
    }
}

/// A validated bet for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bet {
    amount: u32,
    choice: Choice,
}

impl Bet {
    /// Creates a bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] if the amount is zero.
    pub const fn new(amount: u32, choice: Choice) -> Result<Self, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        Ok(Self { amount, choice })
    }

    /// Returns the bet amount.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the chosen outcome.
    #[must_use]
    pub const fn choice(&self) -> Choice {
        self.choice
    }
}

/// Parses a bet amount typed by the player.
///
/// Surrounding whitespace is ignored. The amount must be a positive integer.
///
/// # Errors
///
/// Returns [`BetError::ZeroBet`] for zero and [`BetError::InvalidAmount`] for
/// anything that is not a non-negative integer.
///
/// # Example
///
/// ```
/// use drawbet::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 25 "), Ok(25));
/// assert_eq!(parse_bet("0"), Err(BetError::ZeroBet));
/// assert_eq!(parse_bet("-5"), Err(BetError::InvalidAmount));
/// ```
pub fn parse_bet(input: &str) -> Result<u32, BetError> {
    match input.trim().parse::<u32>() {
        Ok(0) => Err(BetError::ZeroBet),
        Ok(amount) => Ok(amount),
        Err(_) => Err(BetError::InvalidAmount),
    }
}
