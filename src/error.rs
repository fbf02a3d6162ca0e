//! Error types for game operations.

use core::fmt;

use thiserror::Error;

/// Errors that can occur when configuring a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is not a positive integer.
    #[error("bet amount is not a positive integer")]
    InvalidAmount,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Identifies one entry of the multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiplierField {
    /// Individual card multiplier.
    Individual,
    /// Suit multiplier.
    Suit,
    /// Colour multiplier.
    Colour,
    /// Number multiplier for odd rank values.
    NumberOdd,
    /// Number multiplier for even rank values.
    NumberEven,
}

impl fmt::Display for MultiplierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Individual => "individual",
            Self::Suit => "suit",
            Self::Colour => "colour",
            Self::NumberOdd => "number (odd)",
            Self::NumberEven => "number (even)",
        })
    }
}

/// Errors that can occur when updating multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MultiplierError {
    /// The input is not a number.
    #[error("{field} multiplier is not a number")]
    Unparseable {
        /// The offending entry.
        field: MultiplierField,
    },
    /// The value is not a finite positive number.
    #[error("{field} multiplier must be a positive number")]
    NotPositive {
        /// The offending entry.
        field: MultiplierField,
    },
}

/// Errors that can occur when moving between round phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this transition.
    #[error("invalid game state for this transition")]
    InvalidState,
}
