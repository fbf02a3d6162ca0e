//! A card-draw betting game engine with optional `no_std` support.
//!
//! The player bets on a property of the next card (the exact card, its suit,
//! its colour or its rank), draws from an editable deck, and wins if any of
//! the last three draws matches. The crate provides a [`Game`] type that
//! manages the deck, the bet, the draw history and the round flow, plus the
//! pure functions behind it: [`evaluate`], [`resolve_round_outcome`],
//! [`payout`] and [`probability::breakdown`].
//!
//! # Example
//!
//! ```
//! use drawbet::{Choice, Game, GameOptions, Suit};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
//! let _card = game.draw().unwrap();
//! let result = game.end_round().unwrap();
//! assert_eq!(result.window.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod choice;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod outcome;
pub mod probability;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, Colour, DECK_SIZE, Parity, Rank, Suit};
pub use choice::{Bet, Category, Choice, parse_bet};
pub use deck::{Deck, DeckEdit};
pub use error::{BetError, DrawError, MultiplierError, MultiplierField, RoundError};
pub use game::{Game, ResultCue, RoundState};
pub use options::{GameOptions, Multipliers, RoundingMode};
pub use outcome::{
    HIT_WINDOW, RoundOutcome, evaluate, multiplier_for, payout, resolve_in_window,
    resolve_round_outcome,
};
pub use probability::{Breakdown, Fraction, Odds, Probability};
pub use result::RoundResult;
