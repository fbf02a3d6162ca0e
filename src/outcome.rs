//! Win evaluation over the draw history and payout calculation.

use crate::card::Card;
use crate::choice::Choice;
use crate::options::{Multipliers, RoundingMode};

/// Default number of most recent draws that can win a round.
pub const HIT_WINDOW: usize = 3;

/// Whether a round was won and by which card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Whether any draw in the hit window matched the choice.
    pub won: bool,
    /// The most recent matching draw in the hit window.
    pub matching_card: Option<Card>,
}

/// Returns whether a single card satisfies the choice.
#[must_use]
pub fn evaluate(card: &Card, choice: &Choice) -> bool {
    choice.matches(card)
}

/// Resolves a round over the last [`HIT_WINDOW`] draws.
///
/// `history` is ordered oldest to newest.
///
/// # Example
///
/// ```
/// use drawbet::{Card, Choice, Rank, Suit, resolve_round_outcome};
///
/// let history = [
///     Card::new(Rank::Two, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Seven, Suit::Diamonds),
/// ];
/// let outcome = resolve_round_outcome(&history, &Choice::Number(Rank::Seven));
/// assert!(outcome.won);
/// assert_eq!(outcome.matching_card, Some(Card::new(Rank::Seven, Suit::Diamonds)));
/// ```
#[must_use]
pub fn resolve_round_outcome(history: &[Card], choice: &Choice) -> RoundOutcome {
    resolve_in_window(history, choice, HIT_WINDOW)
}

/// Resolves a round over the last `window` draws.
///
/// Draws are scanned newest first, so when several match the most recent one
/// is reported.
#[must_use]
pub fn resolve_in_window(history: &[Card], choice: &Choice, window: usize) -> RoundOutcome {
    let matching_card = window_of(history, window)
        .iter()
        .rev()
        .find(|card| evaluate(card, choice))
        .copied();

    RoundOutcome {
        won: matching_card.is_some(),
        matching_card,
    }
}

/// Returns the last `window` draws of the history, oldest first.
#[must_use]
pub fn window_of(history: &[Card], window: usize) -> &[Card] {
    &history[history.len().saturating_sub(window)..]
}

/// Returns the multiplier that applies to a choice.
#[must_use]
pub const fn multiplier_for(choice: &Choice, table: &Multipliers) -> f64 {
    table.for_choice(choice)
}

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Up => amount.ceil(),
        RoundingMode::Down => amount.floor(),
        RoundingMode::Nearest => amount.round(),
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount),
        RoundingMode::Down => libm::floor(amount),
        RoundingMode::Nearest => libm::round(amount),
    }
}

/// Computes the signed amount the player receives for a round.
///
/// A win returns `bet * multiplier` rounded with `mode`; a loss returns
/// exactly `-bet`.
///
/// # Example
///
/// ```
/// use drawbet::{RoundingMode, payout};
///
/// assert_eq!(payout(10, 4.34, true, RoundingMode::Nearest), 43);
/// assert_eq!(payout(10, 4.34, false, RoundingMode::Nearest), -10);
/// ```
#[must_use]
pub fn payout(bet: u32, multiplier: f64, won: bool, mode: RoundingMode) -> i64 {
    if won {
        round_amount(f64::from(bet) * multiplier, mode) as i64
    } else {
        -i64::from(bet)
    }
}
