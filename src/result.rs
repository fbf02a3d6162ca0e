//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::choice::Bet;
use crate::outcome::RoundOutcome;

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// The bet the round was played for.
    pub bet: Bet,
    /// Whether the round was won and by which card.
    pub outcome: RoundOutcome,
    /// The draws that could win, oldest first.
    pub window: Vec<Card>,
    /// Every draw in the window that matched the choice, oldest first.
    pub hits: Vec<Card>,
    /// The card to show: the most recent hit, else the last card drawn.
    pub displayed_card: Option<Card>,
    /// The multiplier applied to the bet.
    pub multiplier: f64,
    /// `bet * multiplier`, before rounding.
    pub potential_payout: f64,
    /// Net amount: the rounded payout on a win, minus the bet on a loss.
    pub net: i64,
}

impl RoundResult {
    /// Returns whether the round was won.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.outcome.won
    }
}
