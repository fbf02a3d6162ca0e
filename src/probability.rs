//! Probability of winning a single draw from the current deck.

use core::fmt;

use crate::choice::Bet;
use crate::deck::Deck;
use crate::options::Multipliers;

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, n)` is `n`.
#[must_use]
pub const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A non-negative fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// Numerator.
    pub numerator: u32,
    /// Denominator.
    pub denominator: u32,
}

impl Fraction {
    /// Creates a fraction without reducing it.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the fraction in lowest terms. Zero reduces to `0/1`.
    #[must_use]
    pub const fn reduced(self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        if divisor == 0 {
            return self;
        }
        Self::new(self.numerator / divisor, self.denominator / divisor)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Odds of a favorable draw, read as "1 in X".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Odds {
    favorable: u32,
    total: u32,
}

impl Odds {
    /// Returns X in "1 in X", or `None` when nothing is favorable.
    #[must_use]
    pub fn one_in(&self) -> Option<f64> {
        (self.favorable > 0).then(|| f64::from(self.total) / f64::from(self.favorable))
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.one_in() {
            None => f.write_str("never"),
            Some(_) if self.total % self.favorable == 0 => {
                write!(f, "1 in {}", self.total / self.favorable)
            }
            Some(x) => write!(f, "1 in {x:.2}"),
        }
    }
}

/// The full probability breakdown for a non-empty deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    /// Cards in the deck that match the choice.
    pub favorable: u32,
    /// Cards in the deck.
    pub total: u32,
    /// `favorable/total` in lowest terms.
    pub reduced: Fraction,
    /// The divisor used for the reduction.
    pub divisor: u32,
    /// `favorable / total`.
    pub probability: f64,
    /// `100 * probability`.
    pub percentage: f64,
    /// "1 in X" odds.
    pub odds: Odds,
    /// `probability * bet * multiplier`.
    ///
    /// This is the expected payout only, not the expected net value.
    pub quick_expected_payout: f64,
    /// `probability * bet * multiplier - (1 - probability) * bet`.
    pub expected_net: f64,
}

impl Breakdown {
    /// Returns the unreduced `favorable/total` fraction.
    #[must_use]
    pub const fn fraction(&self) -> Fraction {
        Fraction::new(self.favorable, self.total)
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Favorable outcomes: {}", self.favorable)?;
        writeln!(f, "Total outcomes: {}", self.total)?;
        writeln!(f, "Probability = {}", self.fraction())?;
        if self.favorable == 0 {
            writeln!(f, "No matching card is in the deck: probability is 0.")?;
        } else {
            writeln!(
                f,
                "Reduced fraction: {} (divided by {})",
                self.reduced, self.divisor
            )?;
            writeln!(f, "Percentage: {:.3}%", self.percentage)?;
            writeln!(f, "Odds: {}", self.odds)?;
        }
        write!(
            f,
            "Quick payout expectation: {:.2} (not net)",
            self.quick_expected_payout
        )
    }
}

/// Probability of the current choice winning the next draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probability {
    /// The deck is empty, so the probability is undefined.
    EmptyDeck,
    /// The deck has cards.
    Defined(Breakdown),
}

impl Probability {
    /// Returns the breakdown if the deck was non-empty.
    #[must_use]
    pub const fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            Self::EmptyDeck => None,
            Self::Defined(breakdown) => Some(breakdown),
        }
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDeck => f.write_str("Deck is empty: no probability available."),
            Self::Defined(breakdown) => fmt::Display::fmt(breakdown, f),
        }
    }
}

/// Computes the probability breakdown of a bet against the deck.
///
/// # Example
///
/// ```
/// use drawbet::{Bet, Choice, Deck, Multipliers, Suit, probability};
///
/// let deck = Deck::new();
/// let bet = Bet::new(10, Choice::Suit(Suit::Hearts)).unwrap();
/// let result = probability::breakdown(&deck, &bet, &Multipliers::default());
/// let breakdown = result.breakdown().unwrap();
///
/// assert_eq!(breakdown.reduced.to_string(), "1/4");
/// assert_eq!(breakdown.percentage, 25.0);
/// assert_eq!(breakdown.odds.to_string(), "1 in 4");
/// ```
#[must_use]
pub fn breakdown(deck: &Deck, bet: &Bet, multipliers: &Multipliers) -> Probability {
    let total = deck.len() as u32;
    if total == 0 {
        return Probability::EmptyDeck;
    }

    let choice = bet.choice();
    let favorable = deck.count_matching(|card| choice.matches(card)) as u32;

    let fraction = Fraction::new(favorable, total);
    let reduced = fraction.reduced();
    let divisor = gcd(favorable, total);

    let probability = f64::from(favorable) / f64::from(total);
    let stake = f64::from(bet.amount());
    let win_payout = stake * multipliers.for_choice(&choice);

    Probability::Defined(Breakdown {
        favorable,
        total,
        reduced,
        divisor,
        probability,
        percentage: 100.0 * probability,
        odds: Odds { favorable, total },
        // A losing draw contributes nothing to the payout-only figure.
        quick_expected_payout: probability * win_payout,
        expected_net: probability * win_payout - (1.0 - probability) * stake,
    })
}
