//! Game configuration options and the payout multiplier table.

use crate::card::Parity;
use crate::choice::Choice;
use crate::error::{MultiplierError, MultiplierField};

/// Rounding mode for winning payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves away from zero.
    Nearest,
}

/// Payout multipliers per bet category.
///
/// Every entry is a finite positive number. Number bets use the odd or even
/// entry according to the parity of the chosen rank's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    individual: f64,
    suit: f64,
    colour: f64,
    number_odd: f64,
    number_even: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            individual: 17.4,
            suit: 2.17,
            colour: 1.46,
            number_odd: 4.61,
            number_even: 4.34,
        }
    }
}

fn check(field: MultiplierField, value: f64) -> Result<f64, MultiplierError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MultiplierError::NotPositive { field })
    }
}

fn parse_field(field: MultiplierField, input: &str) -> Result<f64, MultiplierError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| MultiplierError::Unparseable { field })?;
    check(field, value)
}

impl Multipliers {
    /// Creates a multiplier table.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry that is not a finite positive
    /// number. No table is produced in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::{MultiplierError, MultiplierField, Multipliers};
    ///
    /// let table = Multipliers::new(20.0, 2.0, 1.5, 5.0, 4.0).unwrap();
    /// assert_eq!(table.suit(), 2.0);
    ///
    /// assert_eq!(
    ///     Multipliers::new(20.0, 2.0, 0.0, 5.0, 4.0),
    ///     Err(MultiplierError::NotPositive { field: MultiplierField::Colour })
    /// );
    /// ```
    pub fn new(
        individual: f64,
        suit: f64,
        colour: f64,
        number_odd: f64,
        number_even: f64,
    ) -> Result<Self, MultiplierError> {
        Ok(Self {
            individual: check(MultiplierField::Individual, individual)?,
            suit: check(MultiplierField::Suit, suit)?,
            colour: check(MultiplierField::Colour, colour)?,
            number_odd: check(MultiplierField::NumberOdd, number_odd)?,
            number_even: check(MultiplierField::NumberEven, number_even)?,
        })
    }

    /// Parses a multiplier table from player input.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry that does not parse or is not
    /// positive.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::{MultiplierError, MultiplierField, Multipliers};
    ///
    /// let table = Multipliers::parse("17.4", " 2.17", "1.46", "4.61", "4.34").unwrap();
    /// assert_eq!(table, Multipliers::default());
    ///
    /// assert_eq!(
    ///     Multipliers::parse("17.4", "two", "1.46", "4.61", "4.34"),
    ///     Err(MultiplierError::Unparseable { field: MultiplierField::Suit })
    /// );
    /// ```
    pub fn parse(
        individual: &str,
        suit: &str,
        colour: &str,
        number_odd: &str,
        number_even: &str,
    ) -> Result<Self, MultiplierError> {
        Ok(Self {
            individual: parse_field(MultiplierField::Individual, individual)?,
            suit: parse_field(MultiplierField::Suit, suit)?,
            colour: parse_field(MultiplierField::Colour, colour)?,
            number_odd: parse_field(MultiplierField::NumberOdd, number_odd)?,
            number_even: parse_field(MultiplierField::NumberEven, number_even)?,
        })
    }

    /// Returns the individual card multiplier.
    #[must_use]
    pub const fn individual(&self) -> f64 {
        self.individual
    }

    /// Returns the suit multiplier.
    #[must_use]
    pub const fn suit(&self) -> f64 {
        self.suit
    }

    /// Returns the colour multiplier.
    #[must_use]
    pub const fn colour(&self) -> f64 {
        self.colour
    }

    /// Returns the number multiplier for odd rank values.
    #[must_use]
    pub const fn number_odd(&self) -> f64 {
        self.number_odd
    }

    /// Returns the number multiplier for even rank values.
    #[must_use]
    pub const fn number_even(&self) -> f64 {
        self.number_even
    }

    /// Returns the multiplier that applies to a choice.
    ///
    /// ```
    /// use drawbet::{Choice, Multipliers, Rank};
    ///
    /// let table = Multipliers::default();
    /// // K is 12, Q is 13.
    /// assert_eq!(table.for_choice(&Choice::Number(Rank::King)), 4.34);
    /// assert_eq!(table.for_choice(&Choice::Number(Rank::Queen)), 4.61);
    /// ```
    #[must_use]
    pub const fn for_choice(&self, choice: &Choice) -> f64 {
        match choice {
            Choice::Individual(_) => self.individual,
            Choice::Suit(_) => self.suit,
            Choice::Colour(_) => self.colour,
            Choice::Number(rank) => match rank.parity() {
                Parity::Odd => self.number_odd,
                Parity::Even => self.number_even,
            },
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawbet::{GameOptions, Multipliers, RoundingMode};
///
/// let options = GameOptions::default()
///     .with_rounding(RoundingMode::Down)
///     .with_hit_window(1);
/// assert_eq!(options.multipliers, Multipliers::default());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Initial payout multipliers.
    pub multipliers: Multipliers,
    /// Rounding mode for winning payouts.
    pub rounding: RoundingMode,
    /// Number of most recent draws that can win the round.
    pub hit_window: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            multipliers: Multipliers::default(),
            rounding: RoundingMode::Nearest,
            hit_window: 3,
        }
    }
}

impl GameOptions {
    /// Sets the initial payout multipliers.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::{GameOptions, Multipliers};
    ///
    /// let table = Multipliers::new(10.0, 2.0, 1.5, 3.0, 3.5).unwrap();
    /// let options = GameOptions::default().with_multipliers(table);
    /// assert_eq!(options.multipliers.number_even(), 3.5);
    /// ```
    #[must_use]
    pub const fn with_multipliers(mut self, multipliers: Multipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Sets the rounding mode for winning payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(options.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets how many of the most recent draws are checked for a win.
    ///
    /// A window of 0 means no draw can win.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_window(5);
    /// assert_eq!(options.hit_window, 5);
    /// ```
    #[must_use]
    pub const fn with_hit_window(mut self, window: usize) -> Self {
        self.hit_window = window;
        self
    }
}
