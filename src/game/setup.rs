use log::{info, warn};

use crate::choice::{Bet, Choice, parse_bet};
use crate::error::{BetError, MultiplierError};
use crate::options::Multipliers;

use super::{Game, RoundState};

impl Game {
    /// Places the bet for the round and starts play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup state or the amount is
    /// zero. The game is left unchanged.
    pub fn configure_round(&self, amount: u32, choice: Choice) -> Result<Bet, BetError> {
        let mut state = self.state.lock();
        if *state != RoundState::Setup {
            return Err(BetError::InvalidState);
        }

        let bet = Bet::new(amount, choice).inspect_err(|err| warn!("Rejected bet: {err}"))?;

        *self.bet.lock() = Some(bet);
        *state = RoundState::Play;
        drop(state);

        info!("Bet {amount} on {choice}");
        Ok(bet)
    }

    /// Places a bet typed by the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a positive integer or the game is
    /// not in setup state.
    pub fn configure_round_from_input(&self, input: &str, choice: Choice) -> Result<Bet, BetError> {
        let amount = parse_bet(input).inspect_err(|err| warn!("Rejected bet {input:?}: {err}"))?;
        self.configure_round(amount, choice)
    }

    /// Replaces the multiplier table.
    ///
    /// Accepted in any state; later payouts and breakdowns use the new table.
    pub fn set_multipliers(&self, multipliers: Multipliers) {
        *self.multipliers.lock() = multipliers;
        info!("Multipliers updated: {multipliers:?}");
    }

    /// Replaces the multiplier table from player input.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry does not parse or is not positive. The
    /// current table is kept in that case.
    pub fn set_multipliers_from_input(
        &self,
        individual: &str,
        suit: &str,
        colour: &str,
        number_odd: &str,
        number_even: &str,
    ) -> Result<(), MultiplierError> {
        let multipliers = Multipliers::parse(individual, suit, colour, number_odd, number_even)
            .inspect_err(|err| warn!("Rejected multipliers: {err}"))?;
        self.set_multipliers(multipliers);
        Ok(())
    }
}
