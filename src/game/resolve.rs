use alloc::vec::Vec;

use log::info;

use crate::error::RoundError;
use crate::outcome::{self, payout};
use crate::result::RoundResult;

use super::{Game, ResultCue, RoundState};

impl Game {
    /// Ends play and resolves the round over the hit window.
    ///
    /// The round is won if any of the last `hit_window` draws matches the
    /// bet. A [`ResultCue`] is queued for the front-end.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play state.
    pub fn end_round(&self) -> Result<RoundResult, RoundError> {
        let mut state = self.state.lock();
        if *state != RoundState::Play {
            return Err(RoundError::InvalidState);
        }

        let bet = self.bet().ok_or(RoundError::InvalidState)?;
        let choice = bet.choice();
        let history = self.history();

        let window: Vec<_> = outcome::window_of(&history, self.options.hit_window).to_vec();
        let outcome = outcome::resolve_in_window(&history, &choice, self.options.hit_window);
        let hits = window
            .iter()
            .copied()
            .filter(|card| choice.matches(card))
            .collect();

        let multiplier = self.multipliers().for_choice(&choice);
        let net = payout(bet.amount(), multiplier, outcome.won, self.options.rounding);

        let result = RoundResult {
            bet,
            outcome,
            window,
            hits,
            displayed_card: outcome.matching_card.or_else(|| self.last_drawn()),
            multiplier,
            potential_payout: f64::from(bet.amount()) * multiplier,
            net,
        };

        *self.result.lock() = Some(result.clone());
        self.cues.lock().push(ResultCue::from_won(outcome.won));
        *state = RoundState::Result;

        info!(
            "Round resolved: {} on {} with {} draws, net {net}",
            if outcome.won { "won" } else { "lost" },
            choice,
            history.len()
        );
        Ok(result)
    }

    /// Plays another round with the same bet, deck and history.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in result state.
    pub fn play_again(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != RoundState::Result {
            return Err(RoundError::InvalidState);
        }

        *self.result.lock() = None;
        *state = RoundState::Play;
        drop(state);

        info!("Replaying with {} cards left", self.deck_size());
        Ok(())
    }

    /// Restarts the game: full deck, empty history, no bet.
    ///
    /// The multiplier table is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in result state.
    pub fn restart(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != RoundState::Result {
            return Err(RoundError::InvalidState);
        }

        self.deck.lock().reset_to_full();
        self.history.lock().clear();
        *self.last_drawn.lock() = None;
        *self.bet.lock() = None;
        *self.result.lock() = None;
        *state = RoundState::Setup;
        drop(state);

        info!("Game restarted");
        Ok(())
    }
}
