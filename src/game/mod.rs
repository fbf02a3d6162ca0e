//! Game session and round state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::choice::Bet;
use crate::deck::Deck;
use crate::options::{GameOptions, Multipliers};
use crate::outcome::{self, RoundOutcome};
use crate::probability::{self, Probability};
use crate::result::RoundResult;

mod play;
mod resolve;
mod setup;
pub mod state;

pub use state::{ResultCue, RoundState};

/// A card-draw betting game for a single player.
///
/// The game owns the deck, the bet, the draw history and the multiplier
/// table. A front-end keeps one `Game` per session and drives it through
/// [`Game::configure_round`], [`Game::draw`] and [`Game::end_round`].
pub struct Game {
    /// Cards left in the deck.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// Cards drawn this round, oldest first.
    pub history: Mutex<Vec<Card>>,
    /// Payout multipliers.
    multipliers: Mutex<Multipliers>,
    /// Bet for the current round.
    bet: Mutex<Option<Bet>>,
    /// Most recent card drawn.
    last_drawn: Mutex<Option<Card>>,
    /// Result of the resolved round.
    result: Mutex<Option<RoundResult>>,
    /// Pending cues for the audio front-end.
    cues: Mutex<Vec<ResultCue>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with a full deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use drawbet::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.deck_size(), 52);
    /// assert_eq!(game.state(), RoundState::Setup);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let multipliers = options.multipliers;

        Self {
            deck: Mutex::new(Deck::new()),
            options,
            state: Mutex::new(RoundState::Setup),
            history: Mutex::new(Vec::new()),
            multipliers: Mutex::new(multipliers),
            bet: Mutex::new(None),
            last_drawn: Mutex::new(None),
            result: Mutex::new(None),
            cues: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the bet for the current round, if one has been placed.
    pub fn bet(&self) -> Option<Bet> {
        *self.bet.lock()
    }

    /// Returns the current multiplier table.
    pub fn multipliers(&self) -> Multipliers {
        *self.multipliers.lock()
    }

    /// Returns the number of cards in the deck.
    pub fn deck_size(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the cards in the deck in storage order.
    pub fn deck_contents(&self) -> Vec<Card> {
        self.deck.lock().cards().to_vec()
    }

    /// Returns a copy of the draw history, oldest first.
    pub fn history(&self) -> Vec<Card> {
        self.history.lock().clone()
    }

    /// Returns the most recently drawn card.
    pub fn last_drawn(&self) -> Option<Card> {
        *self.last_drawn.lock()
    }

    /// Returns the result of the resolved round while in `Result` state.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.result.lock().clone()
    }

    /// Evaluates the hit window against the current bet without ending the
    /// round.
    ///
    /// Returns `None` before a bet is placed.
    pub fn current_outcome(&self) -> Option<RoundOutcome> {
        let bet = self.bet()?;
        let history = self.history.lock();
        Some(outcome::resolve_in_window(
            &history,
            &bet.choice(),
            self.options.hit_window,
        ))
    }

    /// Computes the probability that the next draw matches the current bet.
    ///
    /// Returns `None` before a bet is placed.
    pub fn probability_breakdown(&self) -> Option<Probability> {
        let bet = self.bet()?;
        let multipliers = self.multipliers();
        let deck = self.deck.lock();
        Some(probability::breakdown(&deck, &bet, &multipliers))
    }

    /// Takes all pending result cues.
    pub fn take_cues(&self) -> Vec<ResultCue> {
        self.cues.replace(Vec::new())
    }
}
