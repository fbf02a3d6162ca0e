use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::DeckEdit;
use crate::error::DrawError;

use super::{Game, RoundState};

impl Game {
    /// Draws a random card from the deck and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidState`] outside of play and
    /// [`DrawError::EmptyDeck`] when no cards are left. Front-ends should stop
    /// offering draws on the latter.
    pub fn draw(&self) -> Result<Card, DrawError> {
        if *self.state.lock() != RoundState::Play {
            return Err(DrawError::InvalidState);
        }

        let card = {
            let mut rng = self.rng.lock();
            self.deck.lock().draw_random(&mut *rng)
        }
        .ok_or(DrawError::EmptyDeck)?;

        self.history.lock().push(card);
        *self.last_drawn.lock() = Some(card);

        debug!("Drew {card}, {} cards left", self.deck_size());
        Ok(card)
    }

    /// Applies a structural edit to the deck.
    ///
    /// Edits are accepted in any state. [`DeckEdit::Reset`] also clears the
    /// draw history.
    ///
    /// Returns `true` if any card was added or removed.
    pub fn edit_deck(&self, edit: DeckEdit) -> bool {
        let changed = self.deck.with(|deck| deck.apply(edit));

        if edit == DeckEdit::Reset {
            self.history.with(Vec::clear);
        }

        debug!(
            "Deck edit {edit:?} changed {changed} cards, {} cards left",
            self.deck_size()
        );
        changed > 0
    }

    /// Reorders the deck. Draw odds are unaffected.
    pub fn shuffle(&self) {
        let mut rng = self.rng.lock();
        self.deck.lock().shuffle(&mut *rng);
        debug!("Deck shuffled");
    }
}
