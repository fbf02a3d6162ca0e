//! The mutable deck of unique cards.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Colour, DECK_SIZE, Parity, Rank, Suit};

/// A structural edit applied to a [`Deck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEdit {
    /// Restore all 52 cards.
    Reset,
    /// Remove every card.
    Clear,
    /// Remove all cards of a suit.
    RemoveSuit(Suit),
    /// Add all missing cards of a suit.
    AddSuit(Suit),
    /// Remove all cards of a colour.
    RemoveColour(Colour),
    /// Add all missing cards of a colour.
    AddColour(Colour),
    /// Remove all face cards.
    RemoveFaces,
    /// Add all missing face cards.
    AddFaces,
    /// Remove all cards whose rank value has the given parity.
    RemoveParity(Parity),
    /// Add all missing cards whose rank value has the given parity.
    AddParity(Parity),
    /// Remove one specific card.
    RemoveCard(Card),
    /// Add one specific card.
    AddCard(Card),
}

/// A set of at most 52 cards, never holding the same rank and suit twice.
///
/// Cards keep their insertion order; added cards are appended at the end.
/// [`Deck::draw_random`] picks uniformly over the current contents, so the
/// storage order never affects draw odds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self::empty();
        deck.reset_to_full();
        deck
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Restores the deck to all 52 cards in suit then rank order.
    pub fn reset_to_full(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in storage order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Adds a card unless it is already present.
    ///
    /// Returns `true` if the card was added.
    pub fn add_card(&mut self, card: Card) -> bool {
        if self.contains(card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Removes a card if present.
    ///
    /// Returns `true` if the card was removed.
    pub fn remove_card(&mut self, card: Card) -> bool {
        self.remove_where(|c| *c == card) > 0
    }

    /// Removes all cards of a suit. Returns the number removed.
    pub fn remove_suit(&mut self, suit: Suit) -> usize {
        self.remove_where(|c| c.suit == suit)
    }

    /// Adds all missing cards of a suit. Returns the number added.
    pub fn add_suit(&mut self, suit: Suit) -> usize {
        self.add_all(Rank::ALL.into_iter().map(|rank| Card::new(rank, suit)))
    }

    /// Removes all cards of a colour. Returns the number removed.
    pub fn remove_colour(&mut self, colour: Colour) -> usize {
        self.remove_where(|c| c.colour() == colour)
    }

    /// Adds all missing cards of a colour. Returns the number added.
    pub fn add_colour(&mut self, colour: Colour) -> usize {
        colour.suits().into_iter().map(|suit| self.add_suit(suit)).sum()
    }

    /// Removes all face cards. Returns the number removed.
    pub fn remove_faces(&mut self) -> usize {
        self.remove_where(Card::is_face)
    }

    /// Adds all missing face cards. Returns the number added.
    pub fn add_faces(&mut self) -> usize {
        self.add_all(
            Suit::ALL
                .into_iter()
                .flat_map(|suit| Rank::FACES.into_iter().map(move |rank| Card::new(rank, suit))),
        )
    }

    /// Removes all cards whose rank value has the given parity.
    pub fn remove_parity(&mut self, parity: Parity) -> usize {
        self.remove_where(|c| c.rank.parity() == parity)
    }

    /// Adds all missing cards whose rank value has the given parity.
    pub fn add_parity(&mut self, parity: Parity) -> usize {
        self.add_all(Suit::ALL.into_iter().flat_map(move |suit| {
            Rank::ALL
                .into_iter()
                .filter(move |rank| rank.parity() == parity)
                .map(move |rank| Card::new(rank, suit))
        }))
    }

    /// Removes A, 3, 5, 7, 9, J and Q.
    pub fn remove_odd(&mut self) -> usize {
        self.remove_parity(Parity::Odd)
    }

    /// Adds A, 3, 5, 7, 9, J and Q.
    pub fn add_odd(&mut self) -> usize {
        self.add_parity(Parity::Odd)
    }

    /// Removes 2, 4, 6, 8, 10 and K.
    pub fn remove_even(&mut self) -> usize {
        self.remove_parity(Parity::Even)
    }

    /// Adds 2, 4, 6, 8, 10 and K.
    pub fn add_even(&mut self) -> usize {
        self.add_parity(Parity::Even)
    }

    /// Applies an edit and returns the number of cards added or removed.
    ///
    /// [`DeckEdit::Reset`] reports the number of cards restored.
    pub fn apply(&mut self, edit: DeckEdit) -> usize {
        match edit {
            DeckEdit::Reset => {
                let before = self.len();
                self.reset_to_full();
                DECK_SIZE - before
            }
            DeckEdit::Clear => {
                let before = self.len();
                self.clear();
                before
            }
            DeckEdit::RemoveSuit(suit) => self.remove_suit(suit),
            DeckEdit::AddSuit(suit) => self.add_suit(suit),
            DeckEdit::RemoveColour(colour) => self.remove_colour(colour),
            DeckEdit::AddColour(colour) => self.add_colour(colour),
            DeckEdit::RemoveFaces => self.remove_faces(),
            DeckEdit::AddFaces => self.add_faces(),
            DeckEdit::RemoveParity(parity) => self.remove_parity(parity),
            DeckEdit::AddParity(parity) => self.add_parity(parity),
            DeckEdit::RemoveCard(card) => usize::from(self.remove_card(card)),
            DeckEdit::AddCard(card) => usize::from(self.add_card(card)),
        }
    }

    /// Draws a uniformly random card and removes it from the deck.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    /// Reorders the stored cards. Membership is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Counts the cards satisfying a predicate.
    pub fn count_matching(&self, predicate: impl Fn(&Card) -> bool) -> usize {
        self.cards.iter().filter(|c| predicate(*c)).count()
    }

    /// Counts the cards of a suit.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.count_matching(|c| c.suit == suit)
    }

    /// Counts the cards of a colour.
    #[must_use]
    pub fn count_colour(&self, colour: Colour) -> usize {
        self.count_matching(|c| c.colour() == colour)
    }

    /// Counts the cards of a rank across all suits.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.count_matching(|c| c.rank == rank)
    }

    /// Counts copies of a specific card (0 or 1).
    #[must_use]
    pub fn count_card(&self, card: Card) -> usize {
        usize::from(self.contains(card))
    }

    /// Counts the face cards.
    #[must_use]
    pub fn count_faces(&self) -> usize {
        self.count_matching(Card::is_face)
    }

    fn remove_where(&mut self, predicate: impl Fn(&Card) -> bool) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !predicate(c));
        before - self.cards.len()
    }

    fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) -> usize {
        cards
            .into_iter()
            .map(|card| usize::from(self.add_card(card)))
            .sum()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
