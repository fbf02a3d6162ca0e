//! Game integration tests.

#![allow(clippy::float_cmp)]

use drawbet::{
    BetError, Card, Choice, Colour, DECK_SIZE, Deck, DeckEdit, DrawError, Game, GameOptions,
    MultiplierError, MultiplierField, Multipliers, Parity, Probability, Rank, ResultCue,
    RoundError, RoundState, RoundingMode, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Draws exactly `draws` in order by leaving one card in the deck at a time.
fn draw_sequence(game: &Game, draws: &[Card]) {
    for &expected in draws {
        let mut deck = Deck::empty();
        deck.add_card(expected);
        *game.deck.lock() = deck;
        assert_eq!(game.draw().unwrap(), expected);
    }
}

#[test]
fn bet_errors() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.configure_round(0, Choice::Suit(Suit::Hearts)).unwrap_err(),
        BetError::ZeroBet
    );
    assert_eq!(
        game.configure_round_from_input("ten", Choice::Suit(Suit::Hearts))
            .unwrap_err(),
        BetError::InvalidAmount
    );
    assert_eq!(
        game.configure_round_from_input("-3", Choice::Suit(Suit::Hearts))
            .unwrap_err(),
        BetError::InvalidAmount
    );
    assert_eq!(game.state(), RoundState::Setup);
    assert_eq!(game.bet(), None);

    let bet = game
        .configure_round_from_input(" 15 ", Choice::Colour(Colour::Black))
        .unwrap();
    assert_eq!(bet.amount(), 15);
    assert_eq!(game.state(), RoundState::Play);

    assert_eq!(
        game.configure_round(5, Choice::Suit(Suit::Hearts)).unwrap_err(),
        BetError::InvalidState
    );
    assert_eq!(game.bet(), Some(bet));
}

#[test]
fn draw_requires_play_state() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.draw().unwrap_err(), DrawError::InvalidState);
    assert_eq!(game.deck_size(), DECK_SIZE);
}

#[test]
fn draw_removes_card_and_records_history() {
    let game = Game::new(GameOptions::default(), 9);
    game.configure_round(10, Choice::Suit(Suit::Spades)).unwrap();

    let first = game.draw().unwrap();
    let second = game.draw().unwrap();

    assert_eq!(game.deck_size(), DECK_SIZE - 2);
    assert!(!game.deck_contents().contains(&first));
    assert!(!game.deck_contents().contains(&second));
    assert_eq!(game.history(), vec![first, second]);
    assert_eq!(game.last_drawn(), Some(second));
}

#[test]
fn draw_on_empty_deck_signals_empty() {
    let game = Game::new(GameOptions::default(), 1);
    game.configure_round(10, Choice::Suit(Suit::Spades)).unwrap();
    assert!(game.edit_deck(DeckEdit::Clear));

    assert_eq!(game.draw().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(game.deck_size(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn same_seed_draws_same_cards() {
    let a = Game::new(GameOptions::default(), 1234);
    let b = Game::new(GameOptions::default(), 1234);
    a.configure_round(1, Choice::Suit(Suit::Hearts)).unwrap();
    b.configure_round(1, Choice::Suit(Suit::Hearts)).unwrap();

    for _ in 0..10 {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
}

#[test]
fn drawing_whole_deck_visits_every_card() {
    let game = Game::new(GameOptions::default(), 77);
    game.configure_round(1, Choice::Suit(Suit::Hearts)).unwrap();

    let mut drawn = Vec::new();
    while let Ok(card) = game.draw() {
        drawn.push(card);
    }

    drawn.sort_by_key(|c| (c.suit as u8, c.rank.value()));
    drawn.dedup();
    assert_eq!(drawn.len(), DECK_SIZE);
    assert_eq!(game.draw().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn round_won_by_number_in_window() {
    let game = Game::new(GameOptions::default(), 3);
    game.configure_round(10, Choice::Number(Rank::Seven)).unwrap();

    draw_sequence(
        &game,
        &[
            card(Rank::Two, Suit::Spades),
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );

    let result = game.end_round().unwrap();
    assert!(result.won());
    assert_eq!(
        result.outcome.matching_card,
        Some(card(Rank::Seven, Suit::Diamonds))
    );
    assert_eq!(result.displayed_card, Some(card(Rank::Seven, Suit::Diamonds)));
    assert_eq!(result.hits, vec![card(Rank::Seven, Suit::Diamonds)]);
    assert_eq!(result.multiplier, 4.61);
    assert_eq!(result.net, 46);
    assert_eq!(game.state(), RoundState::Result);
    assert_eq!(game.round_result(), Some(result));
    assert_eq!(game.take_cues(), vec![ResultCue::Win]);
    assert!(game.take_cues().is_empty());
}

#[test]
fn even_number_bet_uses_even_multiplier() {
    let game = Game::new(GameOptions::default(), 3);
    game.configure_round(10, Choice::Number(Rank::King)).unwrap();

    draw_sequence(&game, &[card(Rank::King, Suit::Clubs)]);

    let result = game.end_round().unwrap();
    assert!(result.won());
    assert_eq!(result.multiplier, 4.34);
    assert_eq!(result.net, 43);
}

#[test]
fn earlier_hit_in_window_still_wins() {
    let game = Game::new(GameOptions::default(), 4);
    game.configure_round(20, Choice::Suit(Suit::Hearts)).unwrap();

    draw_sequence(
        &game,
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ],
    );

    let result = game.end_round().unwrap();
    assert!(result.won());
    assert_eq!(
        result.outcome.matching_card,
        Some(card(Rank::Nine, Suit::Hearts))
    );
    assert_eq!(
        result.hits,
        vec![card(Rank::Five, Suit::Hearts), card(Rank::Nine, Suit::Hearts)]
    );
    assert_eq!(result.net, 43);
}

#[test]
fn hit_outside_window_loses() {
    let game = Game::new(GameOptions::default(), 5);
    game.configure_round(10, Choice::Colour(Colour::Red)).unwrap();

    draw_sequence(
        &game,
        &[
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
        ],
    );

    let result = game.end_round().unwrap();
    assert!(!result.won());
    assert_eq!(result.net, -10);
    assert!(result.hits.is_empty());
    assert_eq!(
        result.window,
        vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
        ]
    );
    assert_eq!(result.displayed_card, Some(card(Rank::Four, Suit::Clubs)));
    assert_eq!(game.take_cues(), vec![ResultCue::Loss]);
}

#[test]
fn hit_window_is_configurable() {
    let options = GameOptions::default().with_hit_window(1);
    let game = Game::new(options, 5);
    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();

    draw_sequence(
        &game,
        &[card(Rank::Ace, Suit::Hearts), card(Rank::Two, Suit::Clubs)],
    );

    assert!(!game.end_round().unwrap().won());
}

#[test]
fn round_without_draws_is_lost() {
    let game = Game::new(GameOptions::default(), 6);
    game.configure_round(8, Choice::Suit(Suit::Clubs)).unwrap();

    let result = game.end_round().unwrap();
    assert!(!result.won());
    assert_eq!(result.displayed_card, None);
    assert!(result.window.is_empty());
    assert_eq!(result.net, -8);
    assert_eq!(result.potential_payout, 8.0 * 2.17);
}

#[test]
fn rounding_mode_applies_to_wins() {
    let options = GameOptions::default().with_rounding(RoundingMode::Down);
    let game = Game::new(options, 6);
    game.configure_round(10, Choice::Number(Rank::Seven)).unwrap();
    draw_sequence(&game, &[card(Rank::Seven, Suit::Spades)]);

    assert_eq!(game.end_round().unwrap().net, 46);
}

#[test]
fn play_again_keeps_deck_and_history() {
    let game = Game::new(GameOptions::default(), 8);
    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
    game.draw().unwrap();
    game.draw().unwrap();
    let history = game.history();

    assert_eq!(game.play_again().unwrap_err(), RoundError::InvalidState);
    game.end_round().unwrap();
    game.play_again().unwrap();

    assert_eq!(game.state(), RoundState::Play);
    assert_eq!(game.history(), history);
    assert_eq!(game.deck_size(), DECK_SIZE - 2);
    assert_eq!(game.round_result(), None);
    assert!(game.bet().is_some());

    game.draw().unwrap();
    assert_eq!(game.history().len(), 3);
}

#[test]
fn restart_resets_everything_but_multipliers() {
    let game = Game::new(GameOptions::default(), 8);
    let table = Multipliers::new(10.0, 2.0, 1.5, 3.0, 3.5).unwrap();
    game.set_multipliers(table);
    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
    game.edit_deck(DeckEdit::RemoveFaces);
    game.draw().unwrap();

    assert_eq!(game.restart().unwrap_err(), RoundError::InvalidState);
    game.end_round().unwrap();
    assert_eq!(game.end_round().unwrap_err(), RoundError::InvalidState);
    game.restart().unwrap();

    assert_eq!(game.state(), RoundState::Setup);
    assert_eq!(game.deck_size(), DECK_SIZE);
    assert!(game.history().is_empty());
    assert_eq!(game.last_drawn(), None);
    assert_eq!(game.bet(), None);
    assert_eq!(game.multipliers(), table);
}

#[test]
fn deck_edits_report_changes() {
    let game = Game::new(GameOptions::default(), 2);
    let ace = card(Rank::Ace, Suit::Spades);

    assert!(game.edit_deck(DeckEdit::RemoveCard(ace)));
    assert!(!game.edit_deck(DeckEdit::RemoveCard(ace)));
    assert!(game.edit_deck(DeckEdit::AddCard(ace)));
    assert!(!game.edit_deck(DeckEdit::AddCard(ace)));

    assert!(game.edit_deck(DeckEdit::RemoveSuit(Suit::Clubs)));
    assert!(!game.edit_deck(DeckEdit::RemoveSuit(Suit::Clubs)));
    assert!(game.edit_deck(DeckEdit::AddColour(Colour::Black)));
    assert!(game.edit_deck(DeckEdit::RemoveParity(Parity::Odd)));
    assert_eq!(game.deck_size(), 24);
    assert!(game.edit_deck(DeckEdit::RemoveFaces));
    assert_eq!(game.deck_size(), 20);
    assert!(game.edit_deck(DeckEdit::Reset));
    assert!(!game.edit_deck(DeckEdit::Reset));
}

#[test]
fn reset_edit_clears_history() {
    let game = Game::new(GameOptions::default(), 2);
    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
    game.draw().unwrap();

    assert!(game.edit_deck(DeckEdit::Reset));
    assert!(game.history().is_empty());
    assert_eq!(game.deck_size(), DECK_SIZE);
    assert_eq!(game.state(), RoundState::Play);
}

#[test]
fn shuffle_keeps_contents() {
    let game = Game::new(GameOptions::default(), 2);
    let mut before = game.deck_contents();

    game.shuffle();

    let mut after = game.deck_contents();
    assert_eq!(after.len(), DECK_SIZE);
    before.sort_by_key(|c| (c.suit as u8, c.rank.value()));
    after.sort_by_key(|c| (c.suit as u8, c.rank.value()));
    assert_eq!(before, after);
}

#[test]
fn multiplier_input_is_rejected_atomically() {
    let game = Game::new(GameOptions::default(), 2);

    assert_eq!(
        game.set_multipliers_from_input("20", "3", "x", "5", "4")
            .unwrap_err(),
        MultiplierError::Unparseable {
            field: MultiplierField::Colour
        }
    );
    assert_eq!(
        game.set_multipliers_from_input("20", "3", "2", "5", "-4")
            .unwrap_err(),
        MultiplierError::NotPositive {
            field: MultiplierField::NumberEven
        }
    );
    assert_eq!(game.multipliers(), Multipliers::default());

    game.set_multipliers_from_input("20", "3", "2", "5", "4")
        .unwrap();
    assert_eq!(game.multipliers().individual(), 20.0);
    assert_eq!(game.multipliers().number_even(), 4.0);
}

#[test]
fn new_multipliers_apply_to_payout() {
    let game = Game::new(GameOptions::default(), 2);
    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
    game.set_multipliers(Multipliers::new(10.0, 3.0, 1.5, 3.0, 3.5).unwrap());
    draw_sequence(&game, &[card(Rank::Two, Suit::Hearts)]);

    let result = game.end_round().unwrap();
    assert_eq!(result.multiplier, 3.0);
    assert_eq!(result.net, 30);
}

#[test]
fn probability_follows_deck() {
    let game = Game::new(GameOptions::default(), 2);
    assert_eq!(game.probability_breakdown(), None);

    game.configure_round(10, Choice::Suit(Suit::Hearts)).unwrap();
    let probability = game.probability_breakdown().unwrap();
    let breakdown = probability.breakdown().unwrap();
    assert_eq!(breakdown.favorable, 13);
    assert_eq!(breakdown.total, 52);

    game.edit_deck(DeckEdit::RemoveColour(Colour::Black));
    let probability = game.probability_breakdown().unwrap();
    assert_eq!(probability.breakdown().unwrap().percentage, 50.0);

    game.edit_deck(DeckEdit::Clear);
    assert_eq!(game.probability_breakdown(), Some(Probability::EmptyDeck));
}

#[test]
fn current_outcome_does_not_end_round() {
    let game = Game::new(GameOptions::default(), 2);
    assert_eq!(game.current_outcome(), None);

    game.configure_round(10, Choice::Colour(Colour::Black)).unwrap();
    assert!(!game.current_outcome().unwrap().won);

    draw_sequence(&game, &[card(Rank::Two, Suit::Spades)]);
    let outcome = game.current_outcome().unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.matching_card, Some(card(Rank::Two, Suit::Spades)));
    assert_eq!(game.state(), RoundState::Play);
    assert!(game.take_cues().is_empty());
}

#[test]
fn options_builder_sets_fields() {
    let table = Multipliers::new(12.0, 2.5, 1.2, 4.0, 4.5).unwrap();
    let options = GameOptions::default()
        .with_multipliers(table)
        .with_rounding(RoundingMode::Up)
        .with_hit_window(2);

    assert_eq!(options.multipliers, table);
    assert_eq!(options.rounding, RoundingMode::Up);
    assert_eq!(options.hit_window, 2);

    let game = Game::new(options, 0);
    assert_eq!(game.multipliers(), table);
}
