//! CLI card-draw example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use drawbet::{
    Card, Choice, Colour, DeckEdit, Game, GameOptions, Parity, Rank, ResultCue, RoundResult,
    RoundState, Suit,
};

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the deck. Defaults to the current time.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of most recent draws that can win a round.
    #[clap(long, default_value_t = drawbet::HIT_WINDOW, value_parser = parse_window)]
    window: usize,
    /// Disable the terminal bell on round results.
    #[clap(long)]
    mute: bool,
}

fn parse_window(input: &str) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(value) if (1..=52).contains(&value) => Ok(value),
        _ => Err("window must be between 1 and 52".to_string()),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default().with_hit_window(cli.window);
    let game = Game::new(options, seed);
    let cues = spawn_audio(cli.mute);

    println!("Card draw CLI example (type 'q' to quit)");

    loop {
        let keep_going = match game.state() {
            RoundState::Setup => setup_menu(&game),
            RoundState::Play => play_menu(&game),
            RoundState::Result => result_menu(&game),
        };

        // Audio failures never affect play.
        for cue in game.take_cues() {
            let _ = cues.send(cue);
        }

        if !keep_going {
            println!("Goodbye.");
            break;
        }
    }
}

fn spawn_audio(mute: bool) -> mpsc::Sender<ResultCue> {
    let (tx, rx) = mpsc::channel::<ResultCue>();
    thread::spawn(move || {
        for cue in rx {
            if mute {
                continue;
            }
            let bells = match cue {
                ResultCue::Win => "\u{7}\u{7}",
                ResultCue::Loss => "\u{7}",
            };
            print!("{bells}");
            let _ = io::stdout().flush();
        }
    });
    tx
}

fn setup_menu(game: &Game) -> bool {
    println!("\n{}", colorize("== Setup ==", "1"));
    print_multipliers(game);
    println!("[b]et  [m]ultipliers  [e]dit deck  [q]uit");

    match prompt_line("> ").as_str() {
        "b" | "bet" => {
            let Some(choice) = prompt_choice() else {
                return true;
            };
            let amount = prompt_line("Bet amount: ");
            match game.configure_round_from_input(&amount, choice) {
                Ok(bet) => println!("Betting {} on {}.", bet.amount(), bet.choice()),
                Err(err) => println!("Bet error: {err}"),
            }
        }
        "m" | "multipliers" => edit_multipliers(game),
        "e" | "edit" => edit_deck(game),
        "q" | "quit" => return false,
        _ => println!("Unknown command."),
    }
    true
}

fn play_menu(game: &Game) -> bool {
    print_play(game);
    println!("[d]raw  [p]robability  [e]dit deck  [s]huffle  [r]esult  [q]uit");

    match prompt_line("> ").as_str() {
        "d" | "draw" => match game.draw() {
            Ok(card) => println!("Drew {}.", format_card(&card)),
            Err(err) => println!("Draw error: {err}"),
        },
        "p" | "probability" => match game.probability_breakdown() {
            Some(probability) => println!("{probability}"),
            None => println!("No bet placed."),
        },
        "e" | "edit" => edit_deck(game),
        "s" | "shuffle" => {
            game.shuffle();
            println!("Deck shuffled.");
        }
        "r" | "result" => match game.end_round() {
            Ok(result) => print_result(&result),
            Err(err) => println!("Round error: {err}"),
        },
        "q" | "quit" => return false,
        _ => println!("Unknown command."),
    }
    true
}

fn result_menu(game: &Game) -> bool {
    println!("[a]gain  [r]estart  [q]uit");

    let result = match prompt_line("> ").as_str() {
        "a" | "again" => game.play_again(),
        "r" | "restart" => game.restart(),
        "q" | "quit" => return false,
        _ => {
            println!("Unknown command.");
            return true;
        }
    };

    if let Err(err) = result {
        println!("Round error: {err}");
    }
    true
}

fn edit_deck(game: &Game) {
    println!(
        "Deck edits: [reset] [clear] [-suit] [+suit] [-colour] [+colour] [-faces] [+faces] \
         [-odd] [+odd] [-even] [+even] [-card] [+card]"
    );

    let edit = match prompt_line("Edit: ").as_str() {
        "reset" => DeckEdit::Reset,
        "clear" => DeckEdit::Clear,
        "-suit" => match prompt_suit() {
            Some(suit) => DeckEdit::RemoveSuit(suit),
            None => return,
        },
        "+suit" => match prompt_suit() {
            Some(suit) => DeckEdit::AddSuit(suit),
            None => return,
        },
        "-colour" => match prompt_colour() {
            Some(colour) => DeckEdit::RemoveColour(colour),
            None => return,
        },
        "+colour" => match prompt_colour() {
            Some(colour) => DeckEdit::AddColour(colour),
            None => return,
        },
        "-faces" => DeckEdit::RemoveFaces,
        "+faces" => DeckEdit::AddFaces,
        "-odd" => DeckEdit::RemoveParity(Parity::Odd),
        "+odd" => DeckEdit::AddParity(Parity::Odd),
        "-even" => DeckEdit::RemoveParity(Parity::Even),
        "+even" => DeckEdit::AddParity(Parity::Even),
        "-card" => match prompt_card() {
            Some(card) => DeckEdit::RemoveCard(card),
            None => return,
        },
        "+card" => match prompt_card() {
            Some(card) => DeckEdit::AddCard(card),
            None => return,
        },
        _ => {
            println!("Unknown edit.");
            return;
        }
    };

    if game.edit_deck(edit) {
        println!("Deck now has {} cards.", game.deck_size());
    } else {
        println!("Deck unchanged ({} cards).", game.deck_size());
    }
}

fn edit_multipliers(game: &Game) {
    let current = game.multipliers();
    let individual = prompt_or(&format!("Individual [{}]: ", current.individual()));
    let suit = prompt_or(&format!("Suit [{}]: ", current.suit()));
    let colour = prompt_or(&format!("Colour [{}]: ", current.colour()));
    let odd = prompt_or(&format!("Number odd [{}]: ", current.number_odd()));
    let even = prompt_or(&format!("Number even [{}]: ", current.number_even()));

    let individual = individual.unwrap_or_else(|| current.individual().to_string());
    let suit = suit.unwrap_or_else(|| current.suit().to_string());
    let colour = colour.unwrap_or_else(|| current.colour().to_string());
    let odd = odd.unwrap_or_else(|| current.number_odd().to_string());
    let even = even.unwrap_or_else(|| current.number_even().to_string());

    match game.set_multipliers_from_input(&individual, &suit, &colour, &odd, &even) {
        Ok(()) => println!("Multipliers updated."),
        Err(err) => println!("Multiplier error: {err}"),
    }
}

fn prompt_choice() -> Option<Choice> {
    println!("Bet on: [i]ndividual card  [s]uit  [c]olour  [n]umber");
    match prompt_line("Category: ").as_str() {
        "i" | "individual" => prompt_card().map(Choice::Individual),
        "s" | "suit" => prompt_suit().map(Choice::Suit),
        "c" | "colour" | "color" => prompt_colour().map(Choice::Colour),
        "n" | "number" => prompt_rank().map(Choice::Number),
        _ => {
            println!("Unknown category.");
            None
        }
    }
}

fn prompt_card() -> Option<Card> {
    let input = prompt_line("Card (e.g. 7h, qs, 10d): ");
    let card = parse_card(&input);
    if card.is_none() {
        println!("Unknown card.");
    }
    card
}

fn parse_card(input: &str) -> Option<Card> {
    let suit_char = input.chars().last()?;
    let rank = Rank::from_symbol(&input[..input.len() - suit_char.len_utf8()])?;
    let suit = parse_suit(&suit_char.to_string())?;
    Some(Card::new(rank, suit))
}

fn prompt_suit() -> Option<Suit> {
    let suit = parse_suit(&prompt_line("Suit (h/d/c/s): "));
    if suit.is_none() {
        println!("Unknown suit.");
    }
    suit
}

fn parse_suit(input: &str) -> Option<Suit> {
    match input {
        "h" | "hearts" => Some(Suit::Hearts),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "c" | "clubs" => Some(Suit::Clubs),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}

fn prompt_colour() -> Option<Colour> {
    match prompt_line("Colour (r/b): ").as_str() {
        "r" | "red" => Some(Colour::Red),
        "b" | "black" => Some(Colour::Black),
        _ => {
            println!("Unknown colour.");
            None
        }
    }
}

fn prompt_rank() -> Option<Rank> {
    let rank = Rank::from_symbol(&prompt_line("Rank (A, 2-10, J, Q, K): "));
    if rank.is_none() {
        println!("Unknown rank.");
    }
    rank
}

fn prompt_or(prompt: &str) -> Option<String> {
    let input = prompt_line(prompt);
    if input.is_empty() { None } else { Some(input) }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_multipliers(game: &Game) {
    let table = game.multipliers();
    println!(
        "Multipliers: individual x{} | suit x{} | colour x{} | number odd x{} | number even x{}",
        table.individual(),
        table.suit(),
        table.colour(),
        table.number_odd(),
        table.number_even()
    );
}

fn print_play(game: &Game) {
    println!("\n{}", colorize("== Play ==", "1"));
    if let Some(bet) = game.bet() {
        println!(
            "Bet: {} on {} (x{})",
            bet.amount(),
            bet.choice(),
            game.multipliers().for_choice(&bet.choice())
        );
    }
    println!("Deck: {} cards", game.deck_size());

    let history = game.history();
    let window = drawbet::outcome::window_of(&history, game.options.hit_window);
    if window.is_empty() {
        println!("Last draws: (none)");
    } else {
        let cards = window.iter().map(format_card).collect::<Vec<_>>();
        println!("Last draws: {}", cards.join(" "));
    }
}

fn print_result(result: &RoundResult) {
    let shown = result
        .displayed_card
        .map_or_else(|| "(no card)".to_string(), |card| format_card(&card));
    let window = result.window.iter().map(format_card).collect::<Vec<_>>();

    println!("\nCard: {shown}");
    println!("Window: {}", window.join(" "));
    if result.won() {
        println!(
            "{} {} hit(s), payout {} (x{})",
            colorize("WIN", "32"),
            result.hits.len(),
            result.net,
            result.multiplier
        );
    } else {
        println!(
            "{} net {} (a win would have paid {:.2})",
            colorize("LOSS", "31"),
            result.net,
            result.potential_payout
        );
    }
}

fn format_card(card: &Card) -> String {
    let code = match card.colour() {
        Colour::Red => "31",
        Colour::Black => "34",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
