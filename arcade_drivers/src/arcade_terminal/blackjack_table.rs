//! Interactive blackjack table. This is the rendering collaborator the
//! engine expects: it decides what to show (the dealer's hole card stays
//! face down while the player acts) and paces the dealer's draws with a
//! configurable delay, while the engine itself never sleeps.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use arcade::blackjack::{DealerStep, Deck, Outcome, Phase, PlayerAction, Round, Rule};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub fn run(config: &arcade_drivers::Config, seed: Option<u64>) {
    let rule: Rule = config
        .blackjack
        .clone()
        .try_into()
        .expect("invalid dealer_soft17 in config");
    let draw_delay = Duration::from_millis(config.blackjack.card_draw_delay_ms);

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut round = Round::start_with_deck(rule, Deck::shuffled(&mut *rng))
            .expect("a fresh deck always covers the opening deal");
        play_round(&mut round, draw_delay, &mut lines);

        println!();
        print!("Play another round? [y/n] ");
        if !read_yes(&mut lines) {
            break;
        }
        println!();
    }
}

fn play_round(
    round: &mut Round,
    draw_delay: Duration,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    while round.phase() == Phase::PlayerActing {
        render(round);
        print!("[h]it or [s]tand? ");
        let action = match read_action(lines) {
            Some(action) => action,
            None => return,
        };
        if let Err(err) = round.apply(action) {
            println!("{}", err);
            return;
        }
    }

    // The hole card is face up from here on.
    if round.phase() == Phase::DealerActing {
        render(round);
    }
    while round.phase() == Phase::DealerActing {
        match round.advance_dealer() {
            Ok(DealerStep::Drew(card)) => {
                println!("The dealer draws {}.", card);
                render(round);
                thread::sleep(draw_delay);
            }
            Ok(DealerStep::Settled(_)) => {}
            Err(err) => {
                println!("{}", err);
                return;
            }
        }
    }

    render(round);
    match round.outcome() {
        Some(Outcome::PlayerWin) if round.dealer_score() > 21 => {
            println!("You win! The dealer busts.")
        }
        Some(Outcome::PlayerWin) => println!("You win!"),
        Some(Outcome::Push) => println!("Push."),
        Some(Outcome::DealerWin) if round.player_score() > 21 => {
            println!("You bust. Dealer takes it.")
        }
        Some(Outcome::DealerWin) => println!("Dealer wins."),
        None => {}
    }
}

/// Draws both hands. While the player is still acting only the dealer's
/// first card is shown; the engine exposes the full hand regardless.
fn render(round: &Round) {
    let player_cards: Vec<String> = round
        .player_hand()
        .cards()
        .iter()
        .map(|card| card.to_string())
        .collect();
    println!(
        "Your cards:   {}  (score: {})",
        player_cards.join(" "),
        round.player_score()
    );

    if round.phase() == Phase::PlayerActing {
        let up_card = round.dealer_hand().cards()[0];
        println!("Dealer cards: {}  ?  (score: ?)", up_card);
    } else {
        let dealer_cards: Vec<String> = round
            .dealer_hand()
            .cards()
            .iter()
            .map(|card| card.to_string())
            .collect();
        println!(
            "Dealer cards: {}  (score: {})",
            dealer_cards.join(" "),
            round.dealer_score()
        );
    }
}

fn read_action(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<PlayerAction> {
    loop {
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return None,
        };
        match line.trim().to_lowercase().as_str() {
            "h" | "hit" => return Some(PlayerAction::Hit),
            "s" | "stand" => return Some(PlayerAction::Stand),
            _ => print!("Please answer [h]it or [s]tand: "),
        }
    }
}

fn read_yes(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    io::stdout().flush().ok();
    match lines.next() {
        Some(Ok(line)) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
