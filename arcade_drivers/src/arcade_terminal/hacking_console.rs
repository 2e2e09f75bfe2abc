//! Interactive password-cracking console. Candidate words are wrapped in
//! punctuation noise before display, the guess history is replayed under
//! the prompt, and a failed run holds the terminal through the lockout
//! countdown. All of that is presentation; the puzzle engine only sees
//! guesses.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use arcade::hacking::{Phase, Puzzle};
use arcade_drivers::load_word_list;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const NOISE_CHARS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?|";

pub fn run(config: &arcade_drivers::Config, seed: Option<u64>) {
    let words = load_word_list(&config.hacking);
    let settings = &config.hacking;

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut puzzle = match Puzzle::generate(
            &words,
            settings.min_candidates,
            settings.max_candidates,
            settings.allowed_attempts,
            &mut *rng,
        ) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                println!("{}", err);
                return;
            }
        };

        println!("ENTRY DENIED -- select a password candidate by number:");
        render_candidates(&puzzle, &mut *rng);
        play_puzzle(&mut puzzle, &mut lines);

        if puzzle.phase() == Phase::LockedOut {
            lockout_countdown(settings.restart_timeout);
        }

        println!();
        print!("Try another terminal? [y/n] ");
        if !read_yes(&mut lines) {
            break;
        }
        println!();
    }
}

fn play_puzzle(puzzle: &mut Puzzle, lines: &mut impl Iterator<Item = io::Result<String>>) {
    while puzzle.phase() == Phase::InProgress {
        print!("> ");
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };
        let index: usize = match line.trim().parse() {
            Ok(index) => index,
            Err(_) => {
                println!("Enter the number of a candidate.");
                continue;
            }
        };

        match puzzle.guess(index) {
            Ok(guess) => {
                println!(
                    "[{}] - [{}] - Attempt: [{}/{}]",
                    guess.word.trim_end(),
                    guess.likeness,
                    guess.attempt,
                    puzzle.allowed_attempts()
                );
                match puzzle.phase() {
                    Phase::Unlocked => println!("Access granted!"),
                    Phase::LockedOut => println!("Failed! Attempt limit reached."),
                    Phase::InProgress => {}
                }
            }
            Err(err) => println!("{}", err),
        }
    }
}

/// Each candidate is shown once, wrapped in fresh noise, numbered for
/// guessing.
fn render_candidates(puzzle: &Puzzle, rng: &mut (impl Rng + ?Sized)) {
    for (index, word) in puzzle.words().iter().enumerate() {
        println!("{:3}) {}{}{}", index, noise(rng), word, noise(rng));
    }
}

/// Between 4 and 20 random punctuation characters to bury a candidate in.
fn noise(rng: &mut (impl Rng + ?Sized)) -> String {
    let count = rng.gen_range(4..=20);
    (0..count)
        .map(|_| {
            let index = rng.gen_range(0..NOISE_CHARS.len());
            NOISE_CHARS.as_bytes()[index] as char
        })
        .collect()
}

fn lockout_countdown(restart_timeout: u64) {
    let mut countdown = restart_timeout;
    while countdown > 0 {
        println!("Try again after {} seconds.", countdown);
        thread::sleep(Duration::from_secs(1));
        countdown -= 1;
    }
}

fn read_yes(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    io::stdout().flush().ok();
    match lines.next() {
        Some(Ok(line)) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
