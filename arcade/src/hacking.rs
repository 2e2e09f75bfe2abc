//! The password "hacking" puzzle: a handful of candidate words, one of them
//! the secret, and a limited budget of guesses. Every wrong guess reports
//! its likeness to the secret, the per-position character matches.
//!
//! The engine only tracks words, guesses and the lock state. Dressing the
//! candidates up in punctuation noise, the lockout countdown and the
//! restart button are all front-end concerns.

use arcade_macros::allowed_phase;
use log::debug;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Unlocked,
    LockedOut,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("operation is only allowed in the {expected:?} phase, but the puzzle is {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },

    #[error("no words to build a puzzle from")]
    NoWords,

    #[error("candidate count range {0}..={1} is empty")]
    EmptyCandidateRange(usize, usize),

    #[error("no candidate with index {0}")]
    UnknownWord(usize),

    #[error("that word was already tried")]
    AlreadyTried,
}

/// One entry of the attempt history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: String,
    pub likeness: usize,
    pub attempt: u32,
    pub correct: bool,
}

/// Counts the positions at which the two words carry the same character.
pub fn likeness(candidate: &str, secret: &str) -> usize {
    candidate
        .chars()
        .zip(secret.chars())
        .filter(|(a, b)| a == b)
        .count()
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    words: Vec<String>,
    secret: usize,
    allowed_attempts: u32,
    attempts_used: u32,
    tried: Vec<bool>,
    history: Vec<Guess>,
    phase: Phase,
}

impl Puzzle {
    /// Builds a puzzle from a word source: picks a uniform random candidate
    /// count in `min_candidates..=max_candidates` (capped by the source
    /// size), samples that many distinct words, and marks one of them as the
    /// secret.
    pub fn generate<R: Rng + ?Sized>(
        source: &[String],
        min_candidates: usize,
        max_candidates: usize,
        allowed_attempts: u32,
        rng: &mut R,
    ) -> Result<Puzzle, Error> {
        if source.is_empty() {
            return Err(Error::NoWords);
        }
        if min_candidates == 0 || max_candidates < min_candidates {
            return Err(Error::EmptyCandidateRange(min_candidates, max_candidates));
        }

        let count = rng.gen_range(min_candidates..=max_candidates).min(source.len());
        let mut words: Vec<String> = Vec::with_capacity(count);
        let mut used = vec![false; source.len()];
        while words.len() < count {
            let index = rng.gen_range(0..source.len());
            if !used[index] {
                used[index] = true;
                words.push(source[index].clone());
            }
        }
        let secret = rng.gen_range(0..words.len());
        debug!("puzzle generated with {} candidates", words.len());

        let tried = vec![false; words.len()];
        Ok(Puzzle {
            words,
            secret,
            allowed_attempts,
            attempts_used: 0,
            tried,
            history: Vec::new(),
            phase: Phase::InProgress,
        })
    }

    /// Tries the candidate at `index`. A wrong word consumes one attempt; a
    /// repeat of an already-tried word consumes nothing and errors instead.
    /// The right word unlocks the puzzle, and running out of attempts locks
    /// it out.
    #[allowed_phase(InProgress)]
    pub fn guess(&mut self, index: usize) -> Result<Guess, Error> {
        if index >= self.words.len() {
            return Err(Error::UnknownWord(index));
        }
        if self.tried[index] {
            return Err(Error::AlreadyTried);
        }
        self.tried[index] = true;
        self.attempts_used += 1;

        let correct = index == self.secret;
        let entry = Guess {
            word: self.words[index].clone(),
            likeness: likeness(&self.words[index], &self.words[self.secret]),
            attempt: self.attempts_used,
            correct,
        };
        self.history.push(entry.clone());

        if correct {
            self.phase = Phase::Unlocked;
        } else if self.attempts_used >= self.allowed_attempts {
            debug!("attempt budget spent, locking out");
            self.phase = Phase::LockedOut;
        }
        Ok(entry)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All candidate words in display order. The renderer decides how to
    /// dress them up.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The secret word. Always exposed; whether to reveal it is the
    /// renderer's call.
    pub fn secret_word(&self) -> &str {
        &self.words[self.secret]
    }

    pub fn is_tried(&self, index: usize) -> bool {
        self.tried.get(index).copied().unwrap_or(false)
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    pub fn allowed_attempts(&self) -> u32 {
        self.allowed_attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.allowed_attempts.saturating_sub(self.attempts_used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word_source() -> Vec<String> {
        [
            "PASSWORD", "OVERRIDE", "TERMINAL", "FIREWALL", "PROTOCOL", "DATABASE",
            "SOFTWARE", "HARDWARE", "SECURITY", "OVERRULE",
        ]
        .iter()
        .map(|word| word.to_string())
        .collect()
    }

    fn puzzle(seed: u64) -> Puzzle {
        let mut rng = StdRng::seed_from_u64(seed);
        Puzzle::generate(&word_source(), 4, 6, 4, &mut rng).unwrap()
    }

    #[test]
    fn likeness_counts_matching_positions() {
        assert_eq!(likeness("OVERRIDE", "OVERRULE"), 6);
        assert_eq!(likeness("PASSWORD", "PASSWORD"), 8);
        assert_eq!(likeness("ABC", "XYZ"), 0);
    }

    #[test]
    fn likeness_stops_at_the_shorter_word() {
        assert_eq!(likeness("CREDENTIAL", "CREDENT"), 7);
    }

    #[test]
    fn generate_respects_the_candidate_range() {
        for seed in 0..20 {
            let puzzle = puzzle(seed);
            assert!(puzzle.words().len() >= 4 && puzzle.words().len() <= 6);
            assert!(puzzle.words().contains(&puzzle.secret_word().to_string()));
        }
    }

    #[test]
    fn generate_never_repeats_a_candidate() {
        for seed in 0..20 {
            let puzzle = puzzle(seed);
            let mut words = puzzle.words().to_vec();
            words.sort();
            words.dedup();
            assert_eq!(words.len(), puzzle.words().len());
        }
    }

    #[test]
    fn generate_caps_candidates_at_the_source_size() {
        let source: Vec<String> = vec!["ALPHA".into(), "BRAVO".into()];
        let mut rng = StdRng::seed_from_u64(0);
        let puzzle = Puzzle::generate(&source, 16, 26, 4, &mut rng).unwrap();
        assert_eq!(puzzle.words().len(), 2);
    }

    #[test]
    fn generate_rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Puzzle::generate(&[], 4, 6, 4, &mut rng).unwrap_err(),
            Error::NoWords
        );
        assert_eq!(
            Puzzle::generate(&word_source(), 6, 4, 4, &mut rng).unwrap_err(),
            Error::EmptyCandidateRange(6, 4)
        );
    }

    #[test]
    fn correct_guess_unlocks() {
        let mut puzzle = puzzle(1);
        let secret_index = puzzle
            .words()
            .iter()
            .position(|word| word.as_str() == puzzle.secret_word())
            .unwrap();
        let guess = puzzle.guess(secret_index).unwrap();
        assert!(guess.correct);
        assert_eq!(guess.likeness, puzzle.secret_word().chars().count());
        assert_eq!(puzzle.phase(), Phase::Unlocked);
    }

    #[test]
    fn wrong_guesses_spend_the_budget_and_lock_out() {
        // Six candidates leave at least four wrong words for the budget.
        let mut rng = StdRng::seed_from_u64(2);
        let mut puzzle = Puzzle::generate(&word_source(), 6, 6, 4, &mut rng).unwrap();
        let secret_index = puzzle
            .words()
            .iter()
            .position(|word| word.as_str() == puzzle.secret_word())
            .unwrap();
        let mut wrong = (0..puzzle.words().len()).filter(|&index| index != secret_index);
        for attempt in 1..=puzzle.allowed_attempts() {
            let index = wrong.next().unwrap();
            let guess = puzzle.guess(index).unwrap();
            assert!(!guess.correct);
            assert_eq!(guess.attempt, attempt);
        }
        assert_eq!(puzzle.phase(), Phase::LockedOut);
        assert_eq!(puzzle.attempts_remaining(), 0);
        assert_eq!(puzzle.history().len(), 4);
    }

    #[test]
    fn repeating_a_guess_costs_nothing() {
        let mut puzzle = puzzle(3);
        let secret_index = puzzle
            .words()
            .iter()
            .position(|word| word.as_str() == puzzle.secret_word())
            .unwrap();
        let index = (0..puzzle.words().len()).find(|&i| i != secret_index).unwrap();
        puzzle.guess(index).unwrap();
        let remaining = puzzle.attempts_remaining();
        assert_eq!(puzzle.guess(index).unwrap_err(), Error::AlreadyTried);
        assert_eq!(puzzle.attempts_remaining(), remaining);
        assert!(puzzle.is_tried(index));
    }

    #[test]
    fn guessing_a_settled_puzzle_is_an_invalid_phase() {
        let mut puzzle = puzzle(4);
        let secret_index = puzzle
            .words()
            .iter()
            .position(|word| word.as_str() == puzzle.secret_word())
            .unwrap();
        puzzle.guess(secret_index).unwrap();
        let err = puzzle.guess(0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPhase {
                expected: Phase::InProgress,
                actual: Phase::Unlocked,
            }
        );
    }

    #[test]
    fn out_of_range_guess_is_rejected() {
        let mut puzzle = puzzle(5);
        let count = puzzle.words().len();
        assert_eq!(puzzle.guess(count).unwrap_err(), Error::UnknownWord(count));
        assert_eq!(puzzle.attempts_remaining(), puzzle.allowed_attempts());
    }
}
