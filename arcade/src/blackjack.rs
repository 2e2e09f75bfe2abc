//! The blackjack round engine: one deck, two hands, and the turn state
//! machine between them.
//!
//! A [`Round`] is the whole aggregate. It is created by one of the `start`
//! constructors, mutated through [`Round::apply`] and
//! [`Round::advance_dealer`], and becomes immutable once settled. Rendering,
//! pacing and sound live outside: callers read the full round state after
//! every operation and decide what to show. In particular the dealer's hole
//! card is always exposed here; hiding it until the dealer acts is a
//! renderer decision based on [`Round::phase`].

pub mod deck;
pub mod hand;

use arcade_macros::allowed_phase;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;
use thiserror::Error;

pub use self::deck::Deck;
pub use self::hand::Hand;

static FACE_VALUE_TO_BLACKJACK_VALUE: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// A hand score above this is a bust.
pub const BUST_THRESHOLD: u8 = 21;
/// The dealer draws below this score and stands at or above it.
pub const DEALER_STAND_SCORE: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

/// A card in the real world with a suit and a face value (1 for the ace up
/// to 13 for the king). Cards have no identity beyond value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub face_value: u8,
    pub suit: Suit,
}

impl Card {
    /// The card's counting value: face cards count 10, the ace counts 1.
    /// The upgrade of one ace to 11 happens in [`Hand::score`].
    pub fn blackjack_value(&self) -> u8 {
        FACE_VALUE_TO_BLACKJACK_VALUE[(self.face_value - 1) as usize]
    }

    pub fn is_ace(&self) -> bool {
        self.face_value == 1
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.face_value {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => panic!("Invalid card face value!"),
        };
        let suit = match self.suit {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        };
        write!(f, "{}{}", value, suit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerActing,
    DealerActing,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Hit,
    Stand,
}

/// What the dealer does when holding a soft 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Soft17 {
    Stand,
    Hit,
}

impl Default for Soft17 {
    fn default() -> Self {
        Soft17::Stand
    }
}

/// Table rules. By default the dealer stands on every 17, hard or soft.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rule {
    pub soft17: Soft17,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("operation is only allowed in the {expected:?} phase, but the round is {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },

    #[error("the deck has no cards left to draw")]
    DeckExhausted,
}

/// One externally observable step of the dealer's turn. The caller keeps
/// calling [`Round::advance_dealer`] until it reports `Settled`, and may
/// re-render or wait between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    Drew(Card),
    Settled(Outcome),
}

/// A single round of blackjack. Exactly one round is live at a time from the
/// caller's point of view; starting a new one discards the old value.
#[derive(Debug, Clone)]
pub struct Round {
    rule: Rule,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl Round {
    /// Starts a round under default rules with a freshly shuffled deck.
    pub fn start() -> Round {
        Self::start_with_rule(Rule::default())
    }

    pub fn start_with_rule(rule: Rule) -> Round {
        Self::start_with_deck(rule, Deck::shuffled(&mut rand::thread_rng()))
            .expect("a fresh deck always covers the opening deal")
    }

    /// Starts a round whose shuffle is fully determined by `seed`.
    pub fn start_seeded(rule: Rule, seed: u64) -> Round {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::start_with_deck(rule, Deck::shuffled(&mut rng))
            .expect("a fresh deck always covers the opening deal")
    }

    /// Starts a round from an explicit deck. This is the only fallible way
    /// in: a deck shorter than the opening deal reports `DeckExhausted`.
    pub fn start_with_deck(rule: Rule, mut deck: Deck) -> Result<Round, Error> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.receive_card(deck.draw().ok_or(Error::DeckExhausted)?);
        }
        for _ in 0..2 {
            dealer.receive_card(deck.draw().ok_or(Error::DeckExhausted)?);
        }
        debug!(
            "round starts: player {} vs dealer {}",
            player.score(),
            dealer.score()
        );
        Ok(Round {
            rule,
            deck,
            player,
            dealer,
            phase: Phase::PlayerActing,
            outcome: None,
        })
    }

    /// Applies one player decision. A busting hit settles the round on the
    /// spot; a stand passes the turn to the dealer.
    #[allowed_phase(PlayerActing)]
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), Error> {
        match action {
            PlayerAction::Hit => {
                let card = self.deck.draw().ok_or(Error::DeckExhausted)?;
                self.player.receive_card(card);
                debug!("player draws {} for {}", card, self.player.score());
                if self.player.is_bust() {
                    self.settle(Outcome::DealerWin);
                }
            }
            PlayerAction::Stand => {
                debug!("player stands on {}", self.player.score());
                self.phase = Phase::DealerActing;
            }
        }
        Ok(())
    }

    /// Plays one step of the dealer's turn: either draws a single card and
    /// stays in `DealerActing`, or stands and settles the round. An empty
    /// deck forces a stand on whatever the dealer holds.
    #[allowed_phase(DealerActing)]
    pub fn advance_dealer(&mut self) -> Result<DealerStep, Error> {
        if self.dealer_must_draw() {
            if let Some(card) = self.deck.draw() {
                self.dealer.receive_card(card);
                debug!("dealer draws {} for {}", card, self.dealer.score());
                return Ok(DealerStep::Drew(card));
            }
        }
        let outcome = self.resolve_outcome();
        self.settle(outcome);
        Ok(DealerStep::Settled(outcome))
    }

    fn dealer_must_draw(&self) -> bool {
        let score = self.dealer.score();
        if score < DEALER_STAND_SCORE {
            return true;
        }
        score == DEALER_STAND_SCORE && self.dealer.is_soft() && self.rule.soft17 == Soft17::Hit
    }

    fn resolve_outcome(&self) -> Outcome {
        let dealer_score = self.dealer.score();
        let player_score = self.player.score();
        if self.dealer.is_bust() {
            Outcome::PlayerWin
        } else if player_score == dealer_score {
            Outcome::Push
        } else if player_score > dealer_score {
            Outcome::PlayerWin
        } else {
            Outcome::DealerWin
        }
    }

    fn settle(&mut self, outcome: Outcome) {
        self.phase = Phase::Settled;
        self.outcome = Some(outcome);
        debug!("round settled: {}", outcome);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The settled outcome; `None` until the round reaches `Settled`.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
