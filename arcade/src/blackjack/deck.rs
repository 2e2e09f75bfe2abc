use super::{Card, Suit};

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::Rng;

/// A single 52-card deck, consumed from the top for the length of one round.
/// It shrinks monotonically and is never refilled; a new round builds a new
/// deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    fn full() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for face_value in 1..=13 {
                cards.push(Card { face_value, suit });
            }
        }
        cards
    }

    /// Creates a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut cards = Self::full();
        cards.shuffle(rng);
        Deck { cards, next: 0 }
    }

    /// Creates a deck whose first draws yield cards with the given face
    /// values (1 stands for the ace, 11..=13 for J, Q, K) in order; the rest
    /// of the deck is shuffled. Panics if `firsts` asks for more copies of a
    /// face value than a deck holds.
    pub fn stacked<R: Rng + ?Sized>(firsts: &[u8], rng: &mut R) -> Deck {
        let mut pool = Self::full();
        let mut cards = Vec::with_capacity(52);
        for &face_value in firsts {
            let index = pool
                .iter()
                .position(|card| card.face_value == face_value)
                .expect("The given first cards are invalid");
            cards.push(pool.swap_remove(index));
        }
        pool.shuffle(rng);
        cards.extend(pool);
        Deck { cards, next: 0 }
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards, next: 0 }
    }

    /// Deals the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        if self.next == self.cards.len() {
            None
        } else {
            let card = self.cards[self.next];
            self.next += 1;
            Some(card)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}
