use super::{Card, BUST_THRESHOLD};

/// An ordered sequence of cards held by one side of the table.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(8),
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand's score, recomputed from the cards on every call. Aces count
    /// 1 in the base sum and a single ace is upgraded to 11 while the total
    /// stays at or under 21 (two aces at 11 would always bust, so upgrading
    /// more than one is never possible). Independent of card order.
    pub fn score(&self) -> u8 {
        let sum = self.base_sum();
        if self.holds_ace() && sum + 10 <= BUST_THRESHOLD {
            sum + 10
        } else {
            sum
        }
    }

    /// Whether an ace is currently counted as 11.
    pub fn is_soft(&self) -> bool {
        self.holds_ace() && self.base_sum() + 10 <= BUST_THRESHOLD
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BUST_THRESHOLD
    }

    fn base_sum(&self) -> u8 {
        self.cards.iter().map(|card| card.blackjack_value()).sum()
    }

    fn holds_ace(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::Suit;

    fn hand_of(face_values: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &face_value in face_values {
            hand.receive_card(Card {
                face_value,
                suit: Suit::Club,
            });
        }
        hand
    }

    #[test]
    fn two_aces_score_twelve() {
        assert_eq!(hand_of(&[1, 1]).score(), 12);
    }

    #[test]
    fn ace_and_king_score_twenty_one() {
        let hand = hand_of(&[1, 13]);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_soft());
    }

    #[test]
    fn busted_hand_with_no_aces_keeps_its_sum() {
        let hand = hand_of(&[10, 9, 5]);
        assert_eq!(hand.score(), 24);
        assert!(hand.is_bust());
        assert!(!hand.is_soft());
    }

    #[test]
    fn ace_drops_to_one_when_eleven_would_bust() {
        let hand = hand_of(&[1, 9, 5]);
        assert_eq!(hand.score(), 15);
        assert!(!hand.is_soft());
    }

    #[test]
    fn score_ignores_card_order() {
        assert_eq!(hand_of(&[1, 9, 5]).score(), hand_of(&[5, 1, 9]).score());
        assert_eq!(hand_of(&[11, 12, 2]).score(), hand_of(&[2, 11, 12]).score());
    }

    #[test]
    fn score_is_idempotent() {
        let hand = hand_of(&[1, 6]);
        assert_eq!(hand.score(), 17);
        assert_eq!(hand.score(), 17);
        assert_eq!(hand.cards().len(), 2);
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand_of(&[11, 12, 13]).score(), 30);
    }
}
