// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit occurrences of a set of cards.
use shortstack_cards::{Card, Rank, Suit};

/// Rank and suit counts for a set of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
}

impl Tally {
    /// Counts ranks and suits of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut tally = Self::default();
        for card in cards {
            tally.ranks[card.rank() as usize] += 1;
            tally.suits[card.suit() as usize] += 1;
        }
        tally
    }

    /// Number of cards with the given rank.
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.ranks[rank as usize]
    }

    /// Number of cards with the given suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suits[suit as usize]
    }

    /// Non zero rank counts sorted in descending order, `[3, 2]` for a full house.
    pub fn rank_counts(&self) -> Vec<u8> {
        let mut counts = self
            .ranks
            .iter()
            .copied()
            .filter(|&n| n > 0)
            .collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    /// The largest number of cards sharing a suit.
    pub fn max_suit_count(&self) -> u8 {
        self.suits.iter().copied().max().unwrap_or(0)
    }

    /// Distinct ranks in ascending order.
    pub fn ranks(&self) -> Vec<Rank> {
        Rank::ranks().filter(|&r| self.rank_count(r) > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortstack_cards::parse_cards;

    fn tally(tokens: &[&str]) -> Tally {
        Tally::new(&parse_cards(tokens).unwrap())
    }

    #[test]
    fn full_house_counts() {
        let t = tally(&["Ah", "Ad", "Ac", "Kd", "Ks"]);
        assert_eq!(t.rank_counts(), vec![3, 2]);
        assert_eq!(t.rank_count(Rank::Ace), 3);
        assert_eq!(t.rank_count(Rank::King), 2);
        assert_eq!(t.rank_count(Rank::Queen), 0);
        assert_eq!(t.ranks(), vec![Rank::King, Rank::Ace]);
        assert_eq!(t.max_suit_count(), 2);
    }

    #[test]
    fn suit_counts() {
        let t = tally(&["2h", "7h", "9h", "Jh", "Kh", "Ac", "3d"]);
        assert_eq!(t.suit_count(Suit::Hearts), 5);
        assert_eq!(t.suit_count(Suit::Clubs), 1);
        assert_eq!(t.suit_count(Suit::Spades), 0);
        assert_eq!(t.max_suit_count(), 5);
        assert_eq!(t.rank_counts(), vec![1; 7]);
    }

    #[test]
    fn duplicates_are_counted() {
        let t = tally(&["Ah", "Ah", "2c"]);
        assert_eq!(t.rank_counts(), vec![2, 1]);
        assert_eq!(t.ranks(), vec![Rank::Deuce, Rank::Ace]);
    }

    #[test]
    fn empty_tally() {
        let t = Tally::new(&[]);
        assert!(t.rank_counts().is_empty());
        assert!(t.ranks().is_empty());
        assert_eq!(t.max_suit_count(), 0);
    }
}
