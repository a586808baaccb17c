// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the rules that rank them.
use serde::{Deserialize, Serialize};
use std::fmt;

use shortstack_cards::Card;

use crate::{Tally, straight::is_straight};

/// A poker hand category.
///
/// The declaration order is the standard ranking, use [Rules::strength] to
/// compare categories under a given ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories in standard ranking order.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category display label.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ranking rules for high hands.
///
/// With a short deck (deuces to fives removed) a full house is more common
/// than a flush, so the flush ranks higher, and `A 6 7 8 9` plays as the
/// lowest straight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rules {
    /// Standard 52 cards deck ranking.
    #[default]
    Standard,
    /// Short deck (6+) ranking.
    ShortDeck,
}

impl Rules {
    /// Classifies a five cards hand.
    ///
    /// ```
    /// # use shortstack_cards::parse_cards;
    /// # use shortstack_eval::{HandCategory, Rules};
    /// let cards = parse_cards(&["Ah", "Kh", "Qh", "Jh", "Th"]).unwrap();
    /// let hand: [_; 5] = cards.try_into().unwrap();
    /// assert_eq!(Rules::Standard.classify(&hand), HandCategory::StraightFlush);
    /// ```
    pub fn classify(&self, hand: &[Card; 5]) -> HandCategory {
        let tally = Tally::new(hand);
        let counts = tally.rank_counts();
        let (first, second) = (counts[0], counts.get(1).copied().unwrap_or(0));

        let is_flush = tally.max_suit_count() >= 5;
        let is_straight = is_straight(&tally.ranks(), *self);
        let is_full_house = first == 3 && second >= 2;

        if is_flush && is_straight {
            return HandCategory::StraightFlush;
        }

        if first == 4 {
            return HandCategory::FourOfAKind;
        }

        match self {
            Rules::ShortDeck => {
                if is_flush {
                    return HandCategory::Flush;
                }
                if is_full_house {
                    return HandCategory::FullHouse;
                }
            }
            Rules::Standard => {
                if is_full_house {
                    return HandCategory::FullHouse;
                }
                if is_flush {
                    return HandCategory::Flush;
                }
            }
        }

        if is_straight {
            HandCategory::Straight
        } else if first == 3 {
            HandCategory::ThreeOfAKind
        } else if first == 2 && second == 2 {
            HandCategory::TwoPair
        } else if first == 2 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// The category strength under these rules, higher is better.
    pub fn strength(&self, category: HandCategory) -> u8 {
        match (self, category) {
            (Rules::ShortDeck, HandCategory::FullHouse) => HandCategory::Flush as u8,
            (Rules::ShortDeck, HandCategory::Flush) => HandCategory::FullHouse as u8,
            (_, category) => category as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortstack_cards::{Deck, parse_cards};

    fn classify(rules: Rules, tokens: [&str; 5]) -> HandCategory {
        let cards = parse_cards(&tokens).unwrap();
        rules.classify(&cards.try_into().unwrap())
    }

    #[test]
    fn standard_categories() {
        use HandCategory::*;

        let r = Rules::Standard;
        assert_eq!(classify(r, ["As", "Kh", "Qd", "Jc", "9s"]), HighCard);
        assert_eq!(classify(r, ["As", "Ah", "Kd", "Qc", "Js"]), OnePair);
        assert_eq!(classify(r, ["As", "Ah", "Kd", "Kc", "Qs"]), TwoPair);
        assert_eq!(classify(r, ["As", "Ah", "Ad", "Kc", "Qs"]), ThreeOfAKind);
        assert_eq!(classify(r, ["Ts", "Jh", "Qd", "Kc", "As"]), Straight);
        assert_eq!(classify(r, ["As", "Ks", "Qs", "Js", "9s"]), Flush);
        assert_eq!(classify(r, ["2s", "2h", "2d", "3c", "3s"]), FullHouse);
        assert_eq!(classify(r, ["As", "Ah", "Ad", "Ac", "Ks"]), FourOfAKind);
        assert_eq!(classify(r, ["Ts", "Js", "Qs", "Ks", "As"]), StraightFlush);
    }

    #[test]
    fn wheel_straight() {
        let r = Rules::Standard;
        assert_eq!(
            classify(r, ["As", "2h", "3d", "4c", "5s"]),
            HandCategory::Straight
        );
        assert_eq!(
            classify(r, ["As", "2s", "3s", "4s", "5s"]),
            HandCategory::StraightFlush
        );
    }

    #[test]
    fn short_deck_wheel() {
        assert_eq!(
            classify(Rules::ShortDeck, ["As", "6h", "7d", "8c", "9s"]),
            HandCategory::Straight
        );
        assert_eq!(
            classify(Rules::ShortDeck, ["As", "6s", "7s", "8s", "9s"]),
            HandCategory::StraightFlush
        );
    }

    #[test]
    fn four_of_a_kind_ignores_kicker() {
        for kicker in ["2c", "Kd", "Th", "7s"] {
            assert_eq!(
                classify(Rules::Standard, ["9s", "9h", "9d", "9c", kicker]),
                HandCategory::FourOfAKind
            );
            assert_eq!(
                classify(Rules::ShortDeck, ["9s", "9h", "9d", "9c", kicker]),
                HandCategory::FourOfAKind
            );
        }
    }

    #[test]
    fn flush_and_full_house_order() {
        // Only possible with repeated cards.
        let hand = ["Ks", "Ks", "Ks", "9s", "9s"];
        assert_eq!(classify(Rules::Standard, hand), HandCategory::FullHouse);
        assert_eq!(classify(Rules::ShortDeck, hand), HandCategory::Flush);

        assert!(
            Rules::Standard.strength(HandCategory::FullHouse)
                > Rules::Standard.strength(HandCategory::Flush)
        );
        assert!(
            Rules::ShortDeck.strength(HandCategory::Flush)
                > Rules::ShortDeck.strength(HandCategory::FullHouse)
        );

        assert_eq!(
            classify(Rules::ShortDeck, ["6s", "8s", "Ts", "Qs", "As"]),
            HandCategory::Flush
        );
        assert_eq!(
            classify(Rules::ShortDeck, ["6s", "6h", "6d", "Ac", "As"]),
            HandCategory::FullHouse
        );
    }

    #[test]
    fn strengths_are_a_permutation() {
        for rules in [Rules::Standard, Rules::ShortDeck] {
            let mut strengths = HandCategory::categories()
                .map(|c| rules.strength(c))
                .collect::<Vec<_>>();
            strengths.sort_unstable();
            assert_eq!(strengths, (0..9).collect::<Vec<u8>>());
        }

        for category in HandCategory::categories() {
            if !matches!(category, HandCategory::Flush | HandCategory::FullHouse) {
                assert_eq!(
                    Rules::Standard.strength(category),
                    Rules::ShortDeck.strength(category)
                );
            }
        }
    }

    #[test]
    fn labels() {
        let labels = HandCategory::categories()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "High Card",
                "One Pair",
                "Two Pair",
                "Three of a Kind",
                "Straight",
                "Flush",
                "Full House",
                "Four of a Kind",
                "Straight Flush",
            ]
        );
    }

    fn distribution(deck: Deck, rules: Rules) -> [usize; 9] {
        let mut counts = [0usize; 9];
        deck.for_each(5, |cards| {
            let hand: &[Card; 5] = cards.try_into().unwrap();
            counts[rules.classify(hand) as usize] += 1;
        });
        counts
    }

    #[test]
    fn standard_deck_distribution() {
        let counts = distribution(Deck::default(), Rules::Standard);
        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );
    }

    #[test]
    fn short_deck_distribution() {
        let counts = distribution(Deck::short(), Rules::ShortDeck);
        assert_eq!(
            counts,
            [122_400, 193_536, 36_288, 16_128, 6_120, 480, 1_728, 288, 24]
        );
        assert_eq!(counts.iter().sum::<usize>(), 376_992);
    }
}
