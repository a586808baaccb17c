// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Eight-or-better low hands.
use serde::{Deserialize, Serialize};
use std::fmt;

use shortstack_cards::{Card, Rank};

use crate::Tally;

/// Number of distinct low ranks a low hand needs.
const LOW_HAND_SIZE: usize = 5;

/// A qualifying eight-or-better low hand.
///
/// Low hands are compared by their top rank only, two lows with the same top
/// rank are equal even if they differ in the lower ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LowHand {
    top: Rank,
    cards: [Card; 5],
}

impl LowHand {
    /// Evaluates a five cards hand as a low hand.
    pub fn eval(cards: &[Card; 5]) -> Option<Self> {
        find_low(cards).map(|top| Self { top, cards: *cards })
    }

    /// The highest rank of this low hand.
    pub fn top(&self) -> Rank {
        self.top
    }

    /// The cards that make this low hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The low value of this hand, a lower value is a better low.
    pub fn value(&self) -> u8 {
        low_value(self.top)
    }
}

impl fmt::Display for LowHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-low", self.top)
    }
}

/// Finds the top rank of an eight-or-better low in a set of cards.
///
/// Returns `None` if the cards have fewer than five distinct ranks from the
/// ace (playing low) to the eight.
pub fn find_low(cards: &[Card]) -> Option<Rank> {
    let lows = Tally::new(cards)
        .ranks()
        .into_iter()
        .filter(|&r| is_low(r))
        .collect::<Vec<_>>();

    if lows.len() < LOW_HAND_SIZE {
        return None;
    }

    lows.into_iter().max_by_key(|&r| low_value(r))
}

/// Checks if a rank can play in a low hand.
fn is_low(rank: Rank) -> bool {
    rank == Rank::Ace || rank <= Rank::Eight
}

/// Rank value with the ace below the deuce.
fn low_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 1,
        r => r.value() + 2,
    }
}
