// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straights detection.
use shortstack_cards::Rank;

use crate::Rules;

/// The short deck wheel `A 6 7 8 9` as a ranks bitmask.
const SHORT_DECK_WHEEL: u16 = 0b_1000011110000;

/// Checks if five consecutive ranks are present.
///
/// The `ranks` must be distinct and sorted in ascending order. An ace also
/// plays below the deuce for the `A 2 3 4 5` wheel, with [Rules::ShortDeck]
/// the `A 6 7 8 9` wheel is a straight too.
pub fn is_straight(ranks: &[Rank], rules: Rules) -> bool {
    let mut values = Vec::with_capacity(ranks.len() + 1);
    if ranks.contains(&Rank::Ace) {
        values.push(-1);
    }
    values.extend(ranks.iter().map(|r| r.value() as i8));

    let mut consecutive = 1;
    for w in values.windows(2) {
        if w[1] == w[0] + 1 {
            consecutive += 1;
            if consecutive >= 5 {
                return true;
            }
        } else {
            consecutive = 1;
        }
    }

    match rules {
        Rules::Standard => false,
        Rules::ShortDeck => {
            let mask = ranks.iter().fold(0u16, |m, r| m | (1 << r.value()));
            (mask & SHORT_DECK_WHEEL) == SHORT_DECK_WHEEL
        }
    }
}
