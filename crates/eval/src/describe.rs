// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand search and description.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use shortstack_cards::{Card, ParseError, parse_cards};

use crate::{HandCategory, LowHand, Selection, Variant, combinations};

/// The best high hand found for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighHand {
    category: HandCategory,
    cards: [Card; 5],
}

impl HighHand {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards that make this hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

/// The description of a player's best hands.
///
/// The description displays as the label shown next to a player's seat, for
/// example `Full House` or `Straight & 7-low`, an empty description displays
/// as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandDescription {
    high: Option<HighHand>,
    low: Option<LowHand>,
}

impl HandDescription {
    /// The best high hand, if the cards make a five cards hand.
    pub fn high(&self) -> Option<&HighHand> {
        self.high.as_ref()
    }

    /// The best qualifying low hand for hi/lo variants.
    pub fn low(&self) -> Option<&LowHand> {
        self.low.as_ref()
    }

    /// Checks if no hand was found.
    pub fn is_empty(&self) -> bool {
        self.high.is_none() && self.low.is_none()
    }

    /// The description label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(high) = &self.high {
            write!(f, "{}", high.category)?;
        }

        if let Some(low) = &self.low {
            write!(f, " & {low}")?;
        }

        Ok(())
    }
}

impl Variant {
    /// Finds the best high hand, and low hand for hi/lo variants, a player can
    /// make with the given hole and board cards.
    ///
    /// Only complete five cards hands are evaluated, the description is empty
    /// if the cards can't make one (for example before the flop).
    pub fn evaluate(&self, hole_cards: &[Card], board_cards: &[Card]) -> HandDescription {
        let mut desc = HandDescription::default();
        if hole_cards.is_empty() {
            return desc;
        }

        // Sort the cards so that ties resolve the same for any input order.
        let mut hole = hole_cards.to_vec();
        hole.sort_unstable();
        let mut board = board_cards.to_vec();
        board.sort_unstable();

        match self.selection {
            Selection::AnyFive => {
                let cards = [hole, board].concat();
                for hand in combinations(&cards, 5) {
                    self.update(&mut desc, hand);
                }
            }
            Selection::TwoPlusThree => {
                let board_size = board.len().min(3);
                for hole_pair in combinations(&hole, 2) {
                    for board_part in combinations(&board, board_size) {
                        self.update(&mut desc, [hole_pair.as_slice(), board_part.as_slice()].concat());
                    }
                }
            }
        }

        desc
    }

    /// Updates the description if the hand improves the high or low hand.
    fn update(&self, desc: &mut HandDescription, cards: Vec<Card>) {
        let Ok(hand) = <[Card; 5]>::try_from(cards) else {
            return;
        };

        let category = self.rules.classify(&hand);
        let strength = self.rules.strength(category);
        if desc
            .high
            .is_none_or(|best| strength > self.rules.strength(best.category))
        {
            desc.high = Some(HighHand {
                category,
                cards: hand,
            });
        }

        if self.hi_lo {
            if let Some(low) = LowHand::eval(&hand) {
                if desc.low.is_none_or(|best| low.value() < best.value()) {
                    desc.low = Some(low);
                }
            }
        }
    }
}

/// Describes the best hand a player can make in a game variant.
///
/// The `variant` code is resolved with [Variant::from_code], the cards are
/// tokens like `Ah`, `Td`, or `10d`. An empty `hole_cards` returns an empty
/// description without parsing any card, otherwise any invalid token fails
/// the call.
///
/// ```
/// # use shortstack_eval::describe;
/// let desc = describe("PLO8", &["Ah", "2c", "Kd", "Kh"], &["3d", "4s", "5h", "Qc", "9d"]);
/// assert_eq!(desc.unwrap().to_string(), "Straight & 5-low");
///
/// let desc = describe("NLH", &["Ah", "Ad"], &["Ac", "Kd", "Kh"]);
/// assert_eq!(desc.unwrap().to_string(), "Full House");
///
/// assert!(describe("NLH", &["Ah", "Zz"], &[""]).is_err());
/// ```
pub fn describe<H, B>(
    variant: &str,
    hole_cards: &[H],
    board_cards: &[B],
) -> Result<HandDescription, ParseError>
where
    H: AsRef<str>,
    B: AsRef<str>,
{
    if hole_cards.is_empty() {
        return Ok(HandDescription::default());
    }

    let hole = parse_cards(hole_cards)?;
    let board = parse_cards(board_cards)?;
    let variant = Variant::from_code(variant);

    let desc = variant.evaluate(&hole, &board);
    trace!("{variant:?} hole={hole:?} board={board:?} => '{desc}'");

    Ok(desc)
}
