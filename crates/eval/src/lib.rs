// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shortstack Poker hand description engine.
//!
//! Given a player's hole cards, the board cards, and a game variant code this
//! crate finds the best high hand category the player can make, and the best
//! eight-or-better low hand for hi/lo variants, following the variant card
//! usage rules (any five cards for Hold'em, exactly two hole cards and three
//! board cards for Omaha) and ranking rules (standard or short deck).
//!
//! Use [describe] to get the label shown next to a player's seat:
//!
//! ```
//! # use shortstack_eval::*;
//! let desc = describe("NLH", &["Ah", "Kh"], &["Qh", "Jh", "2c", "2d", "Th"]).unwrap();
//! assert_eq!(desc.to_string(), "Straight Flush");
//!
//! // Omaha must use exactly two hole cards.
//! let desc = describe("PLO", &["Ah", "Kc", "2d", "3s"], &["Qh", "Jh", "Th", "9h", "2h"]).unwrap();
//! assert_eq!(desc.to_string(), "Straight");
//! ```
//!
//! or [Variant::evaluate] if the cards are already parsed:
//!
//! ```
//! # use shortstack_eval::*;
//! let hole = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Six, Suit::Hearts)];
//! let board = parse_cards(&["7d", "8c", "9s"]).unwrap();
//! let desc = Variant::SHORT_DECK.evaluate(&hole, &board);
//! assert_eq!(desc.high().unwrap().category(), HandCategory::Straight);
//! ```
//!
//! The evaluation is a pure function of its inputs and safe to call from any
//! thread.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combinations;
pub use combinations::{Combinations, combinations, nck};

mod describe;
pub use describe::{HandDescription, HighHand, describe};

mod low;
pub use low::{LowHand, find_low};

mod rules;
pub use rules::{HandCategory, Rules};

mod straight;
pub use straight::is_straight;

mod tally;
pub use tally::Tally;

mod variant;
pub use variant::{Selection, Variant};

// Reexport cards types.
pub use shortstack_cards::{Card, Deck, ParseError, Rank, Suit, parse_cards};
