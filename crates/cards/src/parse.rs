// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card tokens parsing.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when a card token cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token is empty.
    #[error("Empty card token")]
    Empty,
    /// The token is not a rank followed by a suit.
    #[error("Invalid card token '{0}': expected a rank and a suit (e.g. 'Ah', '10d')")]
    InvalidLength(String),
    /// The rank character is not one of `23456789TJQKA`.
    #[error("Unknown rank '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of `hdcs`.
    #[error("Unknown suit '{0}'")]
    InvalidSuit(char),
}

impl TryFrom<char> for Rank {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Deuce),
            '3' => Ok(Rank::Trey),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            // First digit of a "10" token.
            '1' | 'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(ParseError::InvalidRank(c)),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(ParseError::InvalidSuit(c)),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.as_str()) {
            (None, _) => Err(ParseError::Empty),
            (Some('1'), "0") => Ok(Rank::Ten),
            (Some(c), "") => Rank::try_from(c),
            _ => Err(ParseError::InvalidLength(s.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ParseError::Empty),
            (Some(c), None) => Suit::try_from(c),
            _ => Err(ParseError::InvalidLength(s.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        let (rank, suit) = match chars.as_slice() {
            [] => return Err(ParseError::Empty),
            [rank, suit] => (*rank, *suit),
            ['1', '0', suit] => ('1', *suit),
            _ => return Err(ParseError::InvalidLength(s.to_string())),
        };

        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

/// Parses a sequence of card tokens, failing on the first invalid token.
///
/// ```
/// # use shortstack_cards::{parse_cards, ParseError};
/// let cards = parse_cards(&["Ah", "10d", "9c"]).unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(parse_cards(&["Ah", "Zz"]), Err(ParseError::InvalidRank('Z')));
/// ```
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ParseError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
