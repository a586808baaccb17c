// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game variants card usage and ranking rules.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::Rules;

/// Codes of free choice variants without any other flag.
const FREE_CHOICE_CODES: [&str; 7] = ["NLH", "LHE", "FLH", "HOLDEM", "STUD", "DRAW", "PINEAPPLE"];

/// How a five cards hand is selected from the hole and board cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Any five cards from the hole and board cards (Hold'em, Stud, Draw).
    #[default]
    AnyFive,
    /// Exactly two hole cards and three board cards (Omaha).
    TwoPlusThree,
}

/// A game variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// How hands are selected.
    pub selection: Selection,
    /// The high hands ranking rules.
    pub rules: Rules,
    /// Whether an eight-or-better low hand splits the pot.
    pub hi_lo: bool,
}

impl Variant {
    /// No Limit Hold'em and other free choice variants.
    pub const HOLDEM: Variant = Variant {
        selection: Selection::AnyFive,
        rules: Rules::Standard,
        hi_lo: false,
    };

    /// Pot Limit Omaha.
    pub const OMAHA: Variant = Variant {
        selection: Selection::TwoPlusThree,
        rules: Rules::Standard,
        hi_lo: false,
    };

    /// Pot Limit Omaha Hi/Lo eight-or-better.
    pub const OMAHA_HI_LO: Variant = Variant {
        selection: Selection::TwoPlusThree,
        rules: Rules::Standard,
        hi_lo: true,
    };

    /// Short deck (6+) Hold'em.
    pub const SHORT_DECK: Variant = Variant {
        selection: Selection::AnyFive,
        rules: Rules::ShortDeck,
        hi_lo: false,
    };

    /// Resolves a variant code like `NLH`, `PLO`, `PLO8`, or `SHORT`.
    ///
    /// Codes containing `PLO` use the Omaha selection, codes containing `8`
    /// or `HILO` evaluate low hands, and codes containing `SHORT` use the
    /// short deck rules. Unknown codes resolve to [Variant::HOLDEM].
    ///
    /// ```
    /// # use shortstack_eval::Variant;
    /// assert_eq!(Variant::from_code("PLO8"), Variant::OMAHA_HI_LO);
    /// assert_eq!(Variant::from_code("SHORT"), Variant::SHORT_DECK);
    /// assert_eq!(Variant::from_code("CANASTA"), Variant::HOLDEM);
    /// ```
    pub fn from_code(code: &str) -> Self {
        let selection = if code.contains("PLO") {
            Selection::TwoPlusThree
        } else {
            Selection::AnyFive
        };

        let rules = if code.contains("SHORT") {
            Rules::ShortDeck
        } else {
            Rules::Standard
        };

        let hi_lo = code.contains('8') || code.contains("HILO");

        let variant = Variant {
            selection,
            rules,
            hi_lo,
        };

        if variant == Variant::HOLDEM && !FREE_CHOICE_CODES.iter().any(|c| code.contains(c)) {
            debug!("Unknown variant code '{code}', using {variant:?}");
        }

        variant
    }
}

impl From<&str> for Variant {
    fn from(code: &str) -> Self {
        Variant::from_code(code)
    }
}
