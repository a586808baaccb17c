// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --short
// ...
// Total hands      376992
// Elapsed:         0.101s
//
// High Card:       122400
// One Pair:        193536
// Two Pair:        36288
// Three of a Kind: 16128
// Straight:        6120
// Full House:      1728
// Flush:           480
// Four of a Kind:  288
// Straight Flush:  24
// ```
use clap::Parser;
use std::time::Instant;

use shortstack_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Evaluate all the short deck hands with short deck rules.
    #[clap(long, short)]
    short: bool,
}

fn main() {
    let cli = Cli::parse();
    let (deck, rules) = if cli.short {
        (Deck::short(), Rules::ShortDeck)
    } else {
        (Deck::default(), Rules::Standard)
    };

    // Classify all 5 cards hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    deck.for_each(5, |cards| {
        if let Ok(hand) = <&[Card; 5]>::try_from(cards) {
            counts[rules.classify(hand) as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s\n", elapsed);

    // Print from the weakest category under the selected rules.
    let mut categories = HandCategory::categories().collect::<Vec<_>>();
    categories.sort_by_key(|c| rules.strength(*c));

    for category in categories {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
