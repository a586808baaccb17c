// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shortstack CLI, prints the description of a player's best hand.
//!
//! ```text
//! $ shortstack --variant PLO8 --hole "Ah 2c Kd Kh" --board "3d 4s 5h Qc 9d"
//! Straight & 5-low
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shortstack_eval::describe;

#[derive(Debug, Parser)]
struct Cli {
    /// The game variant code (NLH, PLO, PLO8, SHORT, ...).
    #[clap(long, short, default_value = "NLH")]
    variant: String,
    /// The player hole cards, separated by spaces or commas.
    #[clap(long = "hole", short = 'c')]
    hole: String,
    /// The board cards, separated by spaces or commas.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Print the full description as JSON.
    #[clap(long, short)]
    json: bool,
    /// Enable debug logs.
    #[clap(long)]
    verbose: bool,
}

/// Splits a list of card tokens.
fn tokens(cards: &str) -> Vec<&str> {
    cards
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let hole = tokens(&cli.hole);
    let board = tokens(&cli.board);
    info!("Variant {} hole {:?} board {:?}", cli.variant, hole, board);

    let desc = describe(&cli.variant, &hole, &board)
        .with_context(|| format!("Invalid cards hole='{}' board='{}'", cli.hole, cli.board))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&desc)?);
    } else {
        println!("{desc}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tokens() {
        assert_eq!(tokens("Ah Kd"), vec!["Ah", "Kd"]);
        assert_eq!(tokens("Ah,Kd, 10c"), vec!["Ah", "Kd", "10c"]);
        assert_eq!(tokens("  "), Vec::<&str>::new());
        assert_eq!(tokens(""), Vec::<&str>::new());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::parse_from(["shortstack", "-v", "PLO8", "-c", "Ah 2c Kd Kh", "-b", "3d 4s 5h"]);
        assert_eq!(cli.variant, "PLO8");
        assert_eq!(tokens(&cli.hole).len(), 4);
        assert_eq!(tokens(&cli.board).len(), 3);
        assert!(!cli.json);

        let cli = Cli::parse_from(["shortstack", "--hole", "Ah Ad"]);
        assert_eq!(cli.variant, "NLH");
        assert!(cli.board.is_empty());
    }
}
