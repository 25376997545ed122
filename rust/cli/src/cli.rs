//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "deckplay",
    version,
    about = "Shuffle, deal and play random-discard games with a standard 52-card deck"
)]
pub struct DeckplayCli {
    /// Emit debug logs on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the canonical deck, one suit per line
    Deck,
    /// Print one shuffled deck
    Shuffle {
        #[arg(long)]
        seed: Option<u64>,
        /// random-key or fisher-yates
        #[arg(long)]
        method: Option<String>,
    },
    /// Deal four sorted 13-card hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        method: Option<String>,
    },
    /// Deal and discard one random card per hand per round until empty
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        method: Option<String>,
        /// Number of games to run
        #[arg(long)]
        games: Option<u32>,
        /// Append each game as a JSON line to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
