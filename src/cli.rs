use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::corpus::FilterCriteria;

#[derive(Parser, Debug)]
#[command(author, version, about = "MTG tournament deck corpus tools")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print per-player statistics over the filtered corpus
    Stats {
        /// Directory holding one JSON document per tournament
        directory: PathBuf,
        #[clap(flatten)]
        filters: FilterArgs,
    },
    /// Resolve a player name to its alias set and combined statistics
    Resolve {
        /// Player name to look up
        name: String,
        /// Directory holding one JSON document per tournament
        directory: PathBuf,
        #[clap(flatten)]
        filters: FilterArgs,
    },
    /// Report card names that fail lookup against the card database
    Check {
        /// Directory holding one JSON document per tournament
        directory: PathBuf,
        /// Card database file (JSON array of {name, type} objects)
        #[arg(long)]
        cards: PathBuf,
        #[clap(flatten)]
        filters: FilterArgs,
    },
}

/// Corpus filter flags shared by every subcommand; omitted flags match all.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Keep tournaments on or after this date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Keep tournaments on or before this date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Keep tournaments with at least this many participants
    #[arg(long)]
    pub min_size: Option<u32>,

    /// Commander name prefix, repeatable; a deck must match every one
    #[arg(long = "commander")]
    pub commanders: Vec<String>,

    /// Card name prefix, repeatable; a deck must match every one
    #[arg(long = "card")]
    pub cards: Vec<String>,

    /// Raw player name, repeatable; keep only these players' decks
    #[arg(long = "player")]
    pub players: Vec<String>,

    /// Abort on the first malformed document or deck instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            date_from: self.from,
            date_to: self.to,
            min_tournament_size: self.min_size,
            commander_prefixes: self.commanders.clone(),
            card_prefixes: self.cards.clone(),
            player_aliases: self.players.clone(),
        }
    }
}
