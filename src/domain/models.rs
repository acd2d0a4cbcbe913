use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tournament after parsing and validation
#[derive(Debug, Clone)]
pub struct TournamentRecord {
    pub id: String,
    pub date: NaiveDate,
    pub player_count: u32,
    pub decks: Vec<DeckRecord>,
}

/// One deck of the filtered corpus.
///
/// `commander` keeps the scraped order (1-2 cards); the same cards also
/// appear in `decklist` as quantity-1 entries, folded in at build time so
/// card filters see the command zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckRecord {
    pub deck_id: String,
    pub player: String,
    pub rank: String,
    pub commander: Vec<String>,
    pub decklist: Vec<(u32, String)>,
}

impl DeckRecord {
    /// Every card name of the deck, command zone included.
    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.decklist.iter().map(|(_, name)| name.as_str())
    }

    pub fn contains_card(&self, name: &str) -> bool {
        self.card_names().any(|card| card == name)
    }
}

// --- Raw document structures (one JSON file per tournament) ---

/// Tournament document as written by the scraper
#[derive(Debug, Deserialize, Serialize)]
pub struct TournamentDocument {
    #[serde(default)]
    pub id: String,
    pub date: String,
    /// `"<count> <free text>"`; only the leading integer matters.
    pub players: String,
    pub decks: Vec<DeckDocument>,
}

/// Deck entry inside a tournament document.
///
/// `commander` and `decklist` stay optional here so that a deck missing one
/// of them fails deck validation instead of failing the whole document parse.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeckDocument {
    #[serde(default)]
    pub deck_id: String,
    pub player: String,
    #[serde(default)]
    pub rank: String,
    pub commander: Option<Vec<String>>,
    pub decklist: Option<Vec<String>>,
}
