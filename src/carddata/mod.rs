use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// Placeholder name the scraper stamps on cards that failed identity lookup.
/// Decks carrying it are dropped by the corpus loader.
pub const UNKNOWN_CARD: &str = "Unknown Card";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Card {
    pub name: String,
    #[serde(rename = "type")]
    pub type_line: String,
}

/// Card lookup collaborator, constructed once by the caller and passed in
/// wherever card validation is needed.
pub trait CardDatabase {
    fn lookup(&self, card_name: &str) -> Option<&Card>;
}

/// In-memory database backed by a JSON array of card objects.
///
/// Lookup goes through the shared normalization key, so `"4 Sol Ring"` and
/// `"Sol Ring"` resolve to the same card.
pub struct JsonCardDatabase {
    cards: HashMap<String, Card>,
}

impl JsonCardDatabase {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read card database {}", path.display()))?;
        let cards: Vec<Card> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse card database {}", path.display()))?;
        Ok(Self::from_cards(cards))
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let cards = cards
            .into_iter()
            .map(|card| (normalize(&card.name), card))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardDatabase for JsonCardDatabase {
    fn lookup(&self, card_name: &str) -> Option<&Card> {
        self.cards.get(&normalize(card_name))
    }
}
