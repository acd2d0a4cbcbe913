use std::path::Path;

use anyhow::Result;
use log::info;

use crate::carddata::{CardDatabase, JsonCardDatabase};
use crate::corpus::{CorpusLoader, FilterCriteria};
use crate::domain::DeckRecord;

/// Card-name control: report every card name of the loaded corpus that fails
/// lookup against the card database.
pub struct CardControlService {
    database: JsonCardDatabase,
}

impl CardControlService {
    pub fn new(database: JsonCardDatabase) -> Self {
        Self { database }
    }

    pub fn run(&self, directory: &Path, criteria: &FilterCriteria, strict: bool) -> Result<()> {
        info!("=== Card Name Control ===");
        info!("Card database holds {} cards", self.database.len());

        let loader = CorpusLoader::from_directory(directory)?.strict(strict);
        let decks = loader.load(criteria)?;

        let unknown = unknown_card_names(&decks, &self.database);
        if unknown.is_empty() {
            println!("All card names resolved against the database");
        } else {
            for name in &unknown {
                println!("{name}");
            }
            println!("{} card name(s) failed lookup", unknown.len());
        }

        Ok(())
    }
}

/// Distinct card names of `decks` missing from the database, sorted.
pub fn unknown_card_names(decks: &[DeckRecord], database: &dyn CardDatabase) -> Vec<String> {
    let mut unknown: Vec<String> = decks
        .iter()
        .flat_map(|deck| deck.card_names())
        .filter(|name| database.lookup(name).is_none())
        .map(|name| name.to_string())
        .collect();
    unknown.sort();
    unknown.dedup();
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carddata::Card;

    #[test]
    fn reports_distinct_unresolved_names() {
        let database = JsonCardDatabase::from_cards(vec![Card {
            name: "Sol Ring".to_string(),
            type_line: "Artifact".to_string(),
        }]);

        let deck = DeckRecord {
            deck_id: "d1".to_string(),
            player: "Anna".to_string(),
            rank: "1".to_string(),
            commander: vec!["Krovold, Fae-Cursed King".to_string()],
            decklist: vec![
                (1, "Sol Ring".to_string()),
                (1, "Krovold, Fae-Cursed King".to_string()),
            ],
        };

        let unknown = unknown_card_names(&[deck.clone(), deck], &database);
        assert_eq!(unknown, vec!["Krovold, Fae-Cursed King".to_string()]);
    }
}
