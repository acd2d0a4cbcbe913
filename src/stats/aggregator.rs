use std::collections::HashMap;

use log::info;

use crate::domain::DeckRecord;

use super::types::{PlayerStats, commander_key};

/// Fold the filtered deck stream into one `PlayerStats` per raw player name.
///
/// One cheap deterministic pass; insertion order is irrelevant to consumers.
pub fn aggregate_players(decks: &[DeckRecord]) -> HashMap<String, PlayerStats> {
    let mut stats: HashMap<String, PlayerStats> = HashMap::new();

    for deck in decks {
        let entry = stats.entry(deck.player.clone()).or_default();
        entry.appearance_count += 1;
        *entry
            .commanders
            .entry(commander_key(&deck.commander))
            .or_insert(0) += 1;
    }

    info!(
        "Aggregated {} decks into {} raw player names",
        decks.len(),
        stats.len()
    );
    stats
}

/// The candidate space the identity resolver searches over: every distinct
/// raw player name, sorted for stable enumeration.
pub fn raw_name_universe(stats: &HashMap<String, PlayerStats>) -> Vec<String> {
    let mut names: Vec<String> = stats.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(player: &str, commander: &[&str]) -> DeckRecord {
        let commander: Vec<String> = commander.iter().map(|s| s.to_string()).collect();
        let mut decklist: Vec<(u32, String)> = vec![(1, "Sol Ring".to_string())];
        decklist.extend(commander.iter().map(|card| (1, card.clone())));
        DeckRecord {
            deck_id: "d".to_string(),
            player: player.to_string(),
            rank: "1".to_string(),
            commander,
            decklist,
        }
    }

    #[test]
    fn counts_appearances_and_commander_tallies() {
        let decks = vec![
            deck("Anna", &["Korvold, Fae-Cursed King"]),
            deck("Anna", &["Korvold, Fae-Cursed King"]),
            deck("Anna", &["Atraxa, Praetors' Voice"]),
            deck("Bartek", &["Atraxa, Praetors' Voice"]),
        ];

        let stats = aggregate_players(&decks);
        assert_eq!(stats.len(), 2);

        let anna = &stats["Anna"];
        assert_eq!(anna.appearance_count, 3);
        assert_eq!(anna.commanders["Korvold, Fae-Cursed King"], 2);
        assert_eq!(anna.commanders["Atraxa, Praetors' Voice"], 1);

        assert_eq!(stats["Bartek"].appearance_count, 1);
    }

    #[test]
    fn partner_commanders_share_one_ordered_key() {
        let decks = vec![deck("Anna", &["Thrasios, Triton Hero", "Tymna the Weaver"])];

        let stats = aggregate_players(&decks);
        assert_eq!(
            stats["Anna"].commanders["Thrasios, Triton Hero + Tymna the Weaver"],
            1
        );
    }

    #[test]
    fn universe_is_the_distinct_name_set() {
        let decks = vec![
            deck("Bartek", &["X"]),
            deck("Anna", &["X"]),
            deck("Anna", &["Y"]),
        ];

        let stats = aggregate_players(&decks);
        assert_eq!(raw_name_universe(&stats), vec!["Anna", "Bartek"]);
    }
}
