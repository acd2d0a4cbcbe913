use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::carddata::UNKNOWN_CARD;
use crate::corpus::filters::{FilterCriteria, list_check};
use crate::domain::{DeckDocument, DeckRecord, TournamentDocument, TournamentRecord};

/// Reads tournament documents and emits the filtered deck corpus.
///
/// Lenient by default: a malformed document or deck is logged and skipped so
/// one bad scrape cannot take down the whole load. `strict(true)` propagates
/// the first error instead.
pub struct CorpusLoader {
    files: Vec<PathBuf>,
    strict: bool,
}

impl CorpusLoader {
    /// Discover every `*.json` document under a directory.
    ///
    /// Files are sorted by path so repeated loads see the documents in the
    /// same order (only error reporting order depends on it).
    pub fn from_directory<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();
        let entries = fs::read_dir(directory)
            .with_context(|| format!("Failed to read corpus directory {}", directory.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        Ok(Self::from_files(files))
    }

    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load the filtered deck corpus, flattened in document order.
    pub fn load(&self, criteria: &FilterCriteria) -> Result<Vec<DeckRecord>> {
        let tournaments = self.load_tournaments(criteria)?;
        Ok(tournaments
            .into_iter()
            .flat_map(|tournament| tournament.decks)
            .collect())
    }

    /// Load one `TournamentRecord` per document surviving the date and size
    /// gates, each holding only its filter-surviving decks.
    pub fn load_tournaments(&self, criteria: &FilterCriteria) -> Result<Vec<TournamentRecord>> {
        info!("Loading {} tournament documents", self.files.len());

        let mut tournaments = Vec::new();
        let mut malformed = 0;

        for path in &self.files {
            match self.load_file(path, criteria) {
                Ok(Some(tournament)) => tournaments.push(tournament),
                Ok(None) => {}
                Err(err) if !self.strict => {
                    warn!("Skipping malformed document {}: {:#}", path.display(), err);
                    malformed += 1;
                }
                Err(err) => {
                    return Err(err.context(format!("Malformed document {}", path.display())));
                }
            }
        }

        if malformed > 0 {
            warn!("Skipped {} malformed documents", malformed);
        }
        info!("Loaded {} tournaments after filtering", tournaments.len());

        Ok(tournaments)
    }

    fn load_file(&self, path: &Path, criteria: &FilterCriteria) -> Result<Option<TournamentRecord>> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document: TournamentDocument = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;

        self.parse_document(&document, criteria)
    }

    /// Apply the document gates and per-deck filters to one parsed document.
    ///
    /// Returns `Ok(None)` when the tournament is filtered out by date or
    /// size; malformed dates and participant counts are hard errors, never
    /// coerced, since the gates assume valid values.
    pub fn parse_document(
        &self,
        document: &TournamentDocument,
        criteria: &FilterCriteria,
    ) -> Result<Option<TournamentRecord>> {
        let date = parse_tournament_date(&document.date)?;
        if !criteria.date_in_range(date) {
            debug!("Tournament {} outside date range", document.id);
            return Ok(None);
        }

        let player_count = parse_participant_count(&document.players)?;
        if !criteria.size_acceptable(player_count) {
            debug!(
                "Tournament {} below minimum size ({} players)",
                document.id, player_count
            );
            return Ok(None);
        }

        let mut decks = Vec::new();
        for entry in &document.decks {
            let deck = match build_deck(entry) {
                Ok(deck) => deck,
                Err(err) if !self.strict => {
                    warn!(
                        "Skipping deck {:?} in tournament {}: {:#}",
                        entry.deck_id, document.id, err
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };

            if !deck_matches(&deck, criteria) {
                continue;
            }
            if deck.contains_card(UNKNOWN_CARD) {
                // Data-quality gate, not an error: the card failed identity
                // lookup at scrape time.
                debug!("Dropping deck {:?}: unresolved card", deck.deck_id);
                continue;
            }

            decks.push(deck);
        }

        Ok(Some(TournamentRecord {
            id: document.id.clone(),
            date,
            player_count,
            decks,
        }))
    }
}

/// Tournament dates are scraped as day/month/two-digit-year.
pub fn parse_tournament_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d/%m/%y")
        .with_context(|| format!("Failed to parse tournament date: {date}"))
}

/// The `players` field is `"<count> <free text>"`; trailing text is ignored.
pub fn parse_participant_count(players: &str) -> Result<u32> {
    let token = players
        .split_whitespace()
        .next()
        .ok_or_else(|| anyhow!("Empty players field"))?;
    token
        .parse()
        .with_context(|| format!("Players field {players:?} does not start with a count"))
}

/// Validate one deck entry and fold its command zone into the decklist.
pub fn build_deck(entry: &DeckDocument) -> Result<DeckRecord> {
    let commander = entry
        .commander
        .as_ref()
        .ok_or_else(|| anyhow!("Deck is missing its commander field"))?;
    if commander.is_empty() || commander.len() > 2 {
        bail!(
            "Deck has {} commander cards, expected 1 or 2",
            commander.len()
        );
    }

    let lines = entry
        .decklist
        .as_ref()
        .ok_or_else(|| anyhow!("Deck is missing its decklist field"))?;

    let mut decklist = Vec::with_capacity(lines.len() + commander.len());
    for line in lines {
        decklist.push(parse_decklist_line(line)?);
    }
    // Command zone cards join the main list as quantity-1 entries so the
    // card filters and downstream consumers see them.
    decklist.extend(commander.iter().map(|card| (1, card.clone())));

    Ok(DeckRecord {
        deck_id: entry.deck_id.clone(),
        player: entry.player.clone(),
        rank: entry.rank.clone(),
        commander: commander.clone(),
        decklist,
    })
}

fn parse_decklist_line(line: &str) -> Result<(u32, String)> {
    let (quantity, name) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("Decklist line {line:?} has no quantity prefix"))?;
    let quantity: u32 = quantity
        .parse()
        .with_context(|| format!("Decklist line {line:?} has a non-numeric quantity"))?;
    if quantity == 0 {
        bail!("Decklist line {line:?} has a zero quantity");
    }
    Ok((quantity, name.to_string()))
}

fn deck_matches(deck: &DeckRecord, criteria: &FilterCriteria) -> bool {
    if !list_check(&deck.commander, &criteria.commander_prefixes) {
        return false;
    }
    let cards: Vec<&str> = deck.card_names().collect();
    if !list_check(&cards, &criteria.card_prefixes) {
        return false;
    }
    criteria.player_acceptable(&deck.player)
}
