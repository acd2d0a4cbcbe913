use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::corpus::{CorpusLoader, FilterCriteria};
use crate::identity::IdentityResolver;
use crate::stats::{PlayerStats, aggregate_players, raw_name_universe};

/// Corpus-wide reporting: per-player statistics and identity lookups.
pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load, aggregate and print per-player summaries.
    pub fn run_stats(
        &self,
        directory: &Path,
        criteria: &FilterCriteria,
        strict: bool,
    ) -> Result<()> {
        info!("=== Player Statistics ===");

        let stats = self.load_stats(directory, criteria, strict)?;

        let mut players: Vec<(&String, &PlayerStats)> = stats.iter().collect();
        players.sort_by(|(a_name, a), (b_name, b)| {
            b.appearance_count
                .cmp(&a.appearance_count)
                .then_with(|| a_name.cmp(b_name))
        });

        for (name, player) in players {
            println!("{}: {} deck(s)", name, player.appearance_count);
            let mut commanders: Vec<(&String, &u32)> = player.commanders.iter().collect();
            commanders.sort_by(|(a_key, a), (b_key, b)| b.cmp(a).then_with(|| a_key.cmp(b_key)));
            for (commander, count) in commanders {
                println!("    {count}x {commander}");
            }
        }

        Ok(())
    }

    /// Resolve a player identity over the loaded corpus and print the alias
    /// set with its combined statistics.
    pub fn run_resolve(
        &self,
        name: &str,
        directory: &Path,
        criteria: &FilterCriteria,
        strict: bool,
    ) -> Result<()> {
        info!("=== Identity Resolution ===");

        let stats = self.load_stats(directory, criteria, strict)?;
        let universe = raw_name_universe(&stats);
        info!("Raw name universe holds {} names", universe.len());

        let resolver = IdentityResolver::new(self.config.resolver.clone());
        let mut aliases: Vec<String> = resolver.resolve(name, &universe).into_iter().collect();
        aliases.sort();

        if aliases.is_empty() {
            println!("No corpus entries match {name:?}");
            return Ok(());
        }

        let combined = combine_stats(&aliases, &stats);

        println!("{name:?} resolves to {} raw name(s):", aliases.len());
        for alias in &aliases {
            let appearances = stats
                .get(alias)
                .map(|s| s.appearance_count)
                .unwrap_or_default();
            println!("    {alias} ({appearances} deck(s))");
        }

        println!("Combined: {} deck(s)", combined.appearance_count);
        let mut commanders: Vec<(&String, &u32)> = combined.commanders.iter().collect();
        commanders.sort_by(|(a_key, a), (b_key, b)| b.cmp(a).then_with(|| a_key.cmp(b_key)));
        for (commander, count) in commanders {
            println!("    {count}x {commander}");
        }

        Ok(())
    }

    fn load_stats(
        &self,
        directory: &Path,
        criteria: &FilterCriteria,
        strict: bool,
    ) -> Result<HashMap<String, PlayerStats>> {
        let loader = CorpusLoader::from_directory(directory)?.strict(strict);
        let decks = loader.load(criteria)?;
        Ok(aggregate_players(&decks))
    }
}

/// Merge the per-alias statistics of one resolved identity.
fn combine_stats(aliases: &[String], stats: &HashMap<String, PlayerStats>) -> PlayerStats {
    let mut combined = PlayerStats::default();
    for alias in aliases {
        let Some(player) = stats.get(alias) else {
            continue;
        };
        combined.appearance_count += player.appearance_count;
        for (commander, count) in &player.commanders {
            *combined.commanders.entry(commander.clone()).or_insert(0) += count;
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_stats_merges_counts_and_tallies() {
        let mut stats = HashMap::new();
        stats.insert(
            "Kowalski".to_string(),
            PlayerStats {
                appearance_count: 2,
                commanders: HashMap::from([("Korvold, Fae-Cursed King".to_string(), 2)]),
            },
        );
        stats.insert(
            "Kowalsky".to_string(),
            PlayerStats {
                appearance_count: 1,
                commanders: HashMap::from([("Korvold, Fae-Cursed King".to_string(), 1)]),
            },
        );

        let aliases = vec!["Kowalski".to_string(), "Kowalsky".to_string()];
        let combined = combine_stats(&aliases, &stats);

        assert_eq!(combined.appearance_count, 3);
        assert_eq!(combined.commanders["Korvold, Fae-Cursed King"], 3);
    }
}
