use chrono::NaiveDate;

use crate::text::normalize;

/// Selection criteria for one corpus load.
///
/// Every field is optional; an absent field matches everything, so the
/// zero-value `FilterCriteria::default()` loads the whole corpus.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Keep tournaments on or after this date.
    pub date_from: Option<NaiveDate>,
    /// Keep tournaments on or before this date.
    pub date_to: Option<NaiveDate>,
    /// Keep tournaments with at least this many participants.
    pub min_tournament_size: Option<u32>,
    /// Keep decks whose command zone prefix-matches every entry.
    pub commander_prefixes: Vec<String>,
    /// Keep decks whose full card list prefix-matches every entry.
    pub card_prefixes: Vec<String>,
    /// Keep decks piloted by one of these raw names (exact match).
    pub player_aliases: Vec<String>,
}

impl FilterCriteria {
    /// Inclusive on both bounds.
    pub fn date_in_range(&self, date: NaiveDate) -> bool {
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }
        true
    }

    pub fn size_acceptable(&self, player_count: u32) -> bool {
        match self.min_tournament_size {
            Some(min) => player_count >= min,
            None => true,
        }
    }

    pub fn player_acceptable(&self, player: &str) -> bool {
        self.player_aliases.is_empty() || self.player_aliases.iter().any(|p| p == player)
    }
}

/// Prefix-match a filter list against a candidate list.
///
/// Satisfied iff every `wanted` entry has at least one candidate whose
/// normalized key starts with the wanted entry's normalized key. An empty
/// `wanted` list is vacuously satisfied, which is what lets callers omit
/// filters. Prefix, not substring: permissive enough for scrape-time name
/// truncation without matching mid-word.
pub fn list_check<S: AsRef<str>>(search_list: &[S], wanted: &[String]) -> bool {
    wanted.iter().all(|entry| {
        let key = normalize(entry);
        search_list
            .iter()
            .any(|candidate| normalize(candidate.as_ref()).starts_with(&key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_check_matches_prefix_not_substring() {
        let search = strings(&["1 Sol Ring"]);
        assert!(list_check(&search, &strings(&["sol"])));
        assert!(!list_check(&search, &strings(&["ring"])));
    }

    #[test]
    fn list_check_requires_every_wanted_entry() {
        let search = strings(&["1 Sol Ring", "1 Mana Crypt"]);
        assert!(list_check(&search, &strings(&["sol", "mana"])));
        assert!(!list_check(&search, &strings(&["sol", "lotus"])));
    }

    #[test]
    fn empty_wanted_list_is_vacuously_satisfied() {
        let search = strings(&["1 Sol Ring"]);
        assert!(list_check(&search, &[]));
        assert!(list_check::<String>(&[], &[]));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            date_from: NaiveDate::from_ymd_opt(2023, 9, 1),
            date_to: NaiveDate::from_ymd_opt(2023, 9, 30),
            ..Default::default()
        };

        let from = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        assert!(criteria.date_in_range(from));
        assert!(!criteria.date_in_range(from.pred_opt().unwrap()));

        let to = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        assert!(criteria.date_in_range(to));
        assert!(!criteria.date_in_range(to.succ_opt().unwrap()));
    }

    #[test]
    fn absent_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.date_in_range(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
        assert!(criteria.size_acceptable(0));
        assert!(criteria.player_acceptable("anyone"));
    }

    #[test]
    fn player_filter_is_exact_membership() {
        let criteria = FilterCriteria {
            player_aliases: strings(&["Anna Nowak"]),
            ..Default::default()
        };
        assert!(criteria.player_acceptable("Anna Nowak"));
        assert!(!criteria.player_acceptable("anna nowak"));
    }
}
