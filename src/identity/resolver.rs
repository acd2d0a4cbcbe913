use std::collections::HashSet;

use log::debug;

use crate::config::ResolverSettings;
use crate::text::alpha_tokens;

/// Punctuation that signals a nickname annotation, e.g. `"John 'JJ' Smith"`.
/// Only when one of these appears does the token-subset test apply.
const ALIAS_MARKERS: [char; 3] = ['\'', '"', '('];

/// Clusters raw player-name spellings believed to denote one competitor.
///
/// Best-effort heuristic over noisy human-entered names: a short name that
/// happens to match two unrelated clusters merges them, and nothing here
/// detects that. Results are recomputed from the full corpus on every run.
pub struct IdentityResolver {
    settings: ResolverSettings,
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(ResolverSettings::default())
    }
}

impl IdentityResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Symmetric acceptance test: edit distance OR alias tokens.
    ///
    /// The edit-distance branch compares the raw strings, not normalized
    /// keys, so capitalisation differences count against the similarity. The
    /// alias branch accepts when either name's token set is a subset of the
    /// other's.
    pub fn evaluate_similarity(&self, left: &str, right: &str) -> bool {
        let similarity = strsim::normalized_damerau_levenshtein(left, right);
        if similarity > self.settings.similarity_threshold {
            return true;
        }

        if has_alias_marker(left) || has_alias_marker(right) {
            let left_tokens = alpha_tokens(left);
            let right_tokens = alpha_tokens(right);
            return left_tokens.is_subset(&right_tokens) || right_tokens.is_subset(&left_tokens);
        }

        false
    }

    /// All raw names of `universe` treated as the same person as `query`.
    ///
    /// Direct pass: test the query against every name. Indirect pass: test
    /// every direct match against the names still outside the set, catching
    /// one extra hop of transitivity (A-B direct, B-C only through B). The
    /// indirect pass iterates the direct matches only, so names reached
    /// indirectly never seed further expansion; that bound keeps a lookup
    /// near-linear in universe size instead of computing full connected
    /// components. Membership is stable across runs, iteration order is not.
    pub fn resolve(&self, query: &str, universe: &[String]) -> HashSet<String> {
        let direct: Vec<&String> = universe
            .iter()
            .filter(|name| self.evaluate_similarity(query, name))
            .collect();

        let mut matched: HashSet<String> =
            direct.iter().map(|name| name.to_string()).collect();

        for seed in &direct {
            for candidate in universe {
                if !matched.contains(candidate) && self.evaluate_similarity(seed, candidate) {
                    matched.insert(candidate.clone());
                }
            }
        }

        debug!(
            "Resolved {:?} to {} of {} raw names ({} direct)",
            query,
            matched.len(),
            universe.len(),
            direct.len()
        );
        matched
    }
}

fn has_alias_marker(name: &str) -> bool {
    name.contains(ALIAS_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IdentityResolver {
        IdentityResolver::default()
    }

    fn universe(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn near_identical_spellings_pass_the_edit_distance_test() {
        // One substitution over eight characters: similarity 0.875.
        assert!(resolver().evaluate_similarity("Kowalski", "Kowalsky"));
        // Two substitutions: similarity 0.75.
        assert!(!resolver().evaluate_similarity("Kowalski", "Kowelsky"));
    }

    #[test]
    fn alias_branch_accepts_nickname_annotations() {
        let resolver = resolver();

        // Well below the 0.85 edit-distance threshold; the quote marker
        // triggers the token-subset test.
        assert!(
            strsim::normalized_damerau_levenshtein("John 'JJ' Smith", "JJ Smith") < 0.85
        );
        assert!(resolver.evaluate_similarity("John 'JJ' Smith", "JJ Smith"));
        assert!(resolver.evaluate_similarity("JJ Smith", "John 'JJ' Smith"));

        // Extra tokens on both sides, neither a subset of the other.
        assert!(!resolver.evaluate_similarity("John 'JJ' Smith", "Bob Smith"));
    }

    #[test]
    fn alias_branch_needs_a_marker() {
        // Token subset without any marker stays rejected.
        assert!(!resolver().evaluate_similarity("John Smith", "Smith"));
    }

    #[test]
    fn resolve_collects_direct_matches() {
        let names = universe(&["Kowalski", "Kowalsky", "Marek Nowak"]);
        let matched = resolver().resolve("Kowalski", &names);

        assert!(matched.contains("Kowalski"));
        assert!(matched.contains("Kowalsky"));
        assert!(!matched.contains("Marek Nowak"));
    }

    #[test]
    fn closure_reaches_one_indirect_hop_and_no_further() {
        // A-B and B-C pass directly, A-C does not; D only matches C.
        let a = "Kowalski";
        let b = "Kowalsky";
        let c = "Kowelsky";
        let d = "Kewelsky";

        let resolver = resolver();
        assert!(resolver.evaluate_similarity(a, b));
        assert!(resolver.evaluate_similarity(b, c));
        assert!(!resolver.evaluate_similarity(a, c));
        assert!(resolver.evaluate_similarity(c, d));
        assert!(!resolver.evaluate_similarity(a, d));
        assert!(!resolver.evaluate_similarity(b, d));

        let names = universe(&[a, b, c, d]);

        // C is reached through B in the indirect pass.
        let from_a = resolver.resolve(a, &names);
        let expected: HashSet<String> = universe(&[a, b, c]).into_iter().collect();
        assert_eq!(from_a, expected);

        // D would need a second indirect hop (through C); the closure is
        // bounded to one, so it stays out.
        assert!(!from_a.contains(d));
    }

    #[test]
    fn resolution_is_symmetric_on_membership() {
        let names = universe(&["Kowalski", "Kowalsky", "Kowelsky", "Kewelsky", "Marek Nowak"]);
        let resolver = resolver();

        for a in &names {
            let from_a = resolver.resolve(a, &names);
            for b in &names {
                let from_b = resolver.resolve(b, &names);
                assert_eq!(
                    from_a.contains(b),
                    from_b.contains(a),
                    "asymmetry between {a:?} and {b:?}"
                );
            }
        }
    }

    #[test]
    fn query_is_included_only_when_it_matches_the_universe() {
        let names = universe(&["Kowalski", "Marek Nowak"]);
        let resolver = resolver();

        // Present in the universe: trivially matches itself.
        assert!(resolver.resolve("Kowalski", &names).contains("Kowalski"));

        // Absent and unlike everything: empty result, query not invented.
        assert!(resolver.resolve("Zofia Wozniak", &names).is_empty());
    }
}
