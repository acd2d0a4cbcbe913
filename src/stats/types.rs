use std::collections::HashMap;

/// Separator for the human-readable commander key, order-preserving:
/// `"Thrasios, Triton Hero + Tymna the Weaver"`.
pub const COMMANDER_SEPARATOR: &str = " + ";

/// Per-raw-name statistics over the filtered corpus.
///
/// Keyed by the as-scraped player string; collapsing spellings of the same
/// person is deferred entirely to the identity resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    pub appearance_count: u32,
    pub commanders: HashMap<String, u32>,
}

/// Join commander card names into the canonical tally key.
pub fn commander_key(commander: &[String]) -> String {
    commander.join(COMMANDER_SEPARATOR)
}
