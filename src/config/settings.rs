#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub similarity_threshold: f64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            // Normalized Damerau-Levenshtein similarity above this counts as
            // the same person; below it the alias-token heuristic still gets
            // a chance.
            similarity_threshold: 0.85,
        }
    }
}

pub struct AppConfig {
    pub resolver: ResolverSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            resolver: ResolverSettings::default(),
        }
    }
}

// Prefer passing the config explicitly (Dependency Injection) rather than
// globals; the card database collaborator follows the same rule.
