pub mod aggregator;
pub mod types;

pub use aggregator::{aggregate_players, raw_name_universe};
pub use types::{COMMANDER_SEPARATOR, PlayerStats, commander_key};
