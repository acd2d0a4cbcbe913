pub mod models;

pub use models::{DeckDocument, DeckRecord, TournamentDocument, TournamentRecord};
