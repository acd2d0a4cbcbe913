pub mod carddata;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod domain;
pub mod identity;
pub mod services;
pub mod stats;
pub mod text;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::carddata::JsonCardDatabase;
use crate::cli::{Command, FilterArgs};
use crate::config::AppConfig;
use crate::services::analysis::AnalysisService;
use crate::services::control::CardControlService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats(directory: &Path, filters: &FilterArgs) -> Result<()> {
    let config = AppConfig::new();
    let service = AnalysisService::new(config);
    service.run_stats(directory, &filters.to_criteria(), filters.strict)
}

pub fn handle_resolve(name: &str, directory: &Path, filters: &FilterArgs) -> Result<()> {
    let config = AppConfig::new();
    let service = AnalysisService::new(config);
    service.run_resolve(name, directory, &filters.to_criteria(), filters.strict)
}

pub fn handle_check(directory: &Path, cards: &Path, filters: &FilterArgs) -> Result<()> {
    let database = JsonCardDatabase::from_file(cards)?;
    let service = CardControlService::new(database);
    service.run(directory, &filters.to_criteria(), filters.strict)
}
