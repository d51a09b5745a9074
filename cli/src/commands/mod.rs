//! Subcommand implementations.

pub mod clear;
pub mod import;
pub mod show;

use std::path::Path;

use anyhow::Result;
use archfolio_shared::{AutosaveConfig, DraftAutosaveManager, FileStorage, SystemClock};

use crate::cli::{Cli, Commands};

/// Manager over the draft slot `key` inside `draft_dir`.
pub type CliDrafts = DraftAutosaveManager<FileStorage, SystemClock>;

/// Open the draft slot the way the editor would.
pub fn open_drafts(draft_dir: &Path, key: &str) -> CliDrafts {
    let config = AutosaveConfig::default().with_storage_key(key);
    DraftAutosaveManager::new(FileStorage::new(draft_dir), SystemClock, config)
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let mut drafts = open_drafts(&cli.draft_dir, &cli.key);
    match cli.command {
        Commands::Show {
            format,
        } => {
            println!("{}", show::run(&drafts, format)?);
            Ok(())
        },
        Commands::Clear => clear::run(&mut drafts),
        Commands::Import {
            file,
            id,
            tags,
            category,
        } => import::run(&mut drafts, &file, id, tags, category),
    }
}
