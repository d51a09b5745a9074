//! Command-line definitions.

use std::path::PathBuf;

use archfolio_shared::config::DEFAULT_STORAGE_KEY;
use clap::{Parser, Subcommand, ValueEnum};

/// How `show` prints the stored draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Recovery message plus the main fields.
    Summary,
    /// The stored snapshot as pretty JSON.
    Json,
}

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "af-cli", version, about = "Archfolio draft CLI")]
pub struct Cli {
    /// Directory holding the draft slot.
    #[arg(long, global = true, env = "AF_DRAFT_DIR", default_value = "./data/drafts")]
    pub draft_dir: PathBuf,
    /// Storage key of the draft slot.
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Draft subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the stored draft, if a recoverable one exists.
    Show {
        /// Output format.
        #[arg(long, value_enum, default_value_t = ShowFormat::Summary)]
        format: ShowFormat,
    },
    /// Delete the stored draft.
    Clear,
    /// Store a Markdown file as the current draft.
    Import {
        /// Markdown file with optional YAML frontmatter.
        #[arg(long)]
        file: PathBuf,
        /// Id of the existing unpublished article this draft belongs to.
        #[arg(long)]
        id: Option<String>,
        /// Hashtag list overriding frontmatter tags, e.g. "#steel #bridges".
        #[arg(long)]
        tags: Option<String>,
        /// Category overriding frontmatter `category`.
        #[arg(long)]
        category: Option<String>,
    },
}
