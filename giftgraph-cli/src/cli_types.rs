//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::ConfigOverrides;

#[derive(Parser)]
#[command(name = "giftgraph")]
#[command(about = "Extract NPC gift preferences from a game data dump", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/giftgraph/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that reads the game dump.
#[derive(Args, Clone, Default)]
pub(crate) struct SourceArgs {
    /// SQLite game dump to read
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Create one gift edge per matching tag id instead of one per prop
    #[arg(long)]
    pub keep_duplicate_gifts: bool,
}

impl SourceArgs {
    pub(crate) fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database: self.database.clone(),
            keep_duplicate_gifts: self.keep_duplicate_gifts,
            ..ConfigOverrides::default()
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load the dump and write JSON documents plus item icons
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory of extracted images to search for icons
        #[arg(long)]
        images_dir: Option<PathBuf>,

        /// Directory for props.json, npcs.json, gifts.json and metadata.json
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Directory for copied item icons
        #[arg(long)]
        image_output_dir: Option<PathBuf>,

        /// Base name of the fallback icon
        #[arg(long)]
        default_icon: Option<String>,

        /// Run the pipeline and icon resolution without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show gift preferences of an NPC or a prop
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// NPC display name (case-insensitive)
        #[arg(long)]
        npc: Option<String>,

        /// Prop display name (case-insensitive)
        #[arg(long)]
        prop: Option<String>,
    },

    /// List the distinct item types of giftable props
    ItemTypes {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where they came from
    Show,

    /// Print the settings file path
    Path,

    /// Write a commented default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
