// src/cli.rs
//! CLI definitions for the cookbook binary
//!
//! - `serve` - Run the HTTP server
//! - `parse` - Normalize a handwritten recipe name
//! - `summary` - Summarize a recipe from a seed file
//! - `check` - Validate a seed file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about = "In-memory cookbook of ingredients and recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Path to the TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bind address (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,

        /// JSON array of entries to admit at startup (overrides cookbook.seed)
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Normalize a handwritten recipe name
    Parse {
        /// Raw name
        input: String,
    },

    /// Print the summary of a recipe
    Summary {
        /// Recipe name
        name: String,

        /// JSON array of entries to load
        #[arg(short, long)]
        seed: PathBuf,

        /// Maximum recipe nesting
        #[arg(long, default_value_t = cookbook::catalog::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Validate a seed file
    Check {
        /// JSON array of entries to validate
        #[arg(short, long)]
        seed: PathBuf,
    },
}
