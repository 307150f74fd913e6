// src/main.rs

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use cookbook::catalog::{Cookbook, DEFAULT_MAX_DEPTH};
use cookbook::{normalize, render, CookbookConfig};
use std::path::Path;
use tracing::info;

/// Build a cookbook from a seed file
fn load_cookbook(seed: &Path, max_depth: usize) -> Result<Cookbook> {
    let book = Cookbook::new().with_max_depth(max_depth);
    book
        .load_seed(seed)
        .with_context(|| format!("Failed to load seed file: {}", seed.display()))?;
    Ok(book)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { config, bind, seed } => {
            let mut file_config = match config {
                Some(path) => CookbookConfig::load(&path)?,
                None => CookbookConfig::default(),
            };
            if let Some(bind) = bind {
                file_config.server.bind = bind;
            }
            if let Some(seed) = seed {
                file_config.cookbook.seed = Some(seed);
            }
            file_config.validate()?;

            let book = match &file_config.cookbook.seed {
                Some(seed) => load_cookbook(seed, file_config.cookbook.max_depth)?,
                None => Cookbook::new().with_max_depth(file_config.cookbook.max_depth),
            };

            cookbook::server::run_server(file_config.to_server_config()?, book).await
        }
        Commands::Parse { input } => {
            let name = normalize(&input)?;
            println!("{}", name);
            Ok(())
        }
        Commands::Summary {
            name,
            seed,
            max_depth,
        } => {
            let book = load_cookbook(&seed, max_depth)?;
            let summary = book.summarize(&name)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&render(&summary))?
            );
            Ok(())
        }
        Commands::Check { seed } => {
            info!("Checking seed file: {}", seed.display());
            let book = load_cookbook(&seed, DEFAULT_MAX_DEPTH)?;
            println!("{} entries admitted", book.len());
            Ok(())
        }
    }
}
