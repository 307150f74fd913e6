// src/config.rs
//! Configuration file parsing
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, CORS
//! - [cookbook] - Seed entries, summary nesting bound

use crate::catalog::DEFAULT_MAX_DEPTH;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Largest accepted `cookbook.max_depth`
pub const MAX_DEPTH_LIMIT: usize = 65_536;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Cookbook settings
    #[serde(default)]
    pub cookbook: CookbookSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors: true,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Cookbook configuration section
#[derive(Debug, Deserialize)]
pub struct CookbookSection {
    /// JSON array of entries admitted at startup
    #[serde(default)]
    pub seed: Option<PathBuf>,

    /// Maximum recipe nesting during a summary
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for CookbookSection {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: CookbookConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if !(1..=MAX_DEPTH_LIMIT).contains(&self.cookbook.max_depth) {
            anyhow::bail!(
                "cookbook.max_depth must be between 1 and {}, got {}",
                MAX_DEPTH_LIMIT,
                self.cookbook.max_depth
            );
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the internal ServerConfig structure
    #[cfg(feature = "server")]
    pub fn to_server_config(&self) -> Result<crate::server::ServerConfig> {
        Ok(crate::server::ServerConfig {
            bind_addr: self.bind_addr()?,
            enable_cors: self.server.cors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CookbookConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
        assert!(config.server.cors);
        assert!(config.cookbook.seed.is_none());
        assert_eq!(config.cookbook.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_parse_toml() {
        let config = CookbookConfig::parse(
            r#"
[server]
bind = "0.0.0.0:9000"
cors = false

[cookbook]
seed = "/srv/cookbook/entries.json"
max_depth = 32
"#,
        )
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().port(), 9000);
        assert!(!config.server.cors);
        assert_eq!(
            config.cookbook.seed.as_deref(),
            Some(Path::new("/srv/cookbook/entries.json"))
        );
        assert_eq!(config.cookbook.max_depth, 32);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CookbookConfig::parse("").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_bind() {
        assert!(CookbookConfig::parse("[server]\nbind = \"localhost\"\n").is_err());
    }

    #[test]
    fn test_invalid_max_depth() {
        assert!(CookbookConfig::parse("[cookbook]\nmax_depth = 0\n").is_err());
        assert!(CookbookConfig::parse("[cookbook]\nmax_depth = 100000\n").is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookbook.toml");
        std::fs::write(&path, "[cookbook]\nmax_depth = 8\n").unwrap();

        let config = CookbookConfig::load(&path).unwrap();
        assert_eq!(config.cookbook.max_depth, 8);

        assert!(CookbookConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
