// src/error.rs

//! Error types for cookbook operations
//!
//! Every rejection is a normal, recoverable outcome for a single request.
//! Nothing here is fatal to the process.

use thiserror::Error;

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while admitting entries or resolving summaries
#[derive(Error, Debug)]
pub enum Error {
    /// Candidate entry failed a structural or type check
    #[error("malformed entry: {0}")]
    MalformedEntry(String),

    /// Candidate name collides with an existing entry
    #[error("an entry named '{0}' already exists")]
    DuplicateName(String),

    /// Summary root is missing or is not a recipe
    #[error("'{0}' is not a recipe")]
    UnknownRecipe(String),

    /// A recipe at some depth requires an item absent from the cookbook
    #[error("recipe '{recipe}' requires unknown item '{missing}'")]
    DanglingReference { recipe: String, missing: String },

    /// A recipe requires itself, directly or transitively
    #[error("cyclic recipe definition: {}", cycle.join(" -> "))]
    CyclicDefinition { cycle: Vec<String> },

    /// Recipe nesting went deeper than the configured bound
    #[error("recipe '{name}' nests deeper than {limit} levels")]
    DepthExceeded { name: String, limit: usize },

    /// Aggregated quantity for an ingredient does not fit in 64 bits
    #[error("quantity of '{0}' overflows")]
    QuantityOverflow(String),

    /// Raw name normalizes to nothing
    #[error("invalid name: '{0}' has no letters")]
    EmptyNormalizedName(String),

    /// A seed file entry was rejected
    #[error("seed entry {index} rejected: {source}")]
    Seed {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// I/O error while reading a seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-entry error with a message
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedEntry(msg.into())
    }

    /// Short machine-readable kind, used for problem document URNs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedEntry(_) => "malformed_entry",
            Self::DuplicateName(_) => "duplicate_name",
            Self::UnknownRecipe(_) => "unknown_recipe",
            Self::DanglingReference { .. } => "dangling_reference",
            Self::CyclicDefinition { .. } => "cyclic_definition",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::QuantityOverflow(_) => "quantity_overflow",
            Self::EmptyNormalizedName(_) => "invalid_name",
            Self::Seed { source, .. } => source.kind(),
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}
