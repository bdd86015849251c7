//! Error types for rapid_wordgraph
//!
//! Every failure a graph query can produce is a typed, recoverable value.
//! Callers decide how to phrase it for users.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Main error type for rapid_wordgraph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordGraphError {
    /// One or more query words are not nodes of the graph
    #[error("Word not found in graph: {}", words.join(", "))]
    WordNotFound { words: Vec<String> },

    /// Both words exist but no directed route connects them
    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    /// The graph has no nodes to start from
    #[error("Graph is empty")]
    EmptyGraph,

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordGraphError {
    /// Create a word-not-found error for the given missing words
    pub fn word_not_found<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::WordNotFound {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a no-path error
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoPath {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WordNotFound { .. } => "word_not_found",
            Self::NoPath { .. } => "no_path",
            Self::EmptyGraph => "empty_graph",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::Serialization { .. } => "serialization",
        }
    }

    pub fn is_word_not_found(&self) -> bool {
        matches!(self, Self::WordNotFound { .. })
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. })
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
