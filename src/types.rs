//! Core types for rapid_wordgraph
//!
//! This module defines the shared data structures: string interning for node
//! labels, configuration, and the result values returned by graph queries.

use crate::errors::{Result, WordGraphError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning.
///
/// Each distinct token is stored once and addressed by a dense `u32` id.
/// Ids are handed out in first-seen order, which is what node ids of the
/// word graph are built on.
#[derive(Debug, Default, Clone)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a string pool with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            string_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Look up the ID of an already-interned string
    pub fn lookup(&self, s: &str) -> Option<u32> {
        self.string_to_id.get(s).copied()
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Iterate over all strings in ID order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.id_to_string.iter().map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Determinism Mode
// ============================================================================

/// Controls whether unordered results are returned in a stable order.
///
/// Queries are already reproducible for a fixed input and seed; this only
/// decides whether set-like outputs (bridge words) are additionally sorted
/// lexicographically before they are handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminismMode {
    /// Results come back in graph (first-appearance) order.
    #[default]
    Default,
    /// Set-like results are sorted lexicographically.
    Deterministic,
}

impl DeterminismMode {
    /// Returns `true` when deterministic execution is requested.
    pub fn is_deterministic(self) -> bool {
        matches!(self, DeterminismMode::Deterministic)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for building and querying a word graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordGraphConfig {
    /// Ordering policy for set-like results
    pub determinism: DeterminismMode,
    /// Seed for the analyzer's random source (None = seed from the OS)
    pub seed: Option<u64>,
    /// Line count from which tokenization runs in parallel
    pub parallel_threshold: usize,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            determinism: DeterminismMode::Default,
            seed: None,
            parallel_threshold: 1000,
        }
    }
}

impl WordGraphConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(WordGraphError::invalid_config(
                "parallel_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set determinism mode
    pub fn with_determinism(mut self, mode: DeterminismMode) -> Self {
        self.determinism = mode;
        self
    }

    /// Builder method: set RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set parallel tokenization threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

// ============================================================================
// Query Results
// ============================================================================

/// A minimum-cost path between two words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPath {
    /// Words from source to target, inclusive
    pub words: Vec<String>,
    /// Sum of edge weights along the path
    pub cost: u64,
}

impl WordPath {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive (source, target) pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join("→"))
    }
}

/// Shortest paths from one source word to every other node.
///
/// `None` marks a target that is not reachable from the source.
pub type ReachabilityMap = BTreeMap<String, Option<WordPath>>;

/// Why a random walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkTermination {
    /// The last node has no outgoing edges
    DeadEnd,
    /// The chosen successor had already been visited
    Revisit,
}

/// Outcome of a random walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkResult {
    /// Visited nodes in order, without duplicates
    pub nodes: Vec<String>,
    /// Traversed edges in order, including a closing edge on revisit
    pub edges: Vec<(String, String)>,
    pub termination: WalkTermination,
}

impl WalkResult {
    /// Plain-text traversal report: visited nodes on the first line,
    /// visited edges on the second.
    pub fn to_report(&self) -> String {
        let edges: Vec<String> = self
            .edges
            .iter()
            .map(|(from, to)| format!("({}, {})", from, to))
            .collect();
        format!(
            "Visited nodes: {}\nVisited edges: {}\n",
            self.nodes.join(" "),
            edges.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_pool() {
        let mut pool = StringPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("world");
        let id3 = pool.intern("hello"); // duplicate

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);
        assert_eq!(pool.get(id1), Some("hello"));
        assert_eq!(pool.lookup("world"), Some(id2));
        assert_eq!(pool.lookup("Hello"), None);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["hello", "world"]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_config_validation() {
        let config = WordGraphConfig::default();
        assert!(config.validate().is_ok());

        let bad_config = WordGraphConfig::default().with_parallel_threshold(0);
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_defaults() {
        let cfg = WordGraphConfig::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.parallel_threshold, 1000);
        assert_eq!(cfg.determinism, DeterminismMode::Default);
    }

    #[test]
    fn test_config_from_json_deterministic() {
        let cfg = WordGraphConfig::from_json(r#"{"determinism": "deterministic"}"#).unwrap();
        assert!(cfg.determinism.is_deterministic());

        let err = WordGraphConfig::from_json(r#"{"parallel_threshold": 0}"#).unwrap_err();
        assert_eq!(err.kind(), "invalid_config");
    }

    #[test]
    fn test_word_path_display() {
        let path = WordPath {
            words: vec!["Hello".into(), "world".into(), "This".into()],
            cost: 2,
        };
        assert_eq!(path.to_string(), "Hello→world→This");
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.edges().collect::<Vec<_>>(),
            vec![("Hello", "world"), ("world", "This")]
        );
    }

    #[test]
    fn test_walk_report() {
        let walk = WalkResult {
            nodes: vec!["a".into(), "b".into()],
            edges: vec![("a".into(), "b".into()), ("b".into(), "a".into())],
            termination: WalkTermination::Revisit,
        };
        assert_eq!(
            walk.to_report(),
            "Visited nodes: a b\nVisited edges: (a, b) (b, a)\n"
        );
    }
}
