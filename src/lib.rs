//! # rapid_wordgraph
//!
//! Directed word-adjacency graphs built from plain text, with the analyses
//! that run on them.
//!
//! Every pair of adjacent words on a line adds one to the weight of the
//! edge `first -> second`. Over the frozen graph the crate offers:
//!
//! - **Bridge words**: words `w` with `word1 -> w -> word2`
//! - **Text augmentation**: insert a random bridge word between adjacent words
//! - **Shortest paths**: minimum total edge weight, pairwise or single-source
//! - **Random walks**: follow random edges until a dead end or a revisit
//!
//! Randomized operations take their random source as a parameter.

#[macro_use]
mod macros;

pub mod analysis;
pub mod analyzer;
pub mod batch;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, WordGraphError};
pub use types::{
    DeterminismMode, ReachabilityMap, StringPool, WalkResult, WalkTermination, WordGraphConfig,
    WordPath,
};

// Re-export main functionality
pub use analysis::{
    augment::{augment_text, TextAugmenter},
    bridge::{find_bridge_words, BridgeWordFinder},
    random_walk::{random_walk, RandomWalker},
    shortest_path::{shortest_path, shortest_paths_from_word, ShortestPathEngine},
};
pub use analyzer::WordGraphAnalyzer;
pub use batch::{run_batch, run_batch_json, BatchRequest, Query};
pub use graph::{build_graph, builder::GraphBuilder, word_graph::WordGraph};
pub use nlp::tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
