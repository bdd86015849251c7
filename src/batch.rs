//! JSON batch interface
//!
//! A single request carries the corpus lines, an optional config and a list
//! of queries. Each query yields either `{"ok": ...}` or
//! `{"error": {"kind": ..., "message": ...}}`; a failing query never aborts
//! the rest of the batch.
//!
//! ```json
//! {
//!   "lines": ["Hello, world! This is a test.", "Hello again."],
//!   "config": {"seed": 42},
//!   "queries": [
//!     {"op": "bridge_words", "word1": "Hello", "word2": "This"},
//!     {"op": "shortest_path", "word1": "Hello", "word2": "test"},
//!     {"op": "random_walk"}
//!   ]
//! }
//! ```

use crate::analyzer::WordGraphAnalyzer;
use crate::errors::{Result, WordGraphError};
use crate::types::{ReachabilityMap, WalkResult, WordGraphConfig, WordPath};
use serde::{Deserialize, Serialize};

/// Input document
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub lines: Vec<String>,
    #[serde(default)]
    pub config: Option<WordGraphConfig>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

/// One analysis to run against the request's graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    BridgeWords { word1: String, word2: String },
    Augment { text: String },
    ShortestPath { word1: String, word2: String },
    ShortestPathsFrom { word: String },
    RandomWalk,
}

/// Successful query output
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Words(Vec<String>),
    Text(String),
    Path(WordPath),
    Paths(ReachabilityMap),
    Walk(WalkResult),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
}

impl From<WordGraphError> for ErrorInfo {
    fn from(err: WordGraphError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryResult {
    Ok(QueryOutput),
    Error(ErrorInfo),
}

impl From<Result<QueryOutput>> for QueryResult {
    fn from(result: Result<QueryOutput>) -> Self {
        match result {
            Ok(output) => QueryResult::Ok(output),
            Err(err) => QueryResult::Error(err.into()),
        }
    }
}

/// Output document
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub node_count: usize,
    pub edge_count: usize,
    pub results: Vec<QueryResult>,
}

/// Build the request's graph and run its queries in order
pub fn run_batch(request: BatchRequest) -> Result<BatchResponse> {
    let config = request.config.unwrap_or_default();
    let mut analyzer = WordGraphAnalyzer::from_lines(&request.lines, config)?;

    let results: Vec<QueryResult> = request
        .queries
        .iter()
        .map(|query| run_query(&mut analyzer, query).into())
        .collect();

    Ok(BatchResponse {
        node_count: analyzer.graph().node_count(),
        edge_count: analyzer.graph().edge_count(),
        results,
    })
}

/// Parse a JSON request, run it, and serialize the response
pub fn run_batch_json(input: &str) -> Result<String> {
    let request: BatchRequest = serde_json::from_str(input)?;
    let response = run_batch(request)?;
    Ok(serde_json::to_string(&response)?)
}

fn run_query(analyzer: &mut WordGraphAnalyzer, query: &Query) -> Result<QueryOutput> {
    match query {
        Query::BridgeWords { word1, word2 } => {
            analyzer.bridge_words(word1, word2).map(QueryOutput::Words)
        }
        Query::Augment { text } => Ok(QueryOutput::Text(analyzer.augment(text))),
        Query::ShortestPath { word1, word2 } => {
            analyzer.shortest_path(word1, word2).map(QueryOutput::Path)
        }
        Query::ShortestPathsFrom { word } => {
            analyzer.shortest_paths_from(word).map(QueryOutput::Paths)
        }
        Query::RandomWalk => analyzer.random_walk().map(QueryOutput::Walk),
    }
}
