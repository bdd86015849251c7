//! Graph builder with efficient edge handling
//!
//! This module provides a mutable, directed graph builder that uses
//! FxHashMap for O(1) edge lookups during construction. Once all input has
//! been ingested, [`GraphBuilder::build`] freezes it into a [`WordGraph`].

use crate::graph::word_graph::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::StringPool;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Line count from which [`build_graph_parallel`] tokenizes in parallel
pub const PARALLEL_THRESHOLD: usize = 1000;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Outgoing edges: target node ID -> co-occurrence count
    pub successors: FxHashMap<u32, u32>,
    /// Source node IDs of incoming edges
    pub predecessors: FxHashSet<u32>,
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Node labels, interned in first-seen order
    pool: StringPool,
    /// Node storage, indexed by node ID
    nodes: Vec<BuilderNode>,
    tokenizer: Tokenizer,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::new())
    }

    /// Create a graph builder that tokenizes lines with `tokenizer`
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            pool: StringPool::new(),
            nodes: Vec::new(),
            tokenizer,
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            pool: StringPool::with_capacity(node_capacity),
            nodes: Vec::with_capacity(node_capacity),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        let id = self.pool.intern(word);
        if id as usize == self.nodes.len() {
            self.nodes.push(BuilderNode::default());
        }
        id
    }

    /// Increment the weight of the directed edge `from -> to` by one
    ///
    /// The edge is created with weight 1 if it doesn't exist yet.
    pub fn increment_edge(&mut self, from: u32, to: u32) {
        if from == to {
            return; // No self-loops
        }
        if from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }

        *self.nodes[from as usize].successors.entry(to).or_insert(0) += 1;
        self.nodes[to as usize].predecessors.insert(from);
    }

    /// Add one line's worth of already-tokenized words
    ///
    /// Every token becomes a node; each adjacent pair of distinct tokens
    /// adds one to the weight of their edge.
    pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let mut prev: Option<u32> = None;
        for token in tokens {
            let id = self.get_or_create_node(token.as_ref());
            if let Some(p) = prev {
                self.increment_edge(p, id);
            }
            prev = Some(id);
        }
    }

    /// Tokenize and add a single line of input
    pub fn add_line(&mut self, line: &str) {
        let tokens = self.tokenizer.line_tokens(line);
        self.add_tokens(&tokens);
    }

    /// Build a graph from a sequence of lines
    ///
    /// Edges never cross line boundaries.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with_tokenizer(lines, Tokenizer::new())
    }

    /// Build a graph from a sequence of lines with a custom tokenizer
    pub fn from_lines_with_tokenizer<I, S>(lines: I, tokenizer: Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        trace_stage!("build_graph");

        let mut builder = Self::with_tokenizer(tokenizer);
        for line in lines {
            builder.add_line(line.as_ref());
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.successors.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.pool.lookup(word)
    }

    /// Get the word for a node ID
    pub fn get_word(&self, id: u32) -> Option<&str> {
        self.pool.get(id)
    }

    /// Get the weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.get_node_id(from)?;
        let to = self.get_node_id(to)?;
        self.nodes[from as usize].successors.get(&to).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the builder into an immutable [`WordGraph`]
    pub fn build(self) -> WordGraph {
        WordGraph::from_parts(self.pool, self.nodes)
    }
}

/// Build a graph from lines, tokenizing in parallel for large inputs
///
/// Lines are tokenized independently with rayon and then ingested in input
/// order, so node IDs and edge weights are identical to the sequential
/// build.
pub fn build_graph_parallel<S>(lines: &[S], tokenizer: &Tokenizer) -> GraphBuilder
where
    S: AsRef<str> + Sync,
{
    build_graph_parallel_with_threshold(lines, tokenizer, PARALLEL_THRESHOLD)
}

/// Like [`build_graph_parallel`] with an explicit sequential cut-off
pub fn build_graph_parallel_with_threshold<S>(
    lines: &[S],
    tokenizer: &Tokenizer,
    threshold: usize,
) -> GraphBuilder
where
    S: AsRef<str> + Sync,
{
    // For small inputs, sequential is faster
    if lines.len() < threshold {
        return GraphBuilder::from_lines_with_tokenizer(lines, tokenizer.clone());
    }

    trace_stage!("build_graph_parallel");

    let tokenized: Vec<Vec<&str>> = lines
        .par_iter()
        .map(|line| tokenizer.line_tokens(line.as_ref()))
        .collect();

    let mut builder = GraphBuilder::with_tokenizer(tokenizer.clone());
    for tokens in &tokenized {
        builder.add_tokens(tokens);
    }
    builder
}
