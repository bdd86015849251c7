//! Graph construction and storage
//!
//! - [`builder`] ingests tokenized lines into a mutable adjacency map.
//! - [`word_graph`] holds the frozen, read-only graph every analysis queries.

pub mod builder;
pub mod word_graph;

use builder::GraphBuilder;
use word_graph::WordGraph;

/// Build a word graph from lines of text with the default tokenizer
pub fn build_graph<I, S>(lines: I) -> WordGraph
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GraphBuilder::from_lines(lines).build()
}
