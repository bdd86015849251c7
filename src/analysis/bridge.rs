//! Bridge word discovery
//!
//! A bridge word between `word1` and `word2` is a node `w` such that both
//! `word1 -> w` and `w -> word2` are edges. Only that direction is
//! considered; bridges from `word2` to `word1` are a separate query.

use super::resolve_words;
use crate::errors::Result;
use crate::graph::word_graph::WordGraph;
use crate::types::DeterminismMode;
use std::cmp::Ordering;

/// Finds bridge words in a word graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeWordFinder<'g> {
    graph: &'g WordGraph,
    determinism: DeterminismMode,
}

impl<'g> BridgeWordFinder<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            determinism: DeterminismMode::Default,
        }
    }

    /// Builder method: set determinism mode
    pub fn with_determinism(mut self, mode: DeterminismMode) -> Self {
        self.determinism = mode;
        self
    }

    pub fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    /// Find all bridge words from `word1` to `word2`
    ///
    /// Fails with `WordNotFound` if either word is not in the graph. The
    /// result holds distinct words and may be empty. Its order is graph order
    /// unless the finder is deterministic, in which case it is sorted.
    pub fn find(&self, word1: &str, word2: &str) -> Result<Vec<String>> {
        trace_stage!("bridge_words");

        let [from, to] = resolve_words(self.graph, [word1, word2])?;
        let mut bridges: Vec<String> = self
            .find_ids(from, to)
            .into_iter()
            .filter_map(|id| self.graph.word(id))
            .map(str::to_string)
            .collect();

        if self.determinism.is_deterministic() {
            bridges.sort_unstable();
        }

        trace_event!(word1, word2, count = bridges.len(), "bridge words resolved");
        Ok(bridges)
    }

    /// Bridge node IDs between two node IDs, ascending
    pub fn find_ids(&self, from: u32, to: u32) -> Vec<u32> {
        let successors = self.graph.successor_ids(from);
        let predecessors = self.graph.predecessor_ids(to);

        // Both rows are sorted, so a linear merge gives the intersection.
        let mut bridges = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < successors.len() && j < predecessors.len() {
            match successors[i].cmp(&predecessors[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    let id = successors[i];
                    if id != from && id != to {
                        bridges.push(id);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        bridges
    }
}

/// Find bridge words from `word1` to `word2`
pub fn find_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> Result<Vec<String>> {
    BridgeWordFinder::new(graph).find(word1, word2)
}
