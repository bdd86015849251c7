//! Immutable directed word graph
//!
//! Adjacency is stored in compressed sparse row form twice: once for
//! outgoing edges (with weights) and once for incoming edges. Rows are sorted
//! by node ID, so edge lookups are a binary search and neighbor iteration
//! order is stable.

use crate::graph::builder::BuilderNode;
use crate::types::StringPool;

/// A frozen, directed, weighted word-adjacency graph
#[derive(Debug, Clone)]
pub struct WordGraph {
    pool: StringPool,
    /// `out_offsets[i]..out_offsets[i + 1]` indexes node i's outgoing edges
    out_offsets: Vec<usize>,
    out_targets: Vec<u32>,
    out_weights: Vec<u32>,
    /// `in_offsets[i]..in_offsets[i + 1]` indexes node i's incoming edges
    in_offsets: Vec<usize>,
    in_sources: Vec<u32>,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::from_parts(StringPool::new(), Vec::new())
    }
}

impl WordGraph {
    pub(crate) fn from_parts(pool: StringPool, nodes: Vec<BuilderNode>) -> Self {
        let num_nodes = nodes.len();
        let num_edges: usize = nodes.iter().map(|n| n.successors.len()).sum();

        let mut out_offsets = Vec::with_capacity(num_nodes + 1);
        let mut out_targets = Vec::with_capacity(num_edges);
        let mut out_weights = Vec::with_capacity(num_edges);
        let mut in_offsets = Vec::with_capacity(num_nodes + 1);
        let mut in_sources = Vec::with_capacity(num_edges);

        out_offsets.push(0);
        in_offsets.push(0);

        for node in &nodes {
            let mut successors: Vec<(u32, u32)> =
                node.successors.iter().map(|(&t, &w)| (t, w)).collect();
            successors.sort_unstable_by_key(|&(t, _)| t);
            for (target, weight) in successors {
                out_targets.push(target);
                out_weights.push(weight);
            }
            out_offsets.push(out_targets.len());

            let mut predecessors: Vec<u32> = node.predecessors.iter().copied().collect();
            predecessors.sort_unstable();
            in_sources.extend(predecessors);
            in_offsets.push(in_sources.len());
        }

        Self {
            pool,
            out_offsets,
            out_targets,
            out_weights,
            in_offsets,
            in_sources,
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Check whether `word` is a node
    pub fn contains(&self, word: &str) -> bool {
        self.pool.lookup(word).is_some()
    }

    /// Node ID of `word`
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.pool.lookup(word)
    }

    /// Word label of a node ID
    pub fn word(&self, id: u32) -> Option<&str> {
        self.pool.get(id)
    }

    /// All words in node ID (first-appearance) order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.pool.iter()
    }

    /// Successor IDs of a node, ascending
    pub fn successor_ids(&self, id: u32) -> &[u32] {
        match self.out_range(id) {
            Some((start, end)) => &self.out_targets[start..end],
            None => &[],
        }
    }

    /// Weights parallel to [`successor_ids`](Self::successor_ids)
    pub fn successor_weights(&self, id: u32) -> &[u32] {
        match self.out_range(id) {
            Some((start, end)) => &self.out_weights[start..end],
            None => &[],
        }
    }

    /// Predecessor IDs of a node, ascending
    pub fn predecessor_ids(&self, id: u32) -> &[u32] {
        let idx = id as usize;
        if idx >= self.node_count() {
            return &[];
        }
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Weight of the edge between two node IDs
    pub fn edge_weight_by_id(&self, from: u32, to: u32) -> Option<u32> {
        let targets = self.successor_ids(from);
        targets
            .binary_search(&to)
            .ok()
            .map(|pos| self.successor_weights(from)[pos])
    }

    /// Weight of the edge `from -> to`, if both words and the edge exist
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        self.edge_weight_by_id(self.node_id(from)?, self.node_id(to)?)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Successors of `word` with edge weights; empty for unknown words
    pub fn successors(&self, word: &str) -> Vec<(&str, u32)> {
        let Some(id) = self.node_id(word) else {
            return Vec::new();
        };
        self.successor_ids(id)
            .iter()
            .zip(self.successor_weights(id))
            .filter_map(|(&t, &w)| self.word(t).map(|s| (s, w)))
            .collect()
    }

    /// Predecessors of `word`; empty for unknown words
    pub fn predecessors(&self, word: &str) -> Vec<&str> {
        let Some(id) = self.node_id(word) else {
            return Vec::new();
        };
        self.predecessor_ids(id)
            .iter()
            .filter_map(|&s| self.word(s))
            .collect()
    }

    pub fn out_degree(&self, id: u32) -> usize {
        self.successor_ids(id).len()
    }

    pub fn in_degree(&self, id: u32) -> usize {
        self.predecessor_ids(id).len()
    }

    /// All edges as `(source, target, weight)`, grouped by source ID
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        (0..self.node_count() as u32).flat_map(move |from| {
            let source = self.word(from).unwrap_or_default();
            self.successor_ids(from)
                .iter()
                .zip(self.successor_weights(from))
                .map(move |(&to, &w)| (source, self.word(to).unwrap_or_default(), w))
        })
    }

    fn out_range(&self, id: u32) -> Option<(usize, usize)> {
        let idx = id as usize;
        if idx >= self.node_count() {
            return None;
        }
        Some((self.out_offsets[idx], self.out_offsets[idx + 1]))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::builder::GraphBuilder;

    fn sample() -> super::WordGraph {
        GraphBuilder::from_lines(["Hello, world! This is a test.", "Hello again."]).build()
    }

    #[test]
    fn test_counts() {
        let graph = sample();
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_case_sensitive_nodes() {
        let graph = GraphBuilder::from_lines(["Hello hello"]).build();
        assert!(graph.contains("Hello"));
        assert!(graph.contains("hello"));
        assert_eq!(graph.edge_weight("Hello", "hello"), Some(1));
        assert_eq!(graph.edge_weight("hello", "Hello"), None);
    }

    #[test]
    fn test_successors_and_predecessors() {
        let graph = sample();
        assert_eq!(graph.successors("Hello"), vec![("world", 1), ("again", 1)]);
        assert_eq!(graph.predecessors("world"), vec!["Hello"]);
        assert!(graph.successors("test").is_empty());
        assert!(graph.predecessors("missing").is_empty());
    }

    #[test]
    fn test_degrees() {
        let graph = sample();
        let hello = graph.node_id("Hello").unwrap();
        assert_eq!(graph.out_degree(hello), 2);
        assert_eq!(graph.in_degree(hello), 0);
        assert_eq!(graph.out_degree(999), 0);
    }

    #[test]
    fn test_edges_listing() {
        let graph = sample();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![
                ("Hello", "world", 1),
                ("Hello", "again", 1),
                ("world", "This", 1),
                ("This", "is", 1),
                ("is", "a", 1),
                ("a", "test", 1),
            ]
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = super::WordGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
