//! Random traversal
//!
//! The walk starts at a uniformly chosen node and repeatedly follows a
//! uniformly chosen outgoing edge. It stops at a node without successors, or
//! when the chosen successor was already visited; in the latter case the
//! closing edge is recorded but the node is not repeated. Every step either
//! stops or visits a new node, so a walk takes at most `node_count` steps.

use crate::errors::{Result, WordGraphError};
use crate::graph::word_graph::WordGraph;
use crate::types::{WalkResult, WalkTermination};
use rand::Rng;

/// Performs random walks over a word graph
#[derive(Debug, Clone, Copy)]
pub struct RandomWalker<'g> {
    graph: &'g WordGraph,
}

impl<'g> RandomWalker<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Walk from a uniformly chosen start node
    pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WalkResult> {
        trace_stage!("random_walk");

        let n = self.graph.node_count();
        if n == 0 {
            return Err(WordGraphError::EmptyGraph);
        }
        let start = rng.random_range(0..n) as u32;
        Ok(self.walk_ids(start, rng))
    }

    /// Walk from a given start word
    pub fn walk_from<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Result<WalkResult> {
        trace_stage!("random_walk");

        let start = self
            .graph
            .node_id(word)
            .ok_or_else(|| WordGraphError::word_not_found([word]))?;
        Ok(self.walk_ids(start, rng))
    }

    fn walk_ids<R: Rng + ?Sized>(&self, start: u32, rng: &mut R) -> WalkResult {
        let mut visited = vec![false; self.graph.node_count()];
        let mut node_ids = Vec::new();
        let mut edge_ids = Vec::new();
        let mut current = start;

        let termination = loop {
            visited[current as usize] = true;
            node_ids.push(current);

            let successors = self.graph.successor_ids(current);
            if successors.is_empty() {
                break WalkTermination::DeadEnd;
            }

            let next = successors[rng.random_range(0..successors.len())];
            edge_ids.push((current, next));
            if visited[next as usize] {
                break WalkTermination::Revisit;
            }
            current = next;
        };

        trace_event!(
            steps = edge_ids.len(),
            termination = ?termination,
            "random walk finished"
        );

        let word = |id: u32| self.graph.word(id).unwrap_or_default().to_string();
        WalkResult {
            nodes: node_ids.into_iter().map(word).collect(),
            edges: edge_ids
                .into_iter()
                .map(|(from, to)| (word(from), word(to)))
                .collect(),
            termination,
        }
    }
}

/// Random walk from a uniformly chosen start node
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> Result<WalkResult> {
    RandomWalker::new(graph).walk(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> WordGraph {
        build_graph(["Hello, world! This is a test.", "Hello again."])
    }

    #[test]
    fn test_random_traversal() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(3);
        let walk = random_walk(&graph, &mut rng).unwrap();

        assert!(!walk.nodes.is_empty());
        // Sample graph is acyclic, so every walk ends at a dead end
        assert_eq!(walk.termination, WalkTermination::DeadEnd);
        assert_eq!(walk.edges.len(), walk.nodes.len() - 1);
        let last = walk.nodes.last().unwrap();
        assert!(last == "test" || last == "again");
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_walk(&graph, &mut rng).unwrap_err(), WordGraphError::EmptyGraph);
    }

    #[test]
    fn test_cycle_closure() {
        // Every node has exactly one successor: a -> b -> c -> a
        let graph = build_graph(["a b c a"]);
        let mut rng = StdRng::seed_from_u64(11);
        let walk = RandomWalker::new(&graph).walk_from("a", &mut rng).unwrap();

        assert_eq!(walk.nodes, vec!["a", "b", "c"]);
        assert_eq!(
            walk.edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string()),
                ("c".to_string(), "a".to_string()),
            ]
        );
        assert_eq!(walk.termination, WalkTermination::Revisit);
    }

    #[test]
    fn test_walk_from_missing_word() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(0);
        let err = RandomWalker::new(&graph).walk_from("nope", &mut rng).unwrap_err();
        assert!(err.is_word_not_found());
    }

    #[test]
    fn test_isolated_node_walk() {
        let graph = build_graph(["alone"]);
        let mut rng = StdRng::seed_from_u64(5);
        let walk = random_walk(&graph, &mut rng).unwrap();
        assert_eq!(walk.nodes, vec!["alone"]);
        assert!(walk.edges.is_empty());
    }

    #[test]
    fn test_walks_terminate_without_duplicates() {
        let graph = build_graph([
            "the cat sat on the mat",
            "the dog sat on the cat",
            "a mat on a dog",
        ]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walk = random_walk(&graph, &mut rng).unwrap();
            assert!(walk.nodes.len() <= graph.node_count());

            let mut seen = walk.nodes.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), walk.nodes.len());

            let extra = walk.edges.len() + 1 - walk.nodes.len();
            match walk.termination {
                WalkTermination::DeadEnd => assert_eq!(extra, 0),
                WalkTermination::Revisit => assert_eq!(extra, 1),
            }
        }
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let graph = build_graph(["a b c d a", "b d", "c a"]);
        let first = random_walk(&graph, &mut StdRng::seed_from_u64(8)).unwrap();
        let second = random_walk(&graph, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(first, second);
    }
}
