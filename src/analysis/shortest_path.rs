//! Weighted shortest paths
//!
//! Edge cost is the raw co-occurrence count, so word pairs that appear
//! together often are treated as far apart. This matches the reference
//! behaviour and is kept as is.
//!
//! Dijkstra's heap is ordered by `(cost, node id)` and a node's predecessor
//! only changes on a strictly cheaper cost. Node IDs follow first appearance
//! in the corpus, so equal-cost ties always resolve the same way.

use super::resolve_words;
use crate::errors::{Result, WordGraphError};
use crate::graph::word_graph::WordGraph;
use crate::types::{ReachabilityMap, WordPath};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest-path distances and predecessor links
#[derive(Debug, Clone)]
struct ShortestPathTree {
    source: u32,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<u32>>,
}

impl ShortestPathTree {
    /// Node IDs from the source to `target`, or `None` if unreachable
    fn path_to(&self, target: u32) -> Option<(Vec<u32>, u64)> {
        let cost = self.dist[target as usize]?;
        let mut ids = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.prev[current as usize]?;
            ids.push(current);
        }
        ids.reverse();
        Some((ids, cost))
    }
}

/// Computes minimum-weight paths over a word graph
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g WordGraph,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Minimum-cost path from `word1` to `word2`
    ///
    /// A word's path to itself is `[word]` with cost 0.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<WordPath> {
        trace_stage!("shortest_path");

        let [source, target] = resolve_words(self.graph, [word1, word2])?;
        let tree = self.dijkstra(source, Some(target));

        match tree.path_to(target) {
            Some((ids, cost)) => {
                trace_event!(word1, word2, cost, hops = ids.len() - 1, "shortest path found");
                Ok(self.to_word_path(&ids, cost))
            }
            None => Err(WordGraphError::no_path(word1, word2)),
        }
    }

    /// Shortest paths from `word` to every other node
    ///
    /// Unreachable targets map to `None`. One Dijkstra run serves all
    /// targets.
    pub fn shortest_paths_from(&self, word: &str) -> Result<ReachabilityMap> {
        trace_stage!("shortest_paths_from");

        let [source] = resolve_words(self.graph, [word])?;
        let tree = self.dijkstra(source, None);

        let mut paths = ReachabilityMap::new();
        for (id, target) in self.graph.words().enumerate() {
            let id = id as u32;
            if id == source {
                continue;
            }
            let path = tree
                .path_to(id)
                .map(|(ids, cost)| self.to_word_path(&ids, cost));
            paths.insert(target.to_string(), path);
        }

        trace_event!(
            word,
            reachable = paths.values().filter(|p| p.is_some()).count(),
            "shortest path tree built"
        );
        Ok(paths)
    }

    /// Dijkstra from `source`, stopping early once `target` is settled
    fn dijkstra(&self, source: u32, target: Option<u32>) -> ShortestPathTree {
        let n = self.graph.node_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut prev: Vec<Option<u32>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[source as usize] = Some(0);
        heap.push(Reverse((0u64, source)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if settled[node as usize] {
                continue;
            }
            settled[node as usize] = true;
            if Some(node) == target {
                break;
            }

            let targets = self.graph.successor_ids(node);
            let weights = self.graph.successor_weights(node);
            for (&next, &weight) in targets.iter().zip(weights) {
                if settled[next as usize] {
                    continue;
                }
                let candidate = cost + u64::from(weight);
                let improves = match dist[next as usize] {
                    Some(known) => candidate < known,
                    None => true,
                };
                if improves {
                    dist[next as usize] = Some(candidate);
                    prev[next as usize] = Some(node);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        ShortestPathTree { source, dist, prev }
    }

    fn to_word_path(&self, ids: &[u32], cost: u64) -> WordPath {
        WordPath {
            words: ids
                .iter()
                .filter_map(|&id| self.graph.word(id))
                .map(str::to_string)
                .collect(),
            cost,
        }
    }
}

/// Minimum-cost path from `word1` to `word2`
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> Result<WordPath> {
    ShortestPathEngine::new(graph).shortest_path(word1, word2)
}

/// Shortest paths from `word` to every other node in the graph
pub fn shortest_paths_from_word(graph: &WordGraph, word: &str) -> Result<ReachabilityMap> {
    ShortestPathEngine::new(graph).shortest_paths_from(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn sample() -> WordGraph {
        build_graph(["Hello, world! This is a test.", "Hello again."])
    }

    #[test]
    fn test_find_shortest_path() {
        let graph = sample();
        let path = shortest_path(&graph, "Hello", "test").unwrap();
        assert_eq!(path.words, vec!["Hello", "world", "This", "is", "a", "test"]);
        assert_eq!(path.cost, 5);
    }

    #[test]
    fn test_no_path() {
        let graph = sample();
        let err = shortest_path(&graph, "a", "Hello").unwrap_err();
        assert_eq!(err, WordGraphError::no_path("a", "Hello"));
    }

    #[test]
    fn test_missing_word() {
        let graph = sample();
        assert!(shortest_path(&graph, "Hello", "nowhere").unwrap_err().is_word_not_found());
        assert!(shortest_paths_from_word(&graph, "nowhere").unwrap_err().is_word_not_found());
    }

    #[test]
    fn test_path_to_self_is_trivial() {
        let graph = sample();
        let path = shortest_path(&graph, "test", "test").unwrap();
        assert_eq!(path.words, vec!["test"]);
        assert_eq!(path.cost, 0);
        assert!(path.is_empty());
    }

    #[test]
    fn test_weight_is_cost() {
        // a -> b is heavy (3), the detour a -> c -> b costs 2
        let graph = build_graph(["a b", "a b", "a b", "a c b"]);
        let path = shortest_path(&graph, "a", "b").unwrap();
        assert_eq!(path.words, vec!["a", "c", "b"]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_tie_break_is_stable() {
        // Two cost-2 routes: via "x" (seen first) and via "y"
        let graph = build_graph(["s x t", "s y t"]);
        for _ in 0..5 {
            let path = shortest_path(&graph, "s", "t").unwrap();
            assert_eq!(path.words, vec!["s", "x", "t"]);
        }
    }

    #[test]
    fn test_shortest_paths_from_word() {
        let graph = sample();
        let paths = shortest_paths_from_word(&graph, "Hello").unwrap();

        assert_eq!(paths.len(), 6);
        assert!(!paths.contains_key("Hello"));
        assert_eq!(paths["world"].as_ref().unwrap().words, vec!["Hello", "world"]);
        assert_eq!(paths["again"].as_ref().unwrap().words, vec!["Hello", "again"]);
        assert_eq!(paths["test"].as_ref().unwrap().cost, 5);
    }

    #[test]
    fn test_unreachable_marked() {
        let graph = sample();
        let paths = shortest_paths_from_word(&graph, "a").unwrap();
        assert_eq!(paths["test"].as_ref().unwrap().words, vec!["a", "test"]);
        assert!(paths["Hello"].is_none());
        assert!(paths["again"].is_none());
    }

    #[test]
    fn test_single_source_agrees_with_pairwise() {
        let graph = build_graph(["a b c d", "a c", "b d e", "e a"]);
        let engine = ShortestPathEngine::new(&graph);
        let all = engine.shortest_paths_from("a").unwrap();
        for (target, path) in &all {
            match engine.shortest_path("a", target) {
                Ok(p) => assert_eq!(Some(&p), path.as_ref()),
                Err(e) => {
                    assert!(e.is_no_path());
                    assert!(path.is_none());
                }
            }
        }
    }
}
