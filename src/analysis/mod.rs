//! Read-only analyses over a [`WordGraph`]
//!
//! - [`bridge`]: words `w` with edges `word1 -> w -> word2`
//! - [`augment`]: insert bridge words between adjacent words of new text
//! - [`shortest_path`]: minimum-weight paths (Dijkstra)
//! - [`random_walk`]: randomized traversal until a dead end or revisit
//!
//! Every function that makes a random choice takes the random source as a
//! parameter, so a seeded RNG gives reproducible results.

pub mod augment;
pub mod bridge;
pub mod random_walk;
pub mod shortest_path;

use crate::errors::{Result, WordGraphError};
use crate::graph::word_graph::WordGraph;

/// Resolve query words to node IDs, reporting every missing word at once
pub(crate) fn resolve_words<const N: usize>(
    graph: &WordGraph,
    words: [&str; N],
) -> Result<[u32; N]> {
    let mut ids = [0u32; N];
    let mut missing: Vec<&str> = Vec::new();

    for (slot, word) in ids.iter_mut().zip(words) {
        match graph.node_id(word) {
            Some(id) => *slot = id,
            None if !missing.contains(&word) => missing.push(word),
            None => {}
        }
    }

    if missing.is_empty() {
        Ok(ids)
    } else {
        Err(WordGraphError::word_not_found(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn test_resolve_words() {
        let graph = build_graph(["alpha beta"]);
        assert_eq!(resolve_words(&graph, ["beta", "alpha"]).unwrap(), [1, 0]);

        let err = resolve_words(&graph, ["gamma", "alpha", "gamma"]).unwrap_err();
        assert_eq!(err, WordGraphError::word_not_found(["gamma"]));

        let err = resolve_words(&graph, ["x", "y"]).unwrap_err();
        assert_eq!(err, WordGraphError::word_not_found(["x", "y"]));
    }
}
