//! Analyzer facade
//!
//! [`WordGraphAnalyzer`] owns a built graph, its configuration and a seeded
//! random source, and exposes every analysis as a method. Library users who
//! want to supply their own RNG can call the free functions in
//! [`crate::analysis`] directly instead.

use crate::analysis::augment::TextAugmenter;
use crate::analysis::bridge::BridgeWordFinder;
use crate::analysis::random_walk::RandomWalker;
use crate::analysis::shortest_path::ShortestPathEngine;
use crate::errors::Result;
use crate::graph::builder::build_graph_parallel_with_threshold;
use crate::graph::word_graph::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{ReachabilityMap, WalkResult, WordGraphConfig, WordPath};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A word graph together with the configuration and RNG used to query it
#[derive(Debug, Clone)]
pub struct WordGraphAnalyzer {
    graph: WordGraph,
    config: WordGraphConfig,
    rng: StdRng,
}

impl WordGraphAnalyzer {
    /// Build the graph from `lines` using `config`
    pub fn from_lines<S>(lines: &[S], config: WordGraphConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        config.validate()?;
        let graph = build_graph_parallel_with_threshold(
            lines,
            &Tokenizer::new(),
            config.parallel_threshold,
        )
        .build();
        Ok(Self::with_graph(graph, config))
    }

    /// Build the graph from a whole text, one graph line per text line
    pub fn from_text(text: &str, config: WordGraphConfig) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines, config)
    }

    /// Wrap an already built graph
    pub fn with_graph(graph: WordGraph, config: WordGraphConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { graph, config, rng }
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn config(&self) -> &WordGraphConfig {
        &self.config
    }

    /// Restart the random source from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn bridge_words(&self, word1: &str, word2: &str) -> Result<Vec<String>> {
        BridgeWordFinder::new(&self.graph)
            .with_determinism(self.config.determinism)
            .find(word1, word2)
    }

    pub fn augment(&mut self, text: &str) -> String {
        TextAugmenter::new(&self.graph)
            .with_determinism(self.config.determinism)
            .augment(text, &mut self.rng)
    }

    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<WordPath> {
        ShortestPathEngine::new(&self.graph).shortest_path(word1, word2)
    }

    pub fn shortest_paths_from(&self, word: &str) -> Result<ReachabilityMap> {
        ShortestPathEngine::new(&self.graph).shortest_paths_from(word)
    }

    pub fn random_walk(&mut self) -> Result<WalkResult> {
        RandomWalker::new(&self.graph).walk(&mut self.rng)
    }
}
