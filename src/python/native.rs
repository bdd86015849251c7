//! Native Python interface
//!
//! A `WordGraph` Python class wrapping [`WordGraphAnalyzer`].

use super::to_py_err;
use crate::analyzer::WordGraphAnalyzer;
use crate::types::{DeterminismMode, WalkResult, WordGraphConfig};
use pyo3::prelude::*;
use std::collections::BTreeMap;

/// Result of a random walk
#[pyclass(name = "WalkResult")]
#[derive(Clone)]
pub struct PyWalkResult {
    #[pyo3(get)]
    pub nodes: Vec<String>,
    #[pyo3(get)]
    pub edges: Vec<(String, String)>,
    #[pyo3(get)]
    pub dead_end: bool,
}

#[pymethods]
impl PyWalkResult {
    fn __repr__(&self) -> String {
        format!(
            "WalkResult(nodes={}, edges={}, dead_end={})",
            self.nodes.len(),
            self.edges.len(),
            self.dead_end
        )
    }

    fn __len__(&self) -> usize {
        self.nodes.len()
    }
}

impl From<WalkResult> for PyWalkResult {
    fn from(walk: WalkResult) -> Self {
        Self {
            dead_end: walk.termination == crate::types::WalkTermination::DeadEnd,
            nodes: walk.nodes,
            edges: walk.edges,
        }
    }
}

/// Directed word graph built from lines of text
#[pyclass(name = "WordGraph")]
pub struct PyWordGraph {
    inner: WordGraphAnalyzer,
}

#[pymethods]
impl PyWordGraph {
    #[new]
    #[pyo3(signature = (lines, seed=None, deterministic=false))]
    fn new(
        lines: Vec<String>,
        seed: Option<u64>,
        deterministic: bool,
    ) -> PyResult<Self> {
        let mut config = WordGraphConfig::default();
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if deterministic {
            config = config.with_determinism(DeterminismMode::Deterministic);
        }

        let inner = WordGraphAnalyzer::from_lines(&lines, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "WordGraph(nodes={}, edges={})",
            self.inner.graph().node_count(),
            self.inner.graph().edge_count()
        )
    }

    fn __len__(&self) -> usize {
        self.inner.graph().node_count()
    }

    fn __contains__(&self, word: &str) -> bool {
        self.inner.graph().contains(word)
    }

    /// All edges as (source, target, weight) tuples
    fn edges(&self) -> Vec<(String, String, u32)> {
        self.inner
            .graph()
            .edges()
            .map(|(from, to, weight)| (from.to_string(), to.to_string(), weight))
            .collect()
    }

    fn bridge_words(&self, word1: &str, word2: &str) -> PyResult<Vec<String>> {
        self.inner.bridge_words(word1, word2).map_err(to_py_err)
    }

    fn augment(&mut self, text: &str) -> String {
        self.inner.augment(text)
    }

    /// Returns (path, cost)
    fn shortest_path(&self, word1: &str, word2: &str) -> PyResult<(Vec<String>, u64)> {
        let path = self.inner.shortest_path(word1, word2).map_err(to_py_err)?;
        Ok((path.words, path.cost))
    }

    /// Returns {target: path or None}
    fn shortest_paths_from(&self, word: &str) -> PyResult<BTreeMap<String, Option<Vec<String>>>> {
        let paths = self.inner.shortest_paths_from(word).map_err(to_py_err)?;
        Ok(paths
            .into_iter()
            .map(|(target, path)| (target, path.map(|p| p.words)))
            .collect())
    }

    fn random_walk(&mut self) -> PyResult<PyWalkResult> {
        self.inner
            .random_walk()
            .map(PyWalkResult::from)
            .map_err(to_py_err)
    }

    /// Plain-text report of a fresh random walk
    fn random_walk_report(&mut self) -> PyResult<String> {
        let walk = self.inner.random_walk().map_err(to_py_err)?;
        Ok(walk.to_report())
    }

    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }
}
