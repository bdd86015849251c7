//! JSON interface for batch processing
//!
//! One call builds the graph and answers every query, so the corpus crosses
//! the Python↔Rust boundary only once.

use super::to_py_err;
use pyo3::prelude::*;

/// Run a JSON batch request and return the JSON response
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn run_batch_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let input = json_input.to_string();
    py.allow_threads(move || crate::batch::run_batch_json(&input))
        .map_err(to_py_err)
}
