//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_wordgraph.

pub mod json;
pub mod native;

use crate::errors::WordGraphError;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_class::<native::PyWordGraph>()?;
    m.add_class::<native::PyWalkResult>()?;

    m.add_function(wrap_pyfunction!(json::run_batch_json, m)?)?;

    Ok(())
}

/// Missing words raise `KeyError`; every other failure raises `ValueError`
pub(crate) fn to_py_err(err: WordGraphError) -> PyErr {
    match err {
        WordGraphError::WordNotFound { .. } => PyKeyError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
