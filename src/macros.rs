//! Conditional tracing support
//!
//! Both macros expand to nothing unless the `tracing` feature is enabled.

/// Enter a tracing span for an analysis stage.
///
/// The span stays open until the end of the enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("wordgraph_stage", stage = $name).entered();
    };
}

/// Emit a debug event with structured fields.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
