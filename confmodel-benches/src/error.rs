//! Benchmark setup error type.

use confmodel_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The core library rejected the requested parameters.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// Generation finished without realising a graph.
    #[error("no graph was realised for {context}")]
    Unrealised {
        /// Description of the input that could not be realised.
        context: &'static str,
    },
}
