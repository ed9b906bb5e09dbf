use thiserror::Error;

/// Custom error type for the gradgraph engine.
///
/// Every error is a programmer error: either a malformed graph or an input outside
/// the mathematical domain of an operation. Nothing here is transient, so callers
/// should not retry.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradGraphError {
    #[error("Domain error in operation '{operation}': input {value} is outside the domain")]
    DomainError { operation: String, value: f64 },

    #[error("Cycle detected in the computation graph at node {node}")]
    CycleDetected { node: usize },

    #[error("Unknown node id {id}: graph holds {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Arity mismatch for operation '{operation}': expected {expected} operands, got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Operand index {index} out of bounds for node {node} with {arity} operands")]
    OperandIndexOutOfBounds {
        node: usize,
        index: usize,
        arity: usize,
    },

    #[error("Cannot sum an empty list of operands")]
    EmptyOperandList,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
