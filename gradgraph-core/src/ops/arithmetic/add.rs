// gradgraph-core/src/ops/arithmetic/add.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

/// \( z = a + b \)
pub(crate) fn add_forward<T: GradNumeric>(a: T, b: T) -> T {
    a + b
}

/// Gradient of addition: \( \frac{dz}{da} = \frac{dz}{db} = 1 \), so the output
/// gradient is passed through unchanged to both inputs.
pub(crate) fn add_backward<T: GradNumeric>(_a: T, _b: T, grad_output: T) -> [T; 2] {
    [grad_output, grad_output]
}

/// Appends an `add` node computing `a + b` to the graph.
///
/// # Errors
/// Returns `GradGraphError::UnknownNode` if either operand names a node that is not
/// part of `graph`.
pub fn add_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Add, vec![a.into(), b.into()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
