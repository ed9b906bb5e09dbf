// gradgraph-core/src/ops/arithmetic/sub.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

/// \( z = a - b \)
pub(crate) fn sub_forward<T: GradNumeric>(a: T, b: T) -> T {
    a - b
}

/// \( \frac{dz}{da} = 1 \), \( \frac{dz}{db} = -1 \).
pub(crate) fn sub_backward<T: GradNumeric>(_a: T, _b: T, grad_output: T) -> [T; 2] {
    [grad_output, -grad_output]
}

/// Appends a `sub` node computing `a - b` to the graph.
pub fn sub_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Sub, vec![a.into(), b.into()])
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
