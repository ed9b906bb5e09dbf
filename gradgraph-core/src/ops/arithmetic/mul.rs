// gradgraph-core/src/ops/arithmetic/mul.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

/// \( z = a \cdot b \)
pub(crate) fn mul_forward<T: GradNumeric>(a: T, b: T) -> T {
    a * b
}

/// Product rule: \( \frac{dL}{da} = \frac{dL}{dz} \cdot b \) and
/// \( \frac{dL}{db} = \frac{dL}{dz} \cdot a \).
pub(crate) fn mul_backward<T: GradNumeric>(a: T, b: T, grad_output: T) -> [T; 2] {
    [b * grad_output, a * grad_output]
}

/// Appends a `mul` node computing `a * b` to the graph.
pub fn mul_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Mul, vec![a.into(), b.into()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
