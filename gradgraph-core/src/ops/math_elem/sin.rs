// gradgraph-core/src/ops/math_elem/sin.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

pub(crate) fn sin_forward<T: GradNumeric>(a: T) -> T {
    a.sin()
}

/// \( \frac{dL}{da} = \frac{dL}{dz} \cdot \cos(a) \)
pub(crate) fn sin_backward<T: GradNumeric>(a: T, grad_output: T) -> [T; 1] {
    [a.cos() * grad_output]
}

/// Appends a `sin` node computing the sine of `a` (radians).
pub fn sin_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Sin, vec![a.into()])
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
