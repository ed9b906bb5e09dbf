// gradgraph-core/src/ops/identity.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

pub(crate) fn identity_forward<T: GradNumeric>(a: T) -> T {
    a
}

pub(crate) fn identity_backward<T: GradNumeric>(_a: T, grad_output: T) -> [T; 1] {
    [grad_output]
}

/// Appends an `identity` node whose value is the value of `a`.
///
/// Applied to a constant, this creates a differentiable leaf: the constant itself
/// receives no gradient, but the identity node does.
pub fn identity_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Identity, vec![a.into()])
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
