// gradgraph-core/src/ops/reduction/sum.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::arithmetic::add_op;
use crate::ops::identity::identity_op;
use crate::ops::traits::GradNumeric;

/// Sums any number of operands into one node.
///
/// The result is a left fold of `add` nodes, `((a + b) + c) + d`, so the gradient
/// of the sum with respect to every operand is one. A single operand is wrapped in
/// an identity node so the caller always gets a fresh node back.
///
/// # Errors
/// Returns `GradGraphError::EmptyOperandList` when `operands` is empty.
pub fn sum_op<T, I>(graph: &mut Graph<T>, operands: I) -> Result<NodeId, GradGraphError>
where
    T: GradNumeric,
    I: IntoIterator,
    I::Item: Into<Operand<T>>,
{
    let mut operands = operands.into_iter().map(Into::<Operand<T>>::into);
    let first = operands.next().ok_or(GradGraphError::EmptyOperandList)?;
    let mut acc = match operands.next() {
        Some(second) => add_op(graph, first, second)?,
        None => return identity_op(graph, first),
    };
    for operand in operands {
        acc = add_op(graph, acc, operand)?;
    }
    Ok(acc)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
