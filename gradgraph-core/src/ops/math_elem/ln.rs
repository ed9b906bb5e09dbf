// gradgraph-core/src/ops/math_elem/ln.rs

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;

fn check_domain<T: GradNumeric>(a: T) -> Result<(), GradGraphError> {
    // NaN fails this comparison too.
    if a > T::zero() {
        Ok(())
    } else {
        Err(GradGraphError::DomainError {
            operation: Operation::Ln.name().to_string(),
            value: a.to_report(),
        })
    }
}

/// \( z = \ln(a) \), defined for \( a > 0 \) only.
pub(crate) fn ln_forward<T: GradNumeric>(a: T) -> Result<T, GradGraphError> {
    check_domain(a)?;
    Ok(a.ln())
}

/// Computes the gradient for the natural logarithm \( z = \ln(a) \).
///
/// Using the chain rule \( \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{dz}{da} \),
/// where \( \frac{dz}{da} = \frac{1}{a} \), the gradient is
/// \( \frac{grad\_output}{a} \).
pub(crate) fn ln_backward<T: GradNumeric>(
    a: T,
    grad_output: T,
) -> Result<[T; 1], GradGraphError> {
    check_domain(a)?;
    Ok([grad_output / a])
}

/// Appends an `ln` node computing the natural logarithm of `a`.
///
/// # Errors
/// Returns `GradGraphError::DomainError` if the value of `a` is not strictly
/// positive. The graph is left unchanged in that case.
pub fn ln_op<T: GradNumeric>(
    graph: &mut Graph<T>,
    a: impl Into<Operand<T>>,
) -> Result<NodeId, GradGraphError> {
    graph.push_node(Operation::Ln, vec![a.into()])
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
