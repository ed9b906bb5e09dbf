use crate::autograd::Executor;
use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId};
use crate::ops::traits::GradNumeric;

/// Runs a forward and a backward pass from `root` and returns the root's value.
pub(crate) fn run_backward<T: GradNumeric>(
    graph: &mut Graph<T>,
    root: NodeId,
) -> Result<T, GradGraphError> {
    let mut executor = Executor::new(graph, root)?;
    let value = executor.run()?;
    executor.gradients()?;
    Ok(value)
}

/// Builds `y = ln(x1) + x1 * x2 - sin(x2)` and returns `(x1, x2, y)`.
pub(crate) fn build_reference_expression(
    graph: &mut Graph<f64>,
    x1: f64,
    x2: f64,
) -> Result<(NodeId, NodeId, NodeId), GradGraphError> {
    let x1 = graph.identity(x1)?;
    let x2 = graph.identity(x2)?;
    let ln_x1 = graph.ln(x1)?;
    let product = graph.mul(x1, x2)?;
    let sum = graph.add(ln_x1, product)?;
    let sin_x2 = graph.sin(x2)?;
    let y = graph.sub(sum, sin_x2)?;
    Ok((x1, x2, y))
}
