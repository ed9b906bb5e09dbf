use gradgraph_core::{Executor, GradGraphError, Graph, NodeId};

// Not every test crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs forward then backward from `root` and returns the root's value.
#[allow(dead_code)]
pub fn forward_backward(graph: &mut Graph<f64>, root: NodeId) -> Result<f64, GradGraphError> {
    let mut executor = Executor::new(graph, root)?;
    let value = executor.run()?;
    executor.gradients()?;
    Ok(value)
}

/// `y = ln(x1) + x1 * x2 - sin(x2)`, returned as `(x1, x2, y)`.
#[allow(dead_code)]
pub fn reference_expression(
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
