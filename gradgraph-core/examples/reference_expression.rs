//! Builds `y = ln(x1) + x1 * x2 - sin(x2)` at `x1 = 2, x2 = 5`, then prints the
//! value of `y` and its gradients. Run with `RUST_LOG=debug` to see the
//! evaluation order and every node after the backward pass.

use gradgraph_core::{Executor, GradGraphError, Graph};

fn main() -> Result<(), GradGraphError> {
    let _ = env_logger::builder().try_init();

    let mut graph = Graph::<f64>::new();
    let x1 = graph.identity(2.0)?;
    let x2 = graph.identity(5.0)?;
    let ln_x1 = graph.ln(x1)?;
    let product = graph.mul(x1, x2)?;
    let sum = graph.add(ln_x1, product)?;
    let sin_x2 = graph.sin(x2)?;
    let y = graph.sub(sum, sin_x2)?;

    let mut executor = Executor::new(&mut graph, y)?;
    let value = executor.run()?;
    executor.gradients()?;

    println!("y = {:.3}", value);
    println!("dy/dx1 = {:.3}", graph.grad(x1)?);
    println!("dy/dx2 = {:.3}", graph.grad(x2)?);
    Ok(())
}
