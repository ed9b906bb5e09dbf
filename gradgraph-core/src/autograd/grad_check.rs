use crate::autograd::Executor;
use crate::config::GradCheckConfig;
use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Graph error during gradient check: {0}")]
    Engine(#[from] GradGraphError),
}

/// Builds a fresh graph with one identity leaf per input and lets `func` put an
/// expression on top of it.
fn build<F>(
    func: &F,
    inputs: &[f64],
) -> Result<(Graph<f64>, Vec<NodeId>, NodeId), GradGraphError>
where
    F: Fn(&mut Graph<f64>, &[NodeId]) -> Result<NodeId, GradGraphError>,
{
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs)?;
    let root = func(&mut graph, &leaves)?;
    Ok((graph, leaves, root))
}

fn forward_value<F>(func: &F, inputs: &[f64]) -> Result<f64, GradGraphError>
where
    F: Fn(&mut Graph<f64>, &[NodeId]) -> Result<NodeId, GradGraphError>,
{
    let (mut graph, _, root) = build(func, inputs)?;
    let mut executor = Executor::new(&mut graph, root)?;
    executor.run()
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a new graph holding one identity leaf per entry of `inputs`
/// (in order) and returns the root of the expression to differentiate. It is called
/// once for the analytical pass and twice more per input, at `x + epsilon` and
/// `x - epsilon`.
///
/// An input passes when the absolute difference or the relative difference
/// between the two gradients is within `config.tolerance()`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph<f64>, &[NodeId]) -> Result<NodeId, GradGraphError>,
{
    let epsilon = config.epsilon();
    let tolerance = config.tolerance();

    // --- 1. Analytical gradients ---
    let (mut graph, leaves, root) = build(&func, inputs)?;
    {
        let mut executor = Executor::new(&mut graph, root)?;
        executor.run()?;
        executor.gradients()?;
    }
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<_, _>>()?;

    // --- 2. Compare input by input ---
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let value_plus = forward_value(&func, &plus)?;

        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;
        let value_minus = forward_value(&func, &minus)?;

        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical {} numerical {} (diff {})",
            input_index, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
