use super::*;
use crate::ops::Operation;
use crate::utils::testing::run_backward;
use approx::assert_relative_eq;

#[test]
fn test_sum_forward() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let leaves = graph.leaves(&[0.0, 1.0, 2.0, 3.0])?;
    let total = sum_op(&mut graph, leaves.iter().copied())?;
    assert_relative_eq!(graph.value(total)?, 6.0);
    // 4 leaves + 3 add nodes
    assert_eq!(graph.len(), 7);
    Ok(())
}

#[test]
fn test_sum_backward_unit_grads() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let leaves = graph.leaves(&[0.0, 1.0, 2.0, 3.0])?;
    let total = sum_op(&mut graph, leaves.clone())?;
    run_backward(&mut graph, total)?;
    for leaf in leaves {
        assert_relative_eq!(graph.grad(leaf)?, 1.0);
    }
    Ok(())
}

#[test]
fn test_sum_mixed_operands() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let x = graph.identity(2.0)?;
    let total = sum_op(
        &mut graph,
        vec![Operand::Node(x), Operand::Constant(0.5), Operand::Node(x)],
    )?;
    assert_relative_eq!(graph.value(total)?, 4.5);
    run_backward(&mut graph, total)?;
    assert_relative_eq!(graph.grad(x)?, 2.0);
    Ok(())
}

#[test]
fn test_sum_single_operand() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let x = graph.identity(9.0)?;
    let total = sum_op(&mut graph, [x])?;
    assert_ne!(total, x);
    assert_eq!(graph.node(total)?.operation(), Operation::Identity);
    assert_relative_eq!(graph.value(total)?, 9.0);
    Ok(())
}

#[test]
fn test_sum_empty() {
    let mut graph = Graph::<f64>::new();
    let result = sum_op(&mut graph, Vec::<NodeId>::new());
    assert_eq!(result.unwrap_err(), GradGraphError::EmptyOperandList);
    assert!(graph.is_empty());
}
