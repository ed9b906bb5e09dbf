use super::*;
use rand::Rng;

fn reference(graph: &mut Graph<f64>, leaves: &[NodeId]) -> Result<NodeId, GradGraphError> {
    let (x1, x2) = (leaves[0], leaves[1]);
    let ln_x1 = graph.ln(x1)?;
    let product = graph.mul(x1, x2)?;
    let sum = graph.add(ln_x1, product)?;
    let sin_x2 = graph.sin(x2)?;
    graph.sub(sum, sin_x2)
}

#[test]
fn test_check_grad_reference_expression() -> Result<(), GradCheckError> {
    check_grad(reference, &[2.0, 5.0], &GradCheckConfig::default())
}

#[test]
fn test_check_grad_random_points() -> Result<(), GradCheckError> {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        // x1 stays positive for ln
        let x1: f64 = rng.gen_range(0.5..4.0);
        let x2: f64 = rng.gen_range(-3.0..3.0);
        check_grad(reference, &[x1, x2], &GradCheckConfig::default())?;
    }
    Ok(())
}

#[test]
fn test_check_grad_shared_subexpression() -> Result<(), GradCheckError> {
    // f(a, b) = sin(a*b) * (a*b) - a
    let func = |graph: &mut Graph<f64>, leaves: &[NodeId]| -> Result<NodeId, GradGraphError> {
        let ab = graph.mul(leaves[0], leaves[1])?;
        let s = graph.sin(ab)?;
        let p = graph.mul(s, ab)?;
        graph.sub(p, leaves[0])
    };
    check_grad(func, &[0.7, -1.3], &GradCheckConfig::default())
}

#[test]
fn test_check_grad_unused_input() -> Result<(), GradCheckError> {
    let func = |graph: &mut Graph<f64>, leaves: &[NodeId]| graph.sin(leaves[0]);
    check_grad(func, &[1.0, 42.0], &GradCheckConfig::default())
}

#[test]
fn test_check_grad_propagates_engine_error() {
    let func = |graph: &mut Graph<f64>, leaves: &[NodeId]| graph.ln(leaves[0]);
    let result = check_grad(func, &[-1.0], &GradCheckConfig::default());
    assert!(matches!(
        result,
        Err(GradCheckError::Engine(GradGraphError::DomainError { .. }))
    ));
}
