use super::*;
use crate::utils::testing::run_backward;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_basic() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let one = ln_op(&mut graph, 1.0)?;
    let e = ln_op(&mut graph, std::f64::consts::E)?;
    let ten = ln_op(&mut graph, 10.0)?;
    assert_relative_eq!(graph.value(one)?, 0.0);
    assert_relative_eq!(graph.value(e)?, 1.0, epsilon = 1e-12);
    assert_relative_eq!(graph.value(ten)?, 10.0f64.ln());
    Ok(())
}

#[test]
fn test_ln_forward_non_positive() -> Result<(), GradGraphError> {
    let mut graph = Graph::<f64>::new();
    let zero = graph.identity(0.0)?;
    let negative = graph.identity(-1.0)?;

    assert_eq!(
        ln_op(&mut graph, zero).unwrap_err(),
        GradGraphError::DomainError {
            operation: "ln".to_string(),
            value: 0.0,
        }
    );
    assert!(matches!(
        ln_op(&mut graph, negative),
        Err(GradGraphError::DomainError { .. })
    ));
    assert!(matches!(
        ln_op(&mut graph, f64::NAN),
        Err(GradGraphError::DomainError { .. })
    ));
    assert_eq!(graph.len(), 2, "rejected ln nodes must not be added");
    Ok(())
}

#[test]
fn test_ln_backward() -> Result<(), GradGraphError> {
    for &x in &[0.25_f64, 1.0, 2.0, 4.0] {
        let mut graph = Graph::<f64>::new();
        let a = graph.identity(x)?;
        let z = ln_op(&mut graph, a)?;
        run_backward(&mut graph, z)?;
        assert_relative_eq!(graph.grad(a)?, 1.0 / x);
    }
    Ok(())
}

#[test]
fn test_ln_backward_scaled() -> Result<(), GradGraphError> {
    let [grad] = ln_backward(4.0_f64, 0.3)?;
    assert_relative_eq!(grad, 0.075);
    Ok(())
}

#[test]
fn test_ln_backward_domain_error() {
    assert!(matches!(
        ln_backward(-2.0_f64, 1.0),
        Err(GradGraphError::DomainError { .. })
    ));
}
