//! Reverse-mode automatic differentiation over a [`Graph`](crate::graph::Graph).
//!
//! - [`graph`]: topological ordering of the nodes reachable from a root, with cycle detection.
//! - [`executor`]: the [`Executor`] running the forward pass and the backward pass.
//! - [`grad_check`]: comparison of analytical gradients with central finite differences.

pub mod executor;
pub mod grad_check;
pub mod graph;

pub use executor::Executor;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
