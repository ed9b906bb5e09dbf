//! # gradgraph-core
//!
//! Reverse-mode automatic differentiation over scalar computation graphs.
//!
//! Expressions are built node by node on a [`Graph`]. Every node is evaluated as
//! soon as it is created. An [`Executor`] then orders the nodes reachable from a
//! root, re-runs the forward pass in that order, and walks the order backwards to
//! accumulate the gradient of the root into every node.
//!
//! ```
//! use gradgraph_core::{Executor, Graph};
//!
//! // y = ln(x1) + x1 * x2 - sin(x2)
//! let mut graph = Graph::<f64>::new();
//! let x1 = graph.identity(2.0)?;
//! let x2 = graph.identity(5.0)?;
//! let ln_x1 = graph.ln(x1)?;
//! let product = graph.mul(x1, x2)?;
//! let sum = graph.add(ln_x1, product)?;
//! let sin_x2 = graph.sin(x2)?;
//! let y = graph.sub(sum, sin_x2)?;
//!
//! let mut executor = Executor::new(&mut graph, y)?;
//! let value = executor.run()?;
//! executor.gradients()?;
//!
//! assert!((value - 11.652).abs() < 1e-3);
//! assert!((graph.grad(x1)? - 5.5).abs() < 1e-12);
//! assert!((graph.grad(x2)? - (2.0 - 5.0f64.cos())).abs() < 1e-12);
//! # Ok::<(), gradgraph_core::GradGraphError>(())
//! ```
//!
//! ## Supported Operations
//!
//! | Operation | Arity | Gradient |
//! |-----------|-------|----------|
//! | `add` | 2 | `[g, g]` |
//! | `sub` | 2 | `[g, -g]` |
//! | `mul` | 2 | `[b*g, a*g]` |
//! | `ln` | 1 | `[g/a]`, `a > 0` only |
//! | `sin` | 1 | `[cos(a)*g]` |
//! | `identity` | 1 | `[g]` |

pub mod autograd;
pub mod config;
pub mod error;
pub mod graph;
pub mod ops;
#[cfg(test)]
pub(crate) mod utils;

pub use autograd::{check_grad, Executor, GradCheckError};
pub use config::GradCheckConfig;
pub use error::GradGraphError;
pub use graph::{Graph, Node, NodeId, Operand};
pub use ops::traits::GradNumeric;
pub use ops::Operation;
// Re-export traits required by public bounds
pub use num_traits;
