//! # Scalar Operations Module (`ops`)
//!
//! Every elementary operation the engine knows is a variant of [`Operation`]. The
//! enum is closed: dispatch is a `match`, and each arm forwards to the forward and
//! backward functions living in the operation's own file.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a builder (`add_op`, `ln_op`, ...) that
//!   appends an eagerly evaluated node to a [`Graph`](crate::graph::Graph). The same
//!   builders are exposed as methods on `Graph`.
//! - **`_forward` / `_backward` Functions:** The local value and the local
//!   derivative rule, `pub(crate)` and used only through [`Operation`].
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul.
//! - [`math_elem`]: ln, sin.
//! - [`identity`]: the identity used to create leaves.
//! - [`reduction`]: sum over a list of operands, built from add nodes.
//! - [`traits`]: the [`GradNumeric`](traits::GradNumeric) scalar bound.

pub mod arithmetic;
pub mod identity;
pub mod math_elem;
pub mod reduction;
pub mod traits;

use crate::error::GradGraphError;
use std::fmt;
use traits::GradNumeric;

/// The elementary operations a node can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Ln,
    Sin,
    Identity,
}

impl Operation {
    /// Stable lowercase name, used for display and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Ln => "ln",
            Operation::Sin => "sin",
            Operation::Identity => "identity",
        }
    }

    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Sub | Operation::Mul => 2,
            Operation::Ln | Operation::Sin | Operation::Identity => 1,
        }
    }

    fn check_arity(self, actual: usize) -> Result<(), GradGraphError> {
        if actual != self.arity() {
            return Err(GradGraphError::ArityMismatch {
                operation: self.name().to_string(),
                expected: self.arity(),
                actual,
            });
        }
        Ok(())
    }

    /// Computes the operation's value from its input values.
    pub fn compute<T: GradNumeric>(self, inputs: &[T]) -> Result<T, GradGraphError> {
        self.check_arity(inputs.len())?;
        match self {
            Operation::Add => Ok(arithmetic::add::add_forward(inputs[0], inputs[1])),
            Operation::Sub => Ok(arithmetic::sub::sub_forward(inputs[0], inputs[1])),
            Operation::Mul => Ok(arithmetic::mul::mul_forward(inputs[0], inputs[1])),
            Operation::Ln => math_elem::ln::ln_forward(inputs[0]),
            Operation::Sin => Ok(math_elem::sin::sin_forward(inputs[0])),
            Operation::Identity => Ok(identity::identity_forward(inputs[0])),
        }
    }

    /// Applies the chain rule locally.
    ///
    /// Given the forward input values and the gradient flowing into the output
    /// (`output_grad`, dL/dOutput), returns dL/dInput_i for each input, in input order.
    pub fn gradient<T: GradNumeric>(
        self,
        inputs: &[T],
        output_grad: T,
    ) -> Result<Vec<T>, GradGraphError> {
        self.check_arity(inputs.len())?;
        let grads = match self {
            Operation::Add => {
                arithmetic::add::add_backward(inputs[0], inputs[1], output_grad).to_vec()
            }
            Operation::Sub => {
                arithmetic::sub::sub_backward(inputs[0], inputs[1], output_grad).to_vec()
            }
            Operation::Mul => {
                arithmetic::mul::mul_backward(inputs[0], inputs[1], output_grad).to_vec()
            }
            Operation::Ln => math_elem::ln::ln_backward(inputs[0], output_grad)?.to_vec(),
            Operation::Sin => math_elem::sin::sin_backward(inputs[0], output_grad).to_vec(),
            Operation::Identity => identity::identity_backward(inputs[0], output_grad).to_vec(),
        };
        Ok(grads)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
