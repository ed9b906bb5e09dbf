// src/graph/op_methods.rs
//
// Builder methods on `Graph`. Each one forwards to the `*_op` function of the
// operation in `crate::ops`.

use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::arithmetic::{add_op, mul_op, sub_op};
use crate::ops::identity::identity_op;
use crate::ops::math_elem::{ln_op, sin_op};
use crate::ops::reduction::sum_op;
use crate::ops::traits::GradNumeric;

impl<T: GradNumeric> Graph<T> {
    /// Wraps a constant (or another node) into an identity node.
    ///
    /// Identity nodes over constants are the leaves gradients are read from.
    pub fn identity(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, GradGraphError> {
        identity_op(self, a)
    }

    /// Creates one identity leaf per value, in order.
    pub fn leaves(&mut self, values: &[T]) -> Result<Vec<NodeId>, GradGraphError> {
        values
            .iter()
            .map(|&value| identity_op(self, Operand::Constant(value)))
            .collect()
    }

    pub fn add(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradGraphError> {
        add_op(self, a, b)
    }

    pub fn sub(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradGraphError> {
        sub_op(self, a, b)
    }

    pub fn mul(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradGraphError> {
        mul_op(self, a, b)
    }

    /// Natural logarithm. Fails with `DomainError` if the operand is not strictly positive.
    pub fn ln(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, GradGraphError> {
        ln_op(self, a)
    }

    pub fn sin(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, GradGraphError> {
        sin_op(self, a)
    }

    /// Sums the operands as a left-leaning chain of add nodes.
    pub fn sum<I>(&mut self, operands: I) -> Result<NodeId, GradGraphError>
    where
        I: IntoIterator,
        I::Item: Into<Operand<T>>,
    {
        sum_op(self, operands)
    }
}
