// src/graph/debug.rs
use crate::error::GradGraphError;
use crate::graph::{Graph, Node, Operand};
use crate::ops::traits::GradNumeric;
use std::fmt;

impl<T: GradNumeric> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.id)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match operand {
                Operand::Constant(value) => write!(f, "{}", value)?,
                Operand::Node(id) => write!(f, "{}", id)?,
            }
        }
        write!(
            f,
            "] {} = {}, grad: {:.3}",
            self.operation, self.value, self.grad
        )
    }
}

impl<T: GradNumeric> Graph<T> {
    /// Renders a node with its operands resolved to their current values,
    /// e.g. `Node2: [2.0, 5.0] mul = 10, grad: 1.000`.
    pub fn render(&self, id: crate::graph::NodeId) -> Result<String, GradGraphError> {
        let node = self.node(id)?;
        let inputs = self.operand_values(id)?;
        Ok(format!(
            "{}: {:?} {} = {}, grad: {:.3}",
            node.id, inputs, node.operation, node.value, node.grad
        ))
    }
}
