//! # Computation graph arena (`graph`)
//!
//! A [`Graph`] owns every [`Node`] of one expression in a flat arena. Nodes are
//! addressed by [`NodeId`] and reference their inputs through [`Operand`]s, so a node
//! shared by several consumers is stored once and referenced by index.
//!
//! Construction is eager: every builder call (see `op_methods.rs`) computes the new
//! node's value before returning its id. Because an operand can only name a node
//! that already exists, graphs built this way are acyclic. The one escape hatch is
//! [`Graph::replace_operand`], which can rewire a node after the fact; cycles created
//! that way are reported by the [`Executor`](crate::autograd::Executor).

mod debug;
mod node;
mod op_methods;
mod operand;

pub use node::{Node, NodeId};
pub use operand::Operand;

use crate::error::GradGraphError;
use crate::ops::traits::GradNumeric;
use crate::ops::Operation;
use log::{debug, log_enabled, Level};

/// Arena of scalar nodes forming one or more expression DAGs.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
}

impl<T: GradNumeric> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GradNumeric> Graph<T> {
    /// Creates an empty graph. The first node created will get id 0.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Looks up a node, failing with `UnknownNode` for ids issued by another graph.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, GradGraphError> {
        self.nodes.get(id.0).ok_or(GradGraphError::UnknownNode {
            id: id.0,
            len: self.nodes.len(),
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, GradGraphError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(GradGraphError::UnknownNode { id: id.0, len })
    }

    /// Returns the cached forward value of a node.
    pub fn value(&self, id: NodeId) -> Result<T, GradGraphError> {
        Ok(self.node(id)?.value)
    }

    /// Returns the accumulated gradient of a node.
    pub fn grad(&self, id: NodeId) -> Result<T, GradGraphError> {
        Ok(self.node(id)?.grad)
    }

    /// Current values of a node's operands, in operand order.
    ///
    /// Node operands contribute their cached value, constants contribute themselves.
    pub fn operand_values(&self, id: NodeId) -> Result<Vec<T>, GradGraphError> {
        self.resolve(&self.node(id)?.operands)
    }

    fn resolve(&self, operands: &[Operand<T>]) -> Result<Vec<T>, GradGraphError> {
        operands
            .iter()
            .map(|operand| match operand {
                Operand::Constant(value) => Ok(*value),
                Operand::Node(id) => self.value(*id),
            })
            .collect()
    }

    /// Recomputes a node's value from the current values of its operands.
    ///
    /// Inputs are not refreshed first. Callers evaluating more than one node must go
    /// in topological order, which is what [`Executor::run`](crate::autograd::Executor::run) does.
    pub fn evaluate(&mut self, id: NodeId) -> Result<T, GradGraphError> {
        let node = self.node(id)?;
        let operation = node.operation;
        let inputs = self.resolve(&node.operands)?;
        let value = operation.compute(&inputs)?;
        let node = self.node_mut(id)?;
        node.inputs = inputs;
        node.value = value;
        Ok(value)
    }

    /// Creates a node for `operation` over `operands` and evaluates it immediately.
    ///
    /// Nothing is pushed if an operand is unknown, the arity is wrong, or the value
    /// falls outside the operation's domain.
    pub(crate) fn push_node(
        &mut self,
        operation: Operation,
        operands: Vec<Operand<T>>,
    ) -> Result<NodeId, GradGraphError> {
        let inputs = self.resolve(&operands)?;
        let value = operation.compute(&inputs)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            operation,
            operands,
            inputs,
            value,
            grad: T::zero(),
        });
        if log_enabled!(Level::Debug) {
            debug!("Eager execution: {}", self.render(id)?);
        }
        Ok(id)
    }

    /// Replaces operand `index` of node `id` and re-evaluates that node.
    ///
    /// This is how leaf values are updated between forward passes: replace the
    /// constant under an identity node, then call `Executor::run` to refresh the
    /// consumers. Downstream nodes keep their old values, and the input values
    /// they recorded, until then. A backward pass in between differentiates at
    /// those recorded values.
    ///
    /// On failure the previous operand is put back. Pointing a node at itself fails
    /// with `CycleDetected`; longer cycles are only found when an `Executor` orders
    /// the graph.
    pub fn replace_operand(
        &mut self,
        id: NodeId,
        index: usize,
        operand: impl Into<Operand<T>>,
    ) -> Result<(), GradGraphError> {
        let operand = operand.into();
        if let Operand::Node(target) = operand {
            self.node(target)?;
            if target == id {
                return Err(GradGraphError::CycleDetected { node: id.0 });
            }
        }

        let node = self.node_mut(id)?;
        let arity = node.operands.len();
        let slot = node
            .operands
            .get_mut(index)
            .ok_or(GradGraphError::OperandIndexOutOfBounds {
                node: id.0,
                index,
                arity,
            })?;
        let previous = std::mem::replace(slot, operand);

        if let Err(err) = self.evaluate(id) {
            self.node_mut(id)?.operands[index] = previous;
            return Err(err);
        }
        debug!("Replaced operand {} of {}", index, id);
        Ok(())
    }

    /// Resets the gradient of every node to zero.
    ///
    /// Backward passes accumulate, so this must be called between passes that
    /// should not see each other's contributions.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: T) -> Result<(), GradGraphError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    pub(crate) fn accumulate_grad(&mut self, id: NodeId, grad: T) -> Result<(), GradGraphError> {
        self.node_mut(id)?.grad += grad;
        Ok(())
    }
}
