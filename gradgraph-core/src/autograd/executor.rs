use crate::autograd::graph::topological_sort;
use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use log::{debug, log_enabled, trace, warn, Level};

/// Runs forward and backward passes over the subgraph reachable from one root.
///
/// The topological order is computed once, in [`Executor::new`]. The executor
/// borrows the graph mutably for its whole life, so no other code can touch the
/// graph between ordering and evaluation; drop the executor (or use
/// [`Executor::graph`]) to read gradients afterwards.
///
/// ```
/// use gradgraph_core::{Executor, Graph};
///
/// let mut graph = Graph::<f64>::new();
/// let x = graph.identity(3.0)?;
/// let y = graph.mul(x, x)?;
///
/// let mut executor = Executor::new(&mut graph, y)?;
/// assert_eq!(executor.run()?, 9.0);
/// executor.gradients()?;
/// assert_eq!(graph.grad(x)?, 6.0);
/// # Ok::<(), gradgraph_core::GradGraphError>(())
/// ```
#[derive(Debug)]
pub struct Executor<'g, T> {
    graph: &'g mut Graph<T>,
    root: NodeId,
    order: Vec<NodeId>,
}

impl<'g, T: GradNumeric> Executor<'g, T> {
    /// Orders the graph reachable from `root`.
    ///
    /// # Errors
    /// `CycleDetected` if that part of the graph is not acyclic, `UnknownNode` if
    /// `root` does not belong to `graph`.
    pub fn new(graph: &'g mut Graph<T>, root: NodeId) -> Result<Self, GradGraphError> {
        let order = topological_sort(graph, root)?;
        debug!(
            "Executor: {} nodes reachable from {} (graph holds {})",
            order.len(),
            root,
            graph.len()
        );
        Ok(Executor { graph, root, order })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Nodes in evaluation order: every node comes after all of its inputs.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn graph(&self) -> &Graph<T> {
        self.graph
    }

    /// Forward pass: re-evaluates every node once, in topological order, and
    /// returns the value of the root.
    ///
    /// Running twice without changing any leaf gives the same value twice.
    pub fn run(&mut self) -> Result<T, GradGraphError> {
        debug!("Evaluation order: {:?}", self.order);
        for &id in &self.order {
            self.graph.evaluate(id)?;
            if log_enabled!(Level::Debug) {
                debug!("Evaluating: {}", self.graph.render(id)?);
            }
        }
        self.graph.value(self.root)
    }

    /// Backward pass: accumulates d(root)/d(node) into the `grad` of every node.
    ///
    /// The root's gradient is set to one, then nodes are visited in reverse
    /// topological order. Each node hands one partial gradient per operand to its
    /// operation's local rule, evaluated at the input values the node recorded
    /// on its last evaluation, and every
    /// partial belonging to a node operand is added to that node's `grad`.
    /// Because all consumers of a node precede it in reverse order, its `grad` is
    /// complete when it is reached.
    ///
    /// Gradients are added to whatever the nodes already hold. Call
    /// [`Graph::zero_grad`] first to start from a clean slate.
    pub fn gradients(&mut self) -> Result<(), GradGraphError> {
        let root_value = self.graph.value(self.root)?;
        if !root_value.is_finite() {
            warn!(
                "Backward pass from {} whose value is {}; gradients may be meaningless",
                self.root, root_value
            );
        }
        self.graph.set_grad(self.root, T::one())?;

        for &id in self.order.iter().rev() {
            let node = self.graph.node(id)?;
            let operation = node.operation();
            let output_grad = node.grad();
            let operands = node.operands().to_vec();
            let partials = operation.gradient(node.inputs(), output_grad)?;
            for (operand, partial) in operands.into_iter().zip(partials) {
                if let Operand::Node(input) = operand {
                    trace!("[gradients] {} -> {}: {}", id, input, partial);
                    self.graph.accumulate_grad(input, partial)?;
                }
            }
        }

        if log_enabled!(Level::Debug) {
            debug!("After autodiff:");
            for &id in self.order.iter().rev() {
                debug!("{}", self.graph.render(id)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
