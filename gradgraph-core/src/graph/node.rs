use crate::graph::Operand;
use crate::ops::Operation;
use std::fmt;

/// Identifier of a node inside one [`Graph`](crate::graph::Graph).
///
/// Ids are handed out by the graph in creation order (0, 1, 2, ...) and double as
/// the index into its arena. An id is only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{}", self.0)
    }
}

/// A vertex of the computation graph: the result of one operation.
///
/// The node owns its operand list but not the nodes referenced from it. `value` is
/// computed eagerly when the node is created and refreshed by forward passes, and
/// `inputs` holds the operand values it was computed from. The reverse pass
/// differentiates at `inputs`, never at whatever the operands hold later.
/// `grad` is only written by the reverse pass (and by [`Graph::zero_grad`]).
///
/// [`Graph::zero_grad`]: crate::graph::Graph::zero_grad
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) id: NodeId,
    pub(crate) operation: Operation,
    pub(crate) operands: Vec<Operand<T>>,
    pub(crate) inputs: Vec<T>,
    pub(crate) value: T,
    pub(crate) grad: T,
}

impl<T: Copy> Node<T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Operands in positional order; the i-th partial gradient belongs to the i-th operand.
    pub fn operands(&self) -> &[Operand<T>] {
        &self.operands
    }

    /// Operand values recorded when `value` was last computed.
    pub fn inputs(&self) -> &[T] {
        &self.inputs
    }

    /// Cached forward value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> T {
        self.grad
    }

    /// Ids of the operands that are nodes, in operand order (duplicates kept).
    pub fn input_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.operands.iter().filter_map(Operand::as_node)
    }
}
