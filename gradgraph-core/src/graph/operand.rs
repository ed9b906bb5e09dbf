use crate::graph::NodeId;

/// One input slot of a node: either a fixed scalar or another node of the same graph.
///
/// Node operands are shared references by index. Any number of downstream nodes
/// may point at the same input, which is what turns an expression into a DAG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    /// A numeric constant. Constants are not traversed and receive no gradient.
    Constant(T),
    /// A reference to a node in the owning [`Graph`](crate::graph::Graph).
    Node(NodeId),
}

impl<T> Operand<T> {
    /// Returns the referenced node, if this operand is one.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Operand::Node(id) => Some(*id),
            Operand::Constant(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }
}

impl<T> From<NodeId> for Operand<T> {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<f64> for Operand<f64> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand<f32> {
    fn from(value: f32) -> Self {
        Operand::Constant(value)
    }
}
