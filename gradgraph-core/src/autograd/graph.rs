use crate::error::GradGraphError;
use crate::graph::{Graph, NodeId, Operand};
use crate::ops::traits::GradNumeric;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first post-order: the operands of a node are visited, left to right,
/// before the node itself is appended, so each node comes after all of its inputs
/// and `root` comes last. Constants are skipped. A node shared by several
/// consumers appears once.
///
/// The traversal keeps its own stack instead of recursing, so long chains (a sum
/// over many leaves) do not exhaust the call stack.
///
/// # Errors
/// * `CycleDetected` if a node is reached again while one of its own inputs is
///   still being visited.
/// * `UnknownNode` if `root` or any operand is not part of `graph`.
pub fn topological_sort<T: GradNumeric>(
    graph: &Graph<T>,
    root: NodeId,
) -> Result<Vec<NodeId>, GradGraphError> {
    graph.node(root)?;
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut order = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    marks[root.index()] = Mark::InProgress;

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        match graph.node(id)?.operands().get(next) {
            Some(operand) => {
                frame.1 += 1;
                if let Operand::Node(input) = *operand {
                    graph.node(input)?;
                    match marks[input.index()] {
                        Mark::Unvisited => {
                            marks[input.index()] = Mark::InProgress;
                            stack.push((input, 0));
                        }
                        Mark::InProgress => {
                            return Err(GradGraphError::CycleDetected {
                                node: input.index(),
                            });
                        }
                        Mark::Done => {}
                    }
                }
            }
            None => {
                marks[id.index()] = Mark::Done;
                trace!("[topological_sort] Adding {} to order", id);
                order.push(id);
                stack.pop();
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topological_sort_simple() -> Result<(), GradGraphError> {
        let mut graph = Graph::<f64>::new();
        let x = graph.identity(1.0)?;
        let y = graph.identity(2.0)?;
        let z = graph.add(x, y)?;

        let order = topological_sort(&graph, z)?;
        assert_eq!(order, vec![x, y, z]);
        Ok(())
    }

    #[test]
    fn test_topological_sort_shared_node() -> Result<(), GradGraphError> {
        let mut graph = Graph::<f64>::new();
        let x = graph.identity(1.0)?;
        let z = graph.mul(x, x)?;

        let order = topological_sort(&graph, z)?;
        assert_eq!(order, vec![x, z]);
        Ok(())
    }

    #[test]
    fn test_topological_sort_only_reachable() -> Result<(), GradGraphError> {
        let mut graph = Graph::<f64>::new();
        let x = graph.identity(1.0)?;
        let unrelated = graph.identity(5.0)?;
        let z = graph.sin(x)?;

        let order = topological_sort(&graph, z)?;
        assert_eq!(order, vec![x, z]);
        assert!(!order.contains(&unrelated));
        Ok(())
    }

    #[test]
    fn test_topological_sort_detects_cycle() -> Result<(), GradGraphError> {
        let mut graph = Graph::<f64>::new();
        let x = graph.identity(1.0)?;
        let y = graph.add(x, 1.0)?;
        let z = graph.mul(y, 2.0)?;
        // x now depends on z: x -> y -> z -> x
        graph.replace_operand(x, 0, z)?;

        let err = topological_sort(&graph, z).unwrap_err();
        assert!(matches!(err, GradGraphError::CycleDetected { .. }));
        Ok(())
    }

    #[test]
    fn test_topological_sort_unknown_root() {
        let graph = Graph::<f64>::new();
        let mut other = Graph::<f64>::new();
        let foreign = other.identity(1.0).unwrap();
        assert_eq!(
            topological_sort(&graph, foreign).unwrap_err(),
            GradGraphError::UnknownNode { id: 0, len: 0 }
        );
    }

    #[test]
    fn test_topological_sort_long_chain() -> Result<(), GradGraphError> {
        let mut graph = Graph::<f64>::new();
        let values = vec![1.0; 20_000];
        let leaves = graph.leaves(&values)?;
        let total = graph.sum(leaves)?;

        let order = topological_sort(&graph, total)?;
        assert_eq!(order.len(), graph.len());
        assert_eq!(order.last(), Some(&total));
        Ok(())
    }
}
