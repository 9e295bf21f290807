use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first post-order over the dependencies (visited in positional order),
/// then reversed: `root` comes first and every node appears before all of the
/// nodes it depends on. Each reachable node appears exactly once, however many
/// paths lead to it. The traversal uses an explicit stack, so deep chains do
/// not grow the call stack.
///
/// Used by `backward()` to fire each node's rule only once its gradient has
/// received every contribution.
///
/// # Errors
/// * `NodeNotFound` / `ForeignNode` if `root` or a dependency is not a node of `graph`.
/// * `CycleDetected` if a node is reached again while it is still on the
///   traversal stack.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.node(root)?;

    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut sorted_list = Vec::new();
    // Each frame holds a node and the position of its next dependency to visit.
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    marks[root.index()] = Mark::OnStack;

    while let Some(&(node, next_input)) = stack.last() {
        let inputs = graph.node(node)?.op.inputs();
        match inputs.get(next_input) {
            Some(&input) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                graph.node(input)?;
                match marks[input.index()] {
                    Mark::Unvisited => {
                        marks[input.index()] = Mark::OnStack;
                        stack.push((input, 0));
                    }
                    Mark::OnStack => {
                        return Err(ScalarGradError::CycleDetected {
                            index: input.index(),
                        });
                    }
                    Mark::Done => {}
                }
            }
            None => {
                marks[node.index()] = Mark::Done;
                sorted_list.push(node);
                stack.pop();
            }
        }
    }

    sorted_list.reverse();
    log::trace!(
        "[topological_sort] {} nodes reachable from {}",
        sorted_list.len(),
        root
    );
    Ok(sorted_list)
}
