/*!
Depth-first traversal with cycle detection.

The core is [`DepthFirst`], a resumable iterator over [`DfsStep`] events backed by an
explicit call stack, so traversal depth is bounded by heap memory rather than the thread
stack. It is shared by the user-facing [`traverse_with_cycle_detection`] wrapper and by
[`topological_order`](crate::algo::topological_order), which consume different events of
the same walk.

### Cycle classification

A back edge is an edge to a node whose call frame is still on the stack. In a directed
graph every back edge closes a cycle. In an undirected graph, walking back along the edge
just used to arrive must not count; each frame therefore remembers the **edge id** it was
entered through, and only the entry carrying that same id is exempt from the back-edge
test. Since parallel edges get distinct ids, a second edge between the same pair is
correctly classified as a cycle, and a self-loop is always a cycle under both
orientations.
*/

use super::*;

/// Per-node traversal state. A node is `OnStack` exactly while its call frame is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum VisitState {
    #[default]
    Unvisited,
    OnStack,
    Finished,
}

#[derive(Debug, Clone)]
struct StackFrame {
    node: Node,
    /// Edge id this frame was entered through; `None` for component roots
    arrival: Option<EdgeId>,
    /// Index of the next unprocessed entry in the node's neighbor list
    next_link: usize,
    first_call: bool,
}

impl StackFrame {
    fn new(node: Node, arrival: Option<EdgeId>) -> Self {
        Self {
            node,
            arrival,
            next_link: 0,
            first_call: true,
        }
    }
}

/// Events yielded by [`DepthFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsStep {
    /// The node was reached for the first time
    Discover(Node),
    /// All neighbors of the node have been processed
    Finish(Node),
}

/// Resumable depth-first walk over an [`AdjMap`], yielding [`DfsStep`] events.
///
/// The discovery sequence is the classic DFS pre-order; the finish sequence is the
/// post-order. Neighbor lists are processed in edge insertion order, and restarts in
/// unreached components (if enabled) pick the unvisited node with the smallest dense id,
/// i.e. in first-appearance order. The cycle flag accumulates across components and can
/// be queried at any point via [`DepthFirst::cycle_detected`].
///
/// # Example
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let graph = AdjMap::from_edges([(0, 1), (1, 2)], Orientation::Directed);
/// let start = graph.node_of(&0).unwrap();
///
/// let mut dfs = DepthFirst::new(&graph, start);
/// let discovered: Vec<_> = (&mut dfs)
///     .filter_map(|step| match step {
///         DfsStep::Discover(u) => Some(*graph.label_of(u)),
///         DfsStep::Finish(_) => None,
///     })
///     .collect();
///
/// assert_eq!(discovered, [0, 1, 2]);
/// assert!(!dfs.cycle_detected());
/// ```
pub struct DepthFirst<'a, N> {
    graph: &'a AdjMap<N>,
    states: Vec<VisitState>,
    call_stack: Vec<StackFrame>,
    potentially_unvisited: usize,
    restart: bool,
    cycle_found: bool,
}

impl<'a, N: NodeId> DepthFirst<'a, N> {
    /// Creates a walk starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a AdjMap<N>, start: Node) -> Self {
        assert!((start as usize) < graph.len());

        Self {
            graph,
            states: vec![Default::default(); graph.len()],
            call_stack: vec![StackFrame::new(start, None)],
            potentially_unvisited: 0,
            restart: false,
            cycle_found: false,
        }
    }

    /// Creates a walk covering the entire vertex set in first-appearance order,
    /// restarting in every unreached component.
    pub fn full(graph: &'a AdjMap<N>) -> Self {
        Self {
            graph,
            states: vec![Default::default(); graph.len()],
            call_stack: Vec::new(),
            potentially_unvisited: 0,
            restart: true,
            cycle_found: false,
        }
    }

    /// Once the walk from the start node drains, continue from yet unvisited nodes
    /// (in first-appearance order) until the whole vertex set is covered.
    pub fn set_restart_at_unvisited(&mut self, restart: bool) {
        self.restart = restart;
    }

    /// Once the walk from the start node drains, continue from yet unvisited nodes
    /// (in first-appearance order) until the whole vertex set is covered.
    pub fn restart_at_unvisited(mut self, restart: bool) -> Self {
        self.set_restart_at_unvisited(restart);
        self
    }

    /// Returns *true* if any back edge has been found so far.
    /// The flag accumulates across components and is never reset.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_found
    }

    /// Searches for the unvisited node with the smallest dense id and opens a fresh
    /// root frame there. Returns *false* if every node has been visited.
    fn try_restart_at_unvisited(&mut self) -> bool {
        while self.potentially_unvisited < self.graph.len() {
            if self.states[self.potentially_unvisited] == VisitState::Unvisited {
                let u = self.potentially_unvisited as Node;
                self.call_stack.push(StackFrame::new(u, None));
                return true;
            }

            self.potentially_unvisited += 1;
        }
        false
    }
}

impl<'a, N: NodeId> Iterator for DepthFirst<'a, N> {
    type Item = DfsStep;

    fn next(&mut self) -> Option<Self::Item> {
        /*
        DFS is typically described recursively, which has two issues here:
         1.) We cannot easily build an iterator from it
         2.) For large graphs we get stack overflows

        To overcome these, the call stack is explicit: each frame stores the node, the
        edge it was entered through, and a cursor into its neighbor list. The whole
        computation is wrapped in a loop so we can pause after emitting an event and
        resume by reentering the function.
        */

        'recurse: loop {
            let Some(frame) = self.call_stack.last_mut() else {
                if self.restart && self.try_restart_at_unvisited() {
                    continue 'recurse;
                }
                return None;
            };

            let u = frame.node;

            if frame.first_call {
                frame.first_call = false;
                self.states[u as usize] = VisitState::OnStack;
                return Some(DfsStep::Discover(u));
            }

            let links = self.graph.links_of(u);
            while frame.next_link < links.len() {
                let (v, id) = links[frame.next_link];
                frame.next_link += 1;

                match self.states[v as usize] {
                    VisitState::Unvisited => {
                        self.call_stack.push(StackFrame::new(v, Some(id)));
                        continue 'recurse;
                    }
                    VisitState::OnStack => {
                        // back edge; in the undirected case the entry sharing the
                        // arrival edge id is the walk backtracking, not a cycle
                        if self.graph.is_directed() || frame.arrival != Some(id) {
                            self.cycle_found = true;
                        }
                    }
                    VisitState::Finished => {}
                }
            }

            self.states[u as usize] = VisitState::Finished;
            self.call_stack.pop();
            return Some(DfsStep::Finish(u));
        }
    }
}

impl<'a, N: NodeId> std::iter::FusedIterator for DepthFirst<'a, N> {}

/// Provides traversal entry points directly on the graph.
pub trait Traversal<N: NodeId> {
    /// Returns a depth-first walk starting at `start`.
    /// ** Panics if `start >= n` **
    fn depth_first(&self, start: Node) -> DepthFirst<'_, N>;

    /// Returns a depth-first walk covering the entire vertex set
    fn depth_first_full(&self) -> DepthFirst<'_, N>;
}

impl<N: NodeId> Traversal<N> for AdjMap<N> {
    fn depth_first(&self, start: Node) -> DepthFirst<'_, N> {
        DepthFirst::new(self, start)
    }

    fn depth_first_full(&self) -> DepthFirst<'_, N> {
        DepthFirst::full(self)
    }
}

/// Outcome of [`traverse_with_cycle_detection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport<N> {
    /// Global discovery order: first the component of the start node, then every
    /// remaining component in first-appearance order. Contains every node exactly once.
    pub order: Vec<N>,
    /// *true* if any back edge (including a self-loop) exists anywhere in the graph,
    /// also in components unreachable from the start node
    pub cycle_detected: bool,
}

/// Builds a graph from `edges` and reports its depth-first traversal order from `start`
/// together with a cycle flag.
///
/// The vertex set is exactly the set of edge endpoints; components unreachable from
/// `start` are traversed afterwards in first-appearance order, so the returned order
/// covers every node of the graph.
///
/// # Errors
/// [`GraphError::StartNotFound`] if `start` is not an endpoint of any edge.
///
/// # Example
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let report =
///     traverse_with_cycle_detection([("a", "b"), ("b", "c")], &"a", Orientation::Directed)
///         .unwrap();
///
/// assert_eq!(report.order, ["a", "b", "c"]);
/// assert!(!report.cycle_detected);
/// ```
pub fn traverse_with_cycle_detection<N, E>(
    edges: impl IntoIterator<Item = E>,
    start: &N,
    orientation: Orientation,
) -> Result<TraversalReport<N>>
where
    N: NodeId,
    E: Into<Edge<N>>,
{
    let graph = AdjMap::from_edges(edges, orientation);
    let start = graph.node_of(start).ok_or(GraphError::StartNotFound)?;

    let mut dfs = graph.depth_first(start).restart_at_unvisited(true);
    let mut order = Vec::with_capacity(graph.len());
    for step in dfs.by_ref() {
        if let DfsStep::Discover(u) = step {
            order.push(graph.label_of(u).clone());
        }
    }

    Ok(TraversalReport {
        order,
        cycle_detected: dfs.cycle_detected(),
    })
}
