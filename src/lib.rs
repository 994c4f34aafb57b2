/*!
`lgraphs` is a small graph algorithms library designed for graphs that are
- **l**abelled : Nodes are arbitrary opaque values (strings, ids, ...) rather than dense integers
- **l**ightweight : A graph is built fresh from an edge list per call, used, and discarded

# Representation

Node labels may be any type implementing [`NodeId`](crate::node::NodeId) (i.e. `Clone + Eq + Hash`).
On construction, every distinct label is interned to a dense internal id `Node = u32` in
first-appearance order; all algorithms operate on these dense ids and translate back to labels
only when producing results. This keeps the label type fully opaque to the algorithms while
retaining the compact `Vec`-indexed state the algorithms want.

For **edges**, we use simple tuple-structs: `Edge(u, v)` for plain edges and
`WeightedEdge(u, v, w)` for edges carrying a weight.

### Directed vs Undirected

Directedness is chosen per graph via [`Orientation`](crate::repr::Orientation):

- In an **undirected** graph, inserting `(u, v)` stores mirrored entries in both neighbor
  lists; both entries share one edge id.
- In a **directed** graph, `(u, v)` is stored once and has orientation.

# Algorithms

Three classical algorithms are provided, each returning a structured result for the caller
to render as it sees fit:

- [`traverse_with_cycle_detection`](crate::algo::traverse_with_cycle_detection): depth-first
  traversal covering the entire graph (disconnected components included) with back-edge
  cycle detection for both orientations,
- [`minimum_spanning_forest`](crate::algo::minimum_spanning_forest): Kruskal's algorithm
  over a union-find structure, reporting the selected edges, total weight, and the number
  of connected components in the outcome forest,
- [`topological_order`](crate::algo::topological_order): depth-first dependency ordering
  that fails with [`GraphError::CycleDetected`](crate::error::GraphError) instead of
  returning a partial order.

Lower-level access is available via [`repr::AdjMap`] and the resumable
[`algo::DepthFirst`] event iterator that the traversal-based algorithms share.

# Determinism

All outputs are deterministic functions of the input sequence: neighbor lists preserve edge
insertion order, restarts in unreached components pick unvisited nodes in first-appearance
order, and equal-weight edges are consumed in input order (stable sort). Re-running any
operation on the same input yields the identical result.

# Usage

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let order = topological_order(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
assert_eq!(order, ["a", "b", "c"]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod repr;
pub mod utils;

/// `lgraphs::prelude` includes definitions for nodes, edges, errors, and the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, repr::*};
}
