/*!
Minimum spanning forest construction via Kruskal's algorithm.

Edges are scanned in ascending weight order (stable, so equal weights keep their input
order) and selected whenever their endpoints lie in different components of a
[`DisjointSets`] structure. On connected input this yields the minimum spanning tree; on
disconnected input, a minimum spanning forest whose component count is reported rather
than silently hidden. The algorithm is correct for any totally ordered weight type,
including negative weights.
*/

use super::*;

/// Outcome of [`minimum_spanning_forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstReport<N, W> {
    /// Selected edges in selection (i.e. ascending weight) order
    pub edges: Vec<WeightedEdge<N, W>>,
    /// Sum of the selected edges' weights
    pub total_weight: W,
    /// Number of connected components in the outcome forest.
    /// `1` means the input was connected and the forest is a single spanning tree.
    pub component_count: NumNodes,
}

/// Builds a minimum spanning forest over the given vertex universe and weighted edges.
///
/// The universe consists of the supplied vertices (in iteration order, duplicates
/// ignored) plus any edge endpoints not among them. A connected input over `n` vertices
/// yields exactly `n - 1` selected edges and `component_count == 1`; an input with `k`
/// components yields `n - k` edges and `component_count == k`.
///
/// Equal-weight edges are consumed in input order, so the outcome is deterministic and
/// the total weight is invariant under permutations of equal-weight edges.
///
/// # Errors
/// [`GraphError::EmptyInput`] if `vertices` or `edges` is empty.
///
/// # Example
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let report = minimum_spanning_forest(
///     ["a", "b", "c", "d"],
///     [("a", "b", 1), ("b", "c", 2), ("c", "d", 1), ("a", "d", 10)],
/// )
/// .unwrap();
///
/// assert_eq!(report.total_weight, 4);
/// assert_eq!(report.component_count, 1);
/// ```
pub fn minimum_spanning_forest<N, W, E>(
    vertices: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = E>,
) -> Result<MstReport<N, W>>
where
    N: NodeId,
    W: EdgeWeight,
    E: Into<WeightedEdge<N, W>>,
{
    // the graph is only used as the label interner defining the dense universe
    let mut graph = AdjMap::new(Orientation::Undirected);
    for v in vertices {
        graph.add_node(v);
    }

    let edges: Vec<WeightedEdge<N, W>> = edges.into_iter().map(Into::into).collect();
    if graph.is_empty() || edges.is_empty() {
        return Err(GraphError::EmptyInput);
    }

    let endpoints = edges
        .iter()
        .map(|e| (graph.add_node(e.0.clone()), graph.add_node(e.1.clone())))
        .collect::<Vec<_>>();

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&i| edges[i].weight());

    let mut dsu = DisjointSets::new(graph.number_of_nodes());
    let mut selected = Vec::new();
    let mut total_weight = W::zero();

    for i in order {
        let (u, v) = endpoints[i];
        if dsu.union(u, v) {
            selected.push(edges[i].clone());
            total_weight = total_weight + edges[i].weight();
        }
    }

    Ok(MstReport {
        edges: selected,
        total_weight,
        component_count: dsu.number_of_sets(),
    })
}
