/*!
Dependency ordering of a directed graph.

A depth-first topological sort: nodes are appended to a finish-order list once all their
successors are explored, and the reversed list is a valid topological order, provided no
back edge was found. The walk is aborted on the first back edge; a graph with a cycle has
no topological order, partial or otherwise.
*/

use super::*;

/// Computes a topological order of the directed graph given by an explicit vertex
/// universe plus an edge list.
///
/// Vertices are processed in the order they are supplied (duplicates are ignored); edge
/// endpoints absent from the universe are tolerated and treated as additional vertices.
/// Vertices without incident edges appear in the output exactly once, in their
/// deterministic visitation position. Re-running on the same input yields the identical
/// order.
///
/// # Errors
/// [`GraphError::CycleDetected`] if the graph contains any cycle. The sort is aborted on
/// the first back edge and no partial order is returned.
///
/// # Example
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let order = topological_order(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
/// assert_eq!(order, ["a", "b", "c"]);
///
/// let cyclic = topological_order(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]);
/// assert_eq!(cyclic.unwrap_err(), GraphError::CycleDetected);
/// ```
pub fn topological_order<N, E>(
    vertices: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = E>,
) -> Result<Vec<N>>
where
    N: NodeId,
    E: Into<Edge<N>>,
{
    let graph = AdjMap::with_vertices(vertices, edges, Orientation::Directed);

    let mut dfs = graph.depth_first_full();
    let mut finish_order = Vec::with_capacity(graph.len());

    while let Some(step) = dfs.next() {
        if dfs.cycle_detected() {
            return Err(GraphError::CycleDetected);
        }
        if let DfsStep::Finish(u) = step {
            finish_order.push(u);
        }
    }

    Ok(finish_order
        .iter()
        .rev()
        .map(|&u| graph.label_of(u).clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::prelude::*;
    use rand_pcg::Pcg64;

    use super::*;

    fn position_of<N: PartialEq>(order: &[N], node: &N) -> usize {
        order.iter().position(|n| n == node).unwrap()
    }

    fn assert_respects_edges<N: PartialEq + std::fmt::Debug>(order: &[N], edges: &[(N, N)]) {
        for (from, to) in edges {
            assert!(
                position_of(order, from) < position_of(order, to),
                "{from:?} must precede {to:?}"
            );
        }
    }

    #[test]
    fn chain() {
        let order = topological_order(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn closing_edge_flips_to_cycle() {
        let vertices = ["a", "b", "c"];
        let edges = vec![("a", "b"), ("b", "c")];

        assert!(topological_order(vertices, edges.clone()).is_ok());

        let mut cyclic = edges;
        cyclic.push(("c", "a"));
        assert_eq!(
            topological_order(["a", "b", "c"], cyclic).unwrap_err(),
            GraphError::CycleDetected
        );
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let res = topological_order(["a", "b"], [("a", "a")]);
        assert_eq!(res.unwrap_err(), GraphError::CycleDetected);
    }

    #[test]
    fn cycle_in_later_component_aborts() {
        let res = topological_order([0, 1, 2, 3], [(0, 1), (2, 3), (3, 2)]);
        assert_eq!(res.unwrap_err(), GraphError::CycleDetected);
    }

    #[test]
    fn isolated_vertices_appear_exactly_once() {
        let order = topological_order(["d", "a", "b", "c"], [("a", "b")]).unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().unique().count(), 4);
        assert_respects_edges(&order, &[("a", "b")]);
    }

    #[test]
    fn duplicate_vertices_are_ignored() {
        let order = topological_order(["a", "b", "a"], [("a", "b")]).unwrap();
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn endpoints_outside_the_universe_define_new_vertices() {
        let order = topological_order(["a"], [("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn empty_universe_yields_empty_order() {
        let order = topological_order(Vec::<u32>::new(), Vec::<(u32, u32)>::new()).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn dressing_order() {
        let vertices = [
            "undershorts",
            "pants",
            "belt",
            "shirt",
            "tie",
            "jacket",
            "socks",
            "shoes",
            "watch",
        ];
        let edges = [
            ("undershorts", "pants"),
            ("pants", "belt"),
            ("pants", "shoes"),
            ("shirt", "belt"),
            ("shirt", "tie"),
            ("tie", "jacket"),
            ("belt", "jacket"),
            ("socks", "shoes"),
        ];

        let order = topological_order(vertices, edges).unwrap();
        assert_eq!(order.len(), vertices.len());
        assert_eq!(order.iter().unique().count(), vertices.len());
        assert_respects_edges(&order, &edges);

        // bit-identical on a rerun
        assert_eq!(order, topological_order(vertices, edges).unwrap());
    }

    #[test]
    fn random_dags_always_sort() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for _ in 0..10 {
            let n: Node = 50;
            // edges only from smaller to larger ids, hence acyclic by construction
            let edges = (0..150)
                .map(|_| {
                    let u = rng.random_range(0..n - 1);
                    let v = rng.random_range(u + 1..n);
                    (u, v)
                })
                .collect_vec();

            let order = topological_order(0..n, edges.clone()).unwrap();
            assert_eq!(order.len(), n as usize);
            assert_respects_edges(&order, &edges);
        }
    }
}
