/*!
# Disjoint-Set Union

Union-find over a fixed universe of dense node ids, with iterative two-pass path
compression and union by rank. After any sequence of operations, `find(a) == find(b)`
holds exactly if `a` and `b` have been unioned (directly or transitively) or are equal.
*/

use crate::node::*;

/// Tracks a partition of `0..n` into disjoint sets, supporting fast merge and
/// same-set queries.
///
/// # Example
/// ```
/// use lgraphs::utils::DisjointSets;
///
/// let mut dsu = DisjointSets::new(4);
/// assert!(dsu.union(0, 1));
/// assert!(dsu.union(1, 2));
/// assert!(!dsu.union(0, 2)); // already merged
///
/// assert!(dsu.same_set(0, 2));
/// assert!(!dsu.same_set(0, 3));
/// assert_eq!(dsu.number_of_sets(), 2);
/// ```
#[derive(Clone)]
pub struct DisjointSets {
    parent: Vec<Node>,
    rank: Vec<NumNodes>,
}

impl DisjointSets {
    /// Creates `n` singleton sets of rank 0, each node its own parent.
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the canonical representative of the set containing `u`.
    ///
    /// Two-pass: first walk to the root, then point every node on the walked
    /// path directly at it.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        while self.parent[u as usize] != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`, attaching the lower-rank root
    /// beneath the higher-rank one. Equal ranks increment the surviving root's rank.
    ///
    /// Returns *true* if a merge happened and *false* if both were already in one set.
    /// ** Panics if `a >= n || b >= n` **
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }

        if self.rank[a as usize] < self.rank[b as usize] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b as usize] = a;
        if self.rank[a as usize] == self.rank[b as usize] {
            self.rank[a as usize] += 1;
        }

        true
    }

    /// Returns *true* if `a` and `b` are in the same set
    /// ** Panics if `a >= n || b >= n` **
    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of disjoint sets, i.e. the number of self-parented roots
    pub fn number_of_sets(&self) -> NumNodes {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(u, &p)| u as Node == p)
            .count() as NumNodes
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn singletons() {
        let mut dsu = DisjointSets::new(5);
        assert_eq!(dsu.number_of_sets(), 5);
        for u in 0..5 {
            assert_eq!(dsu.find(u), u);
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut dsu = DisjointSets::new(6);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert!(!dsu.same_set(1, 3));

        assert!(dsu.union(1, 2));
        assert!(dsu.same_set(0, 3));
        assert!(!dsu.same_set(0, 4));
        assert_eq!(dsu.number_of_sets(), 3);
    }

    #[test]
    fn union_of_merged_sets_is_a_noop() {
        let mut dsu = DisjointSets::new(3);
        assert!(dsu.union(0, 1));
        assert!(!dsu.union(1, 0));
        assert_eq!(dsu.number_of_sets(), 2);
    }

    #[test]
    fn equal_rank_union_increments_survivor() {
        let mut dsu = DisjointSets::new(4);
        dsu.union(0, 1); // rank of survivor becomes 1
        dsu.union(2, 3); // rank of survivor becomes 1
        dsu.union(0, 2); // equal ranks again, survivor reaches rank 2

        let root = dsu.find(0);
        assert_eq!(dsu.rank[root as usize], 2);
        assert_eq!(dsu.number_of_sets(), 1);
    }

    #[test]
    fn path_compression_flattens() {
        let mut dsu = DisjointSets::new(8);
        for u in 0..7 {
            dsu.union(u, u + 1);
        }

        let root = dsu.find(0);
        for u in 0..8 {
            dsu.find(u);
            assert_eq!(dsu.parent[u as usize], root);
        }
    }

    #[test]
    fn matches_naive_labeling() {
        let n: NumNodes = 200;
        let rng = &mut Pcg64::seed_from_u64(0x5eed);

        let mut dsu = DisjointSets::new(n);
        let mut labels: Vec<Node> = (0..n).collect();

        for _ in 0..300 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);

            let merged = dsu.union(a, b);
            assert_eq!(merged, labels[a as usize] != labels[b as usize]);

            let (old, new) = (labels[a as usize], labels[b as usize]);
            if old != new {
                labels.iter_mut().for_each(|l| {
                    if *l == old {
                        *l = new;
                    }
                });
            }
        }

        for a in 0..n {
            for b in 0..n {
                assert_eq!(
                    dsu.same_set(a, b),
                    labels[a as usize] == labels[b as usize]
                );
            }
        }
    }
}
