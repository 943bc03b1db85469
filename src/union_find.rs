/// Array-backed disjoint-set structure over star indices. Union by rank with
/// iterative path compression, so `find` never recurses regardless of how
/// degenerate the parent chains get.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n_stars: usize) -> Self {
        UnionFind {
            parent: (0..n_stars).collect(),
            rank: vec![0; n_stars],
        }
    }

    /// Returns the root of the component containing `n`, compressing the
    /// walked chain so repeated calls are near-constant time.
    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Merges the components containing `m` and `n`. Returns false if they
    /// were already in the same component.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let root_m = self.find(m);
        let root_n = self.find(n);
        if root_m == root_n {
            return false;
        }
        if self.rank[root_m] < self.rank[root_n] {
            self.parent[root_m] = root_n;
        } else if self.rank[root_m] > self.rank[root_n] {
            self.parent[root_n] = root_m;
        } else {
            self.parent[root_n] = root_m;
            self.rank[root_m] += 1;
        }
        true
    }

    pub(crate) fn connected(&mut self, m: usize, n: usize) -> bool {
        self.find(m) == self.find(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(i, uf.find(i));
        }
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn union_merges_components() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(uf.connected(0, 1));
        assert!(uf.connected(3, 4));
        assert!(!uf.connected(1, 3));
        assert!(uf.union(1, 4));
        assert!(uf.connected(0, 3));
    }

    #[test]
    fn union_of_same_component_is_rejected() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
    }

    #[test]
    fn find_is_idempotent_after_compression() {
        let mut uf = UnionFind::new(6);
        // Build a deliberately long chain
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);
        uf.union(3, 4);
        uf.union(4, 5);
        let root = uf.find(5);
        assert_eq!(root, uf.find(5));
        assert_eq!(root, uf.find(0));
    }

    #[test]
    fn components_match_reachability_over_unioned_pairs() {
        // Pairs unioned: {0,1}, {1,2}, {4,5}. Reachability over those pairs
        // partitions 0..6 into {0,1,2}, {3}, {4,5}.
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);
        let expected = [
            (0, 1, true),
            (0, 2, true),
            (1, 2, true),
            (0, 3, false),
            (3, 4, false),
            (4, 5, true),
            (2, 5, false),
        ];
        for (m, n, same) in expected {
            assert_eq!(same, uf.connected(m, n), "stars {m} and {n}");
        }
    }
}
