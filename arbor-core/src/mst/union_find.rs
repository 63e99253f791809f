//! Disjoint-set forest for Kruskal's cycle checks.
//!
//! Uses union by rank and full path compression. Every structural touch
//! (initialisation, traversal step, relink, union) is charged to an operation
//! counter that the benchmark reports but the algorithm never consults.

/// Union-find over the elements `0..size`.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
    operations: u64,
}

impl DisjointSet {
    /// Creates `size` singleton sets.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new(3);
    /// assert_eq!(sets.set_count(), 3);
    /// assert_eq!(sets.find(2), 2);
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
            operations: (size as u64).saturating_mul(2),
        }
    }

    /// Returns the representative of `node`'s set, compressing the path so
    /// every visited node points straight at the root.
    ///
    /// A node outside the forest is its own representative.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        loop {
            self.operations += 1;
            match self.parent.get(root) {
                Some(&parent) if parent != root => root = parent,
                _ => break,
            }
        }

        let mut current = node;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            let next = *slot;
            *slot = root;
            self.operations += 1;
            current = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without touching the forest when both already share a
    /// set, which is exactly the case where the edge would close a cycle. On a
    /// rank tie the root of `left` survives and its rank grows by one.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new(4);
    /// assert!(sets.union(0, 1));
    /// assert!(sets.union(1, 2));
    /// assert!(!sets.union(0, 2));
    /// assert_eq!(sets.find(0), sets.find(2));
    /// assert_eq!(sets.set_count(), 2);
    /// ```
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        self.operations += 2;

        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        let Some(slot) = self.parent.get_mut(child) else {
            return false;
        };
        *slot = parent;
        if left_rank == right_rank {
            if let Some(rank) = self.rank.get_mut(parent) {
                *rank = rank.saturating_add(1);
            }
        }

        self.sets -= 1;
        self.operations += 1;
        true
    }

    fn rank_of(&self, root: usize) -> u8 {
        self.rank.get(root).copied().unwrap_or_default()
    }

    /// Returns the number of disjoint sets remaining.
    #[must_use]
    #[rustfmt::skip]
    pub const fn set_count(&self) -> usize { self.sets }

    /// Returns the number of structural touches performed so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> u64 { self.operations }
}
