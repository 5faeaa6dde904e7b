/// A Disjoint Set Union (DSU) with path compression and union by size.
///
/// Also tracks how many disjoint sets (circuits) currently exist, so full
/// connectivity is an O(1) check.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    num_components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            num_components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of `i`'s set, pointing every node on the way directly at it.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Unifies sets. Returns `true` if a merge actually occurred (sets were disjoint).
    ///
    /// The smaller tree goes under the larger one; on equal sizes `i`'s root survives.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        let (big, small) = if self.sizes[root_i] < self.sizes[root_j] {
            (root_j, root_i)
        } else {
            (root_i, root_j)
        };
        self.parent[small] = big;
        self.sizes[big] += self.sizes[small];
        self.num_components -= 1;
        true
    }

    /// Number of boxes in the circuit containing `i`.
    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }

    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// One entry per circuit, in root order.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut components = Vec::with_capacity(self.num_components);
        for i in 0..self.len() {
            if self.find(i) == i {
                components.push(self.sizes[i]);
            }
        }
        components
    }
}
