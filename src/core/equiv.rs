// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/equiv.rs
// Persistent disjoint-set store backing term-class equivalence

/// Handle to an equivalence class member. Handles are allocated
/// sequentially by `fresh` and never reused.
pub type Handle = usize;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    /// Class representative: merge rank plus the class descriptor
    /// (an externally computed structural hash)
    Root { rank: u32, descr: u64 },
    /// Link toward the representative. The link graph is a forest:
    /// every handle resolves to exactly one root.
    Link { to: Handle },
}

/// A purely functional union-find: every operation returns a new store,
/// the receiver is never mutated. `find` follows links without path
/// compression, so its cost is the current chain length; that is a
/// simplicity trade-off, not a correctness requirement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisjointSet {
    nodes: Vec<Node>,
}

impl DisjointSet {
    pub fn new() -> Self {
        DisjointSet { nodes: Vec::new() }
    }

    /// Number of handles allocated so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate the next handle as a singleton class holding `descr`
    pub fn fresh(&self, descr: u64) -> (DisjointSet, Handle) {
        let handle = self.nodes.len();
        let mut nodes = self.nodes.clone();
        nodes.push(Node::Root { rank: 0, descr });
        (DisjointSet { nodes }, handle)
    }

    /// Follow links to the representative of `p`'s class, returning the
    /// representative handle, its rank and its descriptor
    pub fn find(&self, p: Handle) -> (Handle, u32, u64) {
        let mut at = p;
        loop {
            match &self.nodes[at] {
                Node::Root { rank, descr } => return (at, *rank, *descr),
                Node::Link { to } => at = *to,
            }
        }
    }

    /// Merge the classes of `p1` and `p2` by rank. The lower-rank root
    /// links to the higher-rank one, which is left unchanged. On a rank
    /// tie the survivor's rank increments and it takes `p2`'s descriptor
    /// (right-biased tie policy).
    pub fn union(&self, p1: Handle, p2: Handle) -> DisjointSet {
        let (r1, k1, _) = self.find(p1);
        let (r2, k2, d2) = self.find(p2);
        if r1 == r2 {
            return self.clone();
        }
        let mut nodes = self.nodes.clone();
        if k1 < k2 {
            nodes[r1] = Node::Link { to: r2 };
        } else if k1 > k2 {
            nodes[r2] = Node::Link { to: r1 };
        } else {
            nodes[r1] = Node::Link { to: r2 };
            nodes[r2] = Node::Root {
                rank: k2 + 1,
                descr: d2,
            };
        }
        DisjointSet { nodes }
    }

    /// Descriptor stored at `p`'s representative
    pub fn descriptor(&self, p: Handle) -> u64 {
        let (_, _, descr) = self.find(p);
        descr
    }

    /// True iff both handles resolve to the same representative
    pub fn equivalent(&self, p1: Handle, p2: Handle) -> bool {
        let (r1, _, _) = self.find(p1);
        let (r2, _, _) = self.find(p2);
        r1 == r2
    }
}
