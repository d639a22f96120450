// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/equiv_test.rs
// Tests the persistent disjoint-set store

use self_calculus::*;

#[test]
fn test_fresh_allocates_sequential_handles() {
    let store = DisjointSet::new();
    let (store, x) = store.fresh(10);
    let (store, y) = store.fresh(20);
    let (store, z) = store.fresh(30);
    assert_eq!((x, y, z), (0, 1, 2));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_fresh_descriptor() {
    let (store, x) = DisjointSet::new().fresh(42);
    assert_eq!(store.descriptor(x), 42);
    assert_eq!(store.find(x), (x, 0, 42));
}

#[test]
fn test_union_makes_equivalent_with_right_biased_descriptor() {
    // fresh(10) = x; fresh(20) = y; after union(x, y) both descriptors
    // are 20: on a rank tie the right side's descriptor wins
    let (store, x) = DisjointSet::new().fresh(10);
    let (store, y) = store.fresh(20);
    let store = store.union(x, y);
    assert!(store.equivalent(x, y));
    assert_eq!(store.descriptor(x), 20);
    assert_eq!(store.descriptor(y), 20);
}

#[test]
fn test_union_is_persistent() {
    // The original store is untouched; the union lives only in the new one
    let (store, x) = DisjointSet::new().fresh(1);
    let (before, y) = store.fresh(2);
    let after = before.union(x, y);
    assert!(!before.equivalent(x, y));
    assert!(after.equivalent(x, y));
}

#[test]
fn test_union_same_class_is_noop() {
    let (store, x) = DisjointSet::new().fresh(1);
    let (store, y) = store.fresh(2);
    let merged = store.union(x, y);
    assert_eq!(merged.union(x, y), merged);
    assert_eq!(merged.union(y, x), merged);
}

#[test]
fn test_lower_rank_links_to_higher_unchanged() {
    // union(a, b) leaves a rank-1 root; a rank-0 singleton joining it
    // must not disturb that root's descriptor
    let (store, a) = DisjointSet::new().fresh(1);
    let (store, b) = store.fresh(2);
    let (store, c) = store.fresh(3);
    let store = store.union(a, b);
    let survivor_descr = store.descriptor(a);

    let store = store.union(c, a);
    assert!(store.equivalent(a, c));
    assert!(store.equivalent(b, c));
    assert_eq!(store.descriptor(c), survivor_descr);

    // Same when the singleton is on the right
    let (store2, d) = store.fresh(4);
    let store2 = store2.union(a, d);
    assert_eq!(store2.descriptor(d), survivor_descr);
}

#[test]
fn test_equivalence_is_reflexive_symmetric_transitive() {
    let mut store = DisjointSet::new();
    let mut handles = Vec::new();
    for i in 0..6 {
        let (next, h) = store.fresh(i);
        store = next;
        handles.push(h);
    }
    store = store.union(handles[0], handles[1]);
    store = store.union(handles[2], handles[3]);
    store = store.union(handles[1], handles[2]);

    for &h in &handles {
        assert!(store.equivalent(h, h));
    }
    assert!(store.equivalent(handles[0], handles[3]));
    assert!(store.equivalent(handles[3], handles[0]));
    // Chained through two unions
    assert!(store.equivalent(handles[0], handles[2]));
    // Untouched classes stay separate
    assert!(!store.equivalent(handles[0], handles[4]));
    assert!(!store.equivalent(handles[4], handles[5]));
}

#[test]
fn test_equivalence_survives_unrelated_unions() {
    let mut store = DisjointSet::new();
    let mut handles = Vec::new();
    for i in 0..8 {
        let (next, h) = store.fresh(i * 100);
        store = next;
        handles.push(h);
    }
    store = store.union(handles[0], handles[1]);
    assert!(store.equivalent(handles[0], handles[1]));

    store = store.union(handles[4], handles[5]);
    store = store.union(handles[6], handles[7]);
    store = store.union(handles[5], handles[7]);
    assert!(store.equivalent(handles[0], handles[1]));
    assert!(!store.equivalent(handles[0], handles[4]));
}

#[test]
fn test_find_resolves_through_link_chains() {
    // Build a chain of merges and check every handle still resolves to
    // the single representative (no compression happens, so this walks
    // real link chains)
    let mut store = DisjointSet::new();
    let mut handles = Vec::new();
    for i in 0..16 {
        let (next, h) = store.fresh(i);
        store = next;
        handles.push(h);
    }
    for window in handles.windows(2) {
        store = store.union(window[0], window[1]);
    }
    let (root, _, _) = store.find(handles[0]);
    for &h in &handles {
        let (r, _, _) = store.find(h);
        assert_eq!(r, root);
    }
}
