// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/prop_test.rs
// Property tests for the algebraic laws of the core operations

use proptest::prelude::*;
use self_calculus::*;

/// Leaves valid under `binders` open binders: variables only point at
/// binders that exist, so generated terms are closed at that depth
fn arb_leaf(binders: usize) -> BoxedStrategy<Term> {
    if binders == 0 {
        prop_oneof![Just(Term::typ()), Just(Term::refer("free"))].boxed()
    } else {
        prop_oneof![
            Just(Term::typ()),
            Just(Term::refer("free")),
            (0..binders).prop_map(Term::var),
        ]
        .boxed()
    }
}

/// Terms of bounded height. The binder count grows by one into lambda
/// bodies and `All` domains, by two into `All` codomains. With
/// `with_eras` the erasure flags are randomized; otherwise every flag is
/// false (the two evaluators only promise agreement on erasure-free
/// terms).
fn arb_term(binders: usize, height: u32, with_eras: bool) -> BoxedStrategy<Term> {
    if height == 0 {
        return arb_leaf(binders);
    }
    let eras = if with_eras {
        any::<bool>().boxed()
    } else {
        Just(false).boxed()
    };
    prop_oneof![
        arb_leaf(binders),
        (
            eras.clone(),
            arb_term(binders + 1, height - 1, with_eras),
            arb_term(binders + 2, height - 1, with_eras),
        )
            .prop_map(|(e, bind, body)| Term::all(e, "s", "x", bind, body)),
        (eras.clone(), arb_term(binders + 1, height - 1, with_eras))
            .prop_map(|(e, body)| Term::lam(e, "x", body)),
        (
            eras,
            arb_term(binders, height - 1, with_eras),
            arb_term(binders, height - 1, with_eras),
        )
            .prop_map(|(e, func, argm)| Term::app(e, func, argm)),
        (
            arb_term(binders, height - 1, with_eras),
            arb_term(binders, height - 1, with_eras),
        )
            .prop_map(|(typ, expr)| Term::ann(false, typ, expr)),
    ]
    .boxed()
}

proptest! {
    #[test]
    fn prop_shift_zero_is_identity(term in arb_term(3, 4, true), dep in 0usize..4) {
        prop_assert_eq!(shift(&term, 0, dep), term);
    }

    #[test]
    fn prop_shift_composes(
        term in arb_term(3, 4, true),
        i in 0usize..3,
        j in 0usize..3,
        dep in 0usize..3,
    ) {
        prop_assert_eq!(
            shift(&shift(&term, j, dep), i, dep),
            shift(&term, i + j, dep)
        );
    }

    #[test]
    fn prop_hoas_roundtrip_on_closed_terms(term in arb_term(0, 4, true)) {
        prop_assert_eq!(from_hoas(&to_hoas(&term, &[]), 0), term);
    }

    // Height 2 can generate a self-applying lambda but never apply it to
    // one (that takes height 3), so reduction always terminates here
    #[test]
    fn prop_evaluators_agree(term in arb_term(0, 2, false)) {
        let module = Module::new();
        prop_assert_eq!(eval_term(&module, &term), reduce(&module, &term));
    }

    #[test]
    fn prop_normalize_idempotent(term in arb_term(0, 2, false)) {
        let module = Module::new();
        let once = normalize(&module, &term);
        prop_assert_eq!(normalize(&module, &once), once.clone());
    }

    #[test]
    fn prop_erasure_is_idempotent(term in arb_term(0, 4, true)) {
        let once = erase(&term);
        prop_assert_eq!(erase(&once), once.clone());
    }

    #[test]
    fn prop_union_find_laws(pairs in prop::collection::vec((0usize..6, 0usize..6), 0..10)) {
        let mut store = DisjointSet::new();
        let mut handles = Vec::new();
        for i in 0..6u64 {
            let (next, h) = store.fresh(i);
            store = next;
            handles.push(h);
        }
        for (a, b) in pairs {
            store = store.union(handles[a], handles[b]);
        }

        // find terminates and resolves every handle to a root whose
        // descriptor matches the class descriptor
        for &h in &handles {
            let (root, _, descr) = store.find(h);
            prop_assert_eq!(store.find(root).0, root);
            prop_assert_eq!(store.descriptor(h), descr);
        }

        // Equivalence is reflexive, symmetric and transitive
        for &a in &handles {
            prop_assert!(store.equivalent(a, a));
            for &b in &handles {
                prop_assert_eq!(store.equivalent(a, b), store.equivalent(b, a));
                for &c in &handles {
                    if store.equivalent(a, b) && store.equivalent(b, c) {
                        prop_assert!(store.equivalent(a, c));
                    }
                }
            }
        }
    }
}
