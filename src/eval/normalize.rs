// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/eval/normalize.rs
// Weak reduction and full normalization over the closure form

use std::rc::Rc;

use crate::ast::{Module, Term, ERASED};
use crate::eval::firstorder::deref;
use crate::eval::hoas::{from_hoas, to_hoas, TermH};

// ============================================================================
// Weak-head reduction
// ============================================================================

/// Reduce a closure-form term to weak-head form. A beta step is a plain
/// closure invocation: no index bookkeeping, no subtree copy.
///
/// References unfold through `deref`, subject to the same self-alias
/// guard as the first-order evaluator. An erased lambda invokes its body
/// with the opaque placeholder, never a real argument, so whatever is
/// later applied to it can never be inspected. An erased application
/// keeps only its function.
pub fn reduce_hoas(module: &Rc<Module>, term: &TermH) -> TermH {
    match term {
        TermH::RefH { name } => match deref(module, name) {
            Term::Ref { name: m } if m == *name => TermH::RefH { name: m },
            term => reduce_hoas(module, &to_hoas(&term, &[])),
        },

        TermH::LamH { eras, name, body } => {
            if *eras {
                reduce_hoas(module, &body(TermH::RefH { name: ERASED.to_string() }))
            } else {
                TermH::LamH {
                    eras: false,
                    name: name.clone(),
                    body: body.clone(),
                }
            }
        }

        TermH::AppH { eras, func, argm } => {
            if *eras {
                reduce_hoas(module, func)
            } else {
                let func = reduce_hoas(module, func);
                match func {
                    TermH::LamH { body, .. } => {
                        // Call-by-name: pass the argument unreduced
                        reduce_hoas(module, &body((**argm).clone()))
                    }
                    _ => TermH::AppH {
                        eras: false,
                        func: Box::new(func),
                        argm: Box::new(reduce_hoas(module, argm)),
                    },
                }
            }
        }

        TermH::AnnH { expr, .. } => reduce_hoas(module, expr),

        whnf => whnf.clone(),
    }
}

// ============================================================================
// Full normalization
// ============================================================================

/// Normalize a closure-form term: the same head rules as `reduce_hoas`,
/// then recursion into every child, including binder bodies. Binder
/// mappings are rebuilt as closures that normalize on invocation, sharing
/// the module by reference count.
pub fn normalize_hoas(module: &Rc<Module>, term: &TermH) -> TermH {
    match reduce_hoas(module, term) {
        TermH::AllH {
            eras,
            self_name,
            name,
            bind,
            body,
        } => {
            let bind_module = module.clone();
            let body_module = module.clone();
            TermH::AllH {
                eras,
                self_name,
                name,
                bind: Rc::new(move |s| normalize_hoas(&bind_module, &bind(s))),
                body: Rc::new(move |s, x| normalize_hoas(&body_module, &body(s, x))),
            }
        }

        TermH::LamH { eras, name, body } => {
            let body_module = module.clone();
            TermH::LamH {
                eras,
                name,
                body: Rc::new(move |x| normalize_hoas(&body_module, &body(x))),
            }
        }

        // Neutral application: a stuck head, but the argument still
        // normalizes
        TermH::AppH { eras, func, argm } => TermH::AppH {
            eras,
            func: Box::new(normalize_hoas(module, &func)),
            argm: Box::new(normalize_hoas(module, &argm)),
        },

        whnf => whnf,
    }
}

// ============================================================================
// Public Entry Points
// ============================================================================

/// Weak-head reduce an index-based term under `module`, going through the
/// closure form and back. Agrees with `eval_term` on weak-head results.
pub fn reduce(module: &Module, term: &Term) -> Term {
    let module = Rc::new(module.clone());
    from_hoas(&reduce_hoas(&module, &to_hoas(term, &[])), 0)
}

/// Fully normalize an index-based term under `module`. Idempotent:
/// normalizing a normal form returns it unchanged.
pub fn normalize(module: &Module, term: &Term) -> Term {
    let module = Rc::new(module.clone());
    from_hoas(&normalize_hoas(&module, &to_hoas(term, &[])), 0)
}
