// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/eval/firstorder.rs
// Direct index-based call-by-name weak-head reducer

use crate::ast::{Module, Term};
use crate::core::subst::subst;

/// Look up `name` in the module.
///
/// An undefined name stays an opaque `Ref` so reduction treats it as a
/// stuck neutral term (open modules are supported, not an error). A
/// definition whose stored term is a `Ref` to its own name is returned
/// unexpanded: this is the narrow guard against that one infinite
/// unfolding; general reference cycles are NOT detected here.
pub fn deref(module: &Module, name: &str) -> Term {
    match module.get(name) {
        Some(def) => match &def.term {
            Term::Ref { name: m } if m == name => Term::Ref { name: m.clone() },
            term => term.clone(),
        },
        None => Term::refer(name),
    }
}

/// Reduce a term to weak-head normal form under `module`.
///
/// Call-by-name: an application reduces its function first and, on a
/// lambda, substitutes the argument UNREDUCED and keeps going. The
/// argument is only reduced on the path where no redex forms and the
/// application is rebuilt as a neutral term (applying a non-function is
/// left for an external checker to reject). No descent under binders.
pub fn eval_term(module: &Module, term: &Term) -> Term {
    match term {
        Term::App { eras, func, argm } => {
            let func = eval_term(module, func);
            match func {
                Term::Lam { body, .. } => eval_term(module, &subst(&body, argm, 0)),
                _ => Term::App {
                    eras: *eras,
                    func: Box::new(func),
                    argm: Box::new(eval_term(module, argm)),
                },
            }
        }

        Term::Ref { name } => match deref(module, name) {
            Term::Ref { name: m } if m == *name => Term::Ref { name: m },
            term => eval_term(module, &term),
        },

        Term::Ann { expr, .. } => eval_term(module, expr),

        // Var, Typ, All and Lam are already weak-head forms
        whnf => whnf.clone(),
    }
}
