// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/erase.rs
// Removal of computationally irrelevant content

use crate::ast::{Term, ERASED};
use crate::core::subst::subst;

/// Strip every subterm marked computationally irrelevant.
///
/// An erased lambda disappears: its bound variable is replaced throughout
/// the body by the opaque `Ref(ERASED)` placeholder and erasure continues
/// on the resulting body. An erased application keeps only its function.
/// Annotations carry no runtime content and vanish. Everything else
/// recurses structurally.
///
/// Nothing reachable after erasure may inspect the original erased value;
/// a placeholder occurrence is an inert neutral reference.
pub fn erase(term: &Term) -> Term {
    match term {
        Term::Var { indx } => Term::Var { indx: *indx },

        Term::Ref { name } => Term::Ref { name: name.clone() },

        Term::Typ => Term::Typ,

        // Types are never run, so `All` keeps its shape even when its
        // parameter is marked erased
        Term::All {
            eras,
            self_name,
            name,
            bind,
            body,
        } => Term::All {
            eras: *eras,
            self_name: self_name.clone(),
            name: name.clone(),
            bind: Box::new(erase(bind)),
            body: Box::new(erase(body)),
        },

        Term::Lam { eras, name, body } => {
            if *eras {
                erase(&subst(body, &Term::refer(ERASED), 0))
            } else {
                Term::Lam {
                    eras: false,
                    name: name.clone(),
                    body: Box::new(erase(body)),
                }
            }
        }

        Term::App { eras, func, argm } => {
            if *eras {
                erase(func)
            } else {
                Term::App {
                    eras: false,
                    func: Box::new(erase(func)),
                    argm: Box::new(erase(argm)),
                }
            }
        }

        Term::Ann { expr, .. } => erase(expr),
    }
}
