// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/subst.rs
// Index shifting and capture-avoiding substitution

use crate::ast::Term;

// ============================================================================
// Shifting
// ============================================================================

/// Add `inc` to every free variable index `>= dep`; indices below `dep`
/// are bound locally and stay untouched.
///
/// Depth bookkeeping mirrors the binder shape of each construct: one new
/// binder entering a lambda body or an `All` domain (self), two entering an
/// `All` codomain (self, then the parameter). `shift(t, 0, d)` is the
/// identity for any `d`.
pub fn shift(term: &Term, inc: usize, dep: usize) -> Term {
    match term {
        Term::Var { indx } => {
            if *indx < dep {
                Term::Var { indx: *indx }
            } else {
                Term::Var { indx: indx + inc }
            }
        }

        Term::Ref { name } => Term::Ref { name: name.clone() },

        Term::Typ => Term::Typ,

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
            bind: Box::new(shift(bind, inc, dep + 1)),
            body: Box::new(shift(body, inc, dep + 2)),
        },

        Term::Lam { eras, name, body } => Term::Lam {
            eras: *eras,
            name: name.clone(),
            body: Box::new(shift(body, inc, dep + 1)),
        },

        Term::App { eras, func, argm } => Term::App {
            eras: *eras,
            func: Box::new(shift(func, inc, dep)),
            argm: Box::new(shift(argm, inc, dep)),
        },

        Term::Ann { done, typ, expr } => Term::Ann {
            done: *done,
            typ: Box::new(shift(typ, inc, dep)),
            expr: Box::new(shift(expr, inc, dep)),
        },
    }
}

// ============================================================================
// Substitution
// ============================================================================

/// Replace the variable at exactly index `dep` with `value`, removing that
/// binder: every free index above `dep` is decremented by one.
///
/// When descending past additional binders, `value` is re-shifted (by 1
/// for one new binder, by 2 for an `All` codomain) and `dep` bumped by the
/// same amount, so free variables inside `value` can never be captured by
/// the binders it is pushed through.
pub fn subst(term: &Term, value: &Term, dep: usize) -> Term {
    match term {
        Term::Var { indx } => {
            if *indx == dep {
                value.clone()
            } else if *indx > dep {
                Term::Var { indx: indx - 1 }
            } else {
                Term::Var { indx: *indx }
            }
        }

        Term::Ref { name } => Term::Ref { name: name.clone() },

        Term::Typ => Term::Typ,

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
            bind: Box::new(subst(bind, &shift(value, 1, 0), dep + 1)),
            body: Box::new(subst(body, &shift(value, 2, 0), dep + 2)),
        },

        Term::Lam { eras, name, body } => Term::Lam {
            eras: *eras,
            name: name.clone(),
            body: Box::new(subst(body, &shift(value, 1, 0), dep + 1)),
        },

        Term::App { eras, func, argm } => Term::App {
            eras: *eras,
            func: Box::new(subst(func, value, dep)),
            argm: Box::new(subst(argm, value, dep)),
        },

        Term::Ann { done, typ, expr } => Term::Ann {
            done: *done,
            typ: Box::new(subst(typ, value, dep)),
            expr: Box::new(subst(expr, value, dep)),
        },
    }
}
