// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/eval/hoas.rs
// Higher-order term form and the index <-> closure bridge

use std::rc::Rc;

use crate::ast::Term;

/// Binder body represented as a host closure over one bound value
pub type Body1 = Rc<dyn Fn(TermH) -> TermH>;
/// Binder body over two bound values (an `All` codomain: self, parameter)
pub type Body2 = Rc<dyn Fn(TermH, TermH) -> TermH>;

// ============================================================================
// Higher-order terms
// ============================================================================

/// Mirror of `Term` where binders are callable mappings instead of
/// indices: substitution becomes closure invocation. Values of this type
/// only live for the duration of a single reduce/normalize call and are
/// never persisted.
///
/// `VarH` plays two roles: a residual free index carried over by
/// `to_hoas`, and a depth-tagged marker introduced by `from_hoas` while
/// quoting. Closed terms only ever see the marker role.
#[derive(Clone)]
pub enum TermH {
    VarH { indx: usize },
    RefH { name: String },
    TypH,
    AllH {
        eras: bool,
        self_name: String,
        name: String,
        bind: Body1,
        body: Body2,
    },
    LamH { eras: bool, name: String, body: Body1 },
    AppH {
        eras: bool,
        func: Box<TermH>,
        argm: Box<TermH>,
    },
    AnnH {
        done: bool,
        typ: Box<TermH>,
        expr: Box<TermH>,
    },
}

// ============================================================================
// Index form -> closure form
// ============================================================================

/// Convert an index-based term into closure form. `vars` is the
/// positional list of already-built substitutes for the open binders,
/// innermost first; a bound index resolves to its entry, any deeper or
/// free index stays index-keyed.
pub fn to_hoas(term: &Term, vars: &[TermH]) -> TermH {
    match term {
        Term::Var { indx } => match vars.get(*indx) {
            Some(value) => value.clone(),
            None => TermH::VarH { indx: *indx },
        },

        Term::Ref { name } => TermH::RefH { name: name.clone() },

        Term::Typ => TermH::TypH,

        Term::All {
            eras,
            self_name,
            name,
            bind,
            body,
        } => {
            let bind_term = (**bind).clone();
            let body_term = (**body).clone();
            let bind_vars = vars.to_vec();
            let body_vars = vars.to_vec();
            TermH::AllH {
                eras: *eras,
                self_name: self_name.clone(),
                name: name.clone(),
                bind: Rc::new(move |s| {
                    let mut vars = Vec::with_capacity(bind_vars.len() + 1);
                    vars.push(s);
                    vars.extend(bind_vars.iter().cloned());
                    to_hoas(&bind_term, &vars)
                }),
                body: Rc::new(move |s, x| {
                    let mut vars = Vec::with_capacity(body_vars.len() + 2);
                    vars.push(x);
                    vars.push(s);
                    vars.extend(body_vars.iter().cloned());
                    to_hoas(&body_term, &vars)
                }),
            }
        }

        Term::Lam { eras, name, body } => {
            let body_term = (**body).clone();
            let body_vars = vars.to_vec();
            TermH::LamH {
                eras: *eras,
                name: name.clone(),
                body: Rc::new(move |x| {
                    let mut vars = Vec::with_capacity(body_vars.len() + 1);
                    vars.push(x);
                    vars.extend(body_vars.iter().cloned());
                    to_hoas(&body_term, &vars)
                }),
            }
        }

        Term::App { eras, func, argm } => TermH::AppH {
            eras: *eras,
            func: Box::new(to_hoas(func, vars)),
            argm: Box::new(to_hoas(argm, vars)),
        },

        Term::Ann { done, typ, expr } => TermH::AnnH {
            done: *done,
            typ: Box::new(to_hoas(typ, vars)),
            expr: Box::new(to_hoas(expr, vars)),
        },
    }
}

// ============================================================================
// Closure form -> index form
// ============================================================================

/// Quote a closure-form term back to indices. Each binder mapping is
/// invoked with a fresh marker tagged with the depth of its binder; when
/// that marker is reached again at depth `dep`, its index is the
/// level-to-index conversion `dep - level - 1`. An `All` codomain takes
/// two markers at consecutive depths (self, then the parameter).
///
/// For any closed term `t`, `from_hoas(&to_hoas(&t, &[]), 0)` is
/// structurally identical to `t`.
pub fn from_hoas(term: &TermH, dep: usize) -> Term {
    match term {
        TermH::VarH { indx } => {
            if *indx < dep {
                // Depth-tagged marker: level-to-index conversion
                Term::Var {
                    indx: dep - indx - 1,
                }
            } else {
                // Residual free index carried over by `to_hoas`: a marker's
                // level is always below the current depth, so this cannot
                // be one
                Term::Var { indx: *indx }
            }
        }

        TermH::RefH { name } => Term::Ref { name: name.clone() },

        TermH::TypH => Term::Typ,

        TermH::AllH {
            eras,
            self_name,
            name,
            bind,
            body,
        } => Term::All {
            eras: *eras,
            self_name: self_name.clone(),
            name: name.clone(),
            bind: Box::new(from_hoas(&bind(TermH::VarH { indx: dep }), dep + 1)),
            body: Box::new(from_hoas(
                &body(TermH::VarH { indx: dep }, TermH::VarH { indx: dep + 1 }),
                dep + 2,
            )),
        },

        TermH::LamH { eras, name, body } => Term::Lam {
            eras: *eras,
            name: name.clone(),
            body: Box::new(from_hoas(&body(TermH::VarH { indx: dep }), dep + 1)),
        },

        TermH::AppH { eras, func, argm } => Term::App {
            eras: *eras,
            func: Box::new(from_hoas(func, dep)),
            argm: Box::new(from_hoas(argm, dep)),
        },

        TermH::AnnH { done, typ, expr } => Term::Ann {
            done: *done,
            typ: Box::new(from_hoas(typ, dep)),
            expr: Box::new(from_hoas(expr, dep)),
        },
    }
}
