// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Core term representation: terms, definitions and modules

use indexmap::IndexMap;

// ============================================================================
// Terms
// ============================================================================

/// A term of the calculus, with binders as de Bruijn indices.
///
/// `All` is the one unusual construct: a dependent function type that also
/// binds a name for the function's own value (a self type). Its domain is
/// scoped under ONE extra binder (self) and its codomain under TWO extra
/// binders (self, then the parameter). All depth arithmetic in the crate
/// follows from that shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Bound variable, as distance to its binder
    Var { indx: usize },
    /// Free reference to a module-level definition
    Ref { name: String },
    /// The type of types
    Typ,
    /// Dependent function type with a self binder:
    /// `self_name(name : bind[;]) -> body`
    All {
        eras: bool,
        self_name: String,
        name: String,
        bind: Box<Term>,
        body: Box<Term>,
    },
    /// Function value: `(name[;]) => body`
    Lam {
        eras: bool,
        name: String,
        body: Box<Term>,
    },
    /// Application: `func(argm[;])`
    App {
        eras: bool,
        func: Box<Term>,
        argm: Box<Term>,
    },
    /// Type annotation: `expr :: typ`
    Ann {
        done: bool,
        typ: Box<Term>,
        expr: Box<Term>,
    },
}

/// The opaque reference substituted for erased bound variables.
pub const ERASED: &str = "<erased>";

// ============================================================================
// Definitions and Modules
// ============================================================================

/// A named definition: `name : typ` followed by `term`
#[derive(Debug, Clone, PartialEq)]
pub struct Def {
    pub name: String,
    pub typ: Term,
    pub term: Term,
}

/// An ordered collection of definitions. Insertion order is preserved and
/// is part of the persisted form, so it must never be sorted away.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    defs: IndexMap<String, Def>,
}

impl Module {
    pub fn new() -> Self {
        Module {
            defs: IndexMap::new(),
        }
    }

    /// Insert a definition, keeping first-insertion position on redefinition
    pub fn define(&mut self, def: Def) {
        self.defs.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&Def> {
        self.defs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    pub fn defs(&self) -> impl Iterator<Item = &Def> {
        self.defs.values()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl FromIterator<Def> for Module {
    fn from_iter<I: IntoIterator<Item = Def>>(iter: I) -> Self {
        let mut module = Module::new();
        for def in iter {
            module.define(def);
        }
        module
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Term {
    pub fn var(indx: usize) -> Self {
        Term::Var { indx }
    }

    pub fn refer(name: impl Into<String>) -> Self {
        Term::Ref { name: name.into() }
    }

    pub fn typ() -> Self {
        Term::Typ
    }

    pub fn all(
        eras: bool,
        self_name: impl Into<String>,
        name: impl Into<String>,
        bind: Term,
        body: Term,
    ) -> Self {
        Term::All {
            eras,
            self_name: self_name.into(),
            name: name.into(),
            bind: Box::new(bind),
            body: Box::new(body),
        }
    }

    pub fn lam(eras: bool, name: impl Into<String>, body: Term) -> Self {
        Term::Lam {
            eras,
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn app(eras: bool, func: Term, argm: Term) -> Self {
        Term::App {
            eras,
            func: Box::new(func),
            argm: Box::new(argm),
        }
    }

    pub fn ann(done: bool, typ: Term, expr: Term) -> Self {
        Term::Ann {
            done,
            typ: Box::new(typ),
            expr: Box::new(expr),
        }
    }
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Term {
    /// True when no free index is `>= dep`, i.e. the term is closed at the
    /// given binder depth
    pub fn is_closed_at(&self, dep: usize) -> bool {
        match self {
            Term::Var { indx } => *indx < dep,
            Term::Ref { .. } | Term::Typ => true,
            Term::All { bind, body, .. } => {
                bind.is_closed_at(dep + 1) && body.is_closed_at(dep + 2)
            }
            Term::Lam { body, .. } => body.is_closed_at(dep + 1),
            Term::App { func, argm, .. } => func.is_closed_at(dep) && argm.is_closed_at(dep),
            Term::Ann { typ, expr, .. } => typ.is_closed_at(dep) && expr.is_closed_at(dep),
        }
    }

    /// True when the term contains no free variable indices at all
    pub fn is_closed(&self) -> bool {
        self.is_closed_at(0)
    }

    pub fn is_lam(&self) -> bool {
        matches!(self, Term::Lam { .. })
    }

    /// True when the outermost node can no longer step: anything but an
    /// application, reference or annotation
    pub fn is_whnf(&self) -> bool {
        !matches!(self, Term::App { .. } | Term::Ref { .. } | Term::Ann { .. })
    }
}

impl Def {
    pub fn new(name: impl Into<String>, typ: Term, term: Term) -> Self {
        Def {
            name: name.into(),
            typ,
            term,
        }
    }
}
