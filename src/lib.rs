// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Self Calculus library

pub mod ast;
pub mod core;
pub mod eval;
pub mod syntax;

// Re-export commonly used items
pub use ast::{Def, Module, Term, ERASED};
pub use core::equiv::{DisjointSet, Handle};
pub use core::erase::erase;
pub use core::subst::{shift, subst};
pub use eval::{deref, eval_term, from_hoas, normalize, reduce, to_hoas, TermH};
pub use syntax::{parse_def_str, parse_module_str, parse_term_str, show_term};
