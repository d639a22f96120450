// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/eval/mod.rs
// The two evaluators: index-based weak-head reduction, and the
// closure-based reducer/normalizer behind the public reduce/normalize

pub mod firstorder;
pub mod hoas;
pub mod normalize;

pub use firstorder::{deref, eval_term};
pub use hoas::{from_hoas, to_hoas, TermH};
pub use normalize::{normalize, normalize_hoas, reduce, reduce_hoas};
