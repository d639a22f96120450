// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/mod.rs
// Term-level primitives: shifting, substitution, erasure, equivalence

pub mod equiv;
pub mod erase;
pub mod subst;
