// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Rendering terms back to source syntax

use crate::ast::{Def, Module, Term};
use std::fmt;

// ============================================================================
// Term Rendering
// ============================================================================

/// Render a term using the given stack of in-scope binder names
/// (outermost first, pushed as binders are entered). Variables always
/// print by name; an index reaching outside the stack renders as `#n`,
/// which only shows up when printing open terms for debugging.
pub fn show_term(term: &Term, vars: &mut Vec<String>) -> String {
    match term {
        Term::Var { indx } => {
            if *indx < vars.len() {
                vars[vars.len() - 1 - indx].clone()
            } else {
                format!("#{}", indx)
            }
        }

        Term::Ref { name } => name.clone(),

        Term::Typ => "Type".to_string(),

        Term::All {
            eras,
            self_name,
            name,
            bind,
            body,
        } => {
            vars.push(self_name.clone());
            let bind_str = show_term(bind, vars);
            vars.push(name.clone());
            let body_str = show_term(body, vars);
            vars.pop();
            vars.pop();
            let semi = if *eras { ";" } else { "" };
            format!(
                "{}({} : {}{}) -> {}",
                self_name, name, bind_str, semi, body_str
            )
        }

        Term::Lam { eras, name, body } => {
            vars.push(name.clone());
            let body_str = show_term(body, vars);
            vars.pop();
            let semi = if *eras { ";" } else { "" };
            format!("({}{}) => {}", name, semi, body_str)
        }

        Term::App { eras, func, argm } => {
            let func_str = show_term(func, vars);
            let argm_str = show_term(argm, vars);
            let semi = if *eras { ";" } else { "" };
            // A non-atomic head would swallow the argument list on reparse
            let func_str = match **func {
                Term::Var { .. } | Term::Ref { .. } | Term::Typ | Term::App { .. } => func_str,
                _ => format!("({})", func_str),
            };
            format!("{}({}{})", func_str, argm_str, semi)
        }

        Term::Ann { typ, expr, .. } => {
            let expr_str = show_term(expr, vars);
            let typ_str = show_term(typ, vars);
            // Binders extend to the right and would absorb the `::`
            let expr_str = match **expr {
                Term::Lam { .. } | Term::All { .. } | Term::Ann { .. } => {
                    format!("({})", expr_str)
                }
                _ => expr_str,
            };
            format!("{} :: {}", expr_str, typ_str)
        }
    }
}

// ============================================================================
// Display Implementations
// ============================================================================

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", show_term(self, &mut Vec::new()))
    }
}

impl fmt::Display for Def {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {}\n{}", self.name, self.typ, self.term)
    }
}

/// The persisted module form: one `name : type` / `term` block per
/// definition, blank-line separated, in insertion order (never sorted)
impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, def) in self.defs().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", def)?;
        }
        Ok(())
    }
}
