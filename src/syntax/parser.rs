// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for the Self Calculus using nom

use crate::ast::{Def, Module, Term};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{map, opt, recognize},
    error::{context, ErrorKind, ParseError, VerboseError},
    multi::{many0, many1},
    sequence::pair,
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

// ============================================================================
// Lexer
// ============================================================================

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    nom::sequence::delimited(multispace0, inner, multispace0)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Match a keyword with a word boundary, surrounded by whitespace
fn word<'a>(kw: &'static str) -> impl Fn(&'a str) -> ParseResult<'a, &'a str> {
    move |input| {
        let (input, _) = multispace0(input)?;
        let (rest, matched) = tag(kw)(input)?;
        if rest.chars().next().map_or(false, is_name_char) {
            Err(nom::Err::Error(VerboseError::from_error_kind(
                input,
                ErrorKind::Tag,
            )))
        } else {
            let (rest, _) = multispace0(rest)?;
            Ok((rest, matched))
        }
    }
}

fn identifier(input: &str) -> ParseResult<String> {
    context(
        "identifier",
        map(
            recognize(pair(
                alt((alpha1, tag("_"))),
                many0(alt((alphanumeric1, tag("_"), tag(".")))),
            )),
            |s: &str| s.to_string(),
        ),
    )(input)
}

// ============================================================================
// Terms
// ============================================================================
//
// Binder resolution is context-sensitive: each parse function threads the
// list of open binder names, innermost first. A name found in the list
// becomes a Var with its position as de Bruijn index; anything else is a
// free Ref.

fn term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    let (input, base) = base_term(input, vars)?;
    let (input, base) = app_suffixes(input, base, vars)?;

    // Trailing annotation binds loosest: `expr :: type`
    if let Ok((input, _)) = ws(tag("::"))(input) {
        let (input, typ) = term(input, vars)?;
        return Ok((input, Term::ann(false, typ, base)));
    }

    Ok((input, base))
}

fn base_term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    // Ordered by how much lookahead each form needs; every branch
    // backtracks fully on failure
    if let Ok((input, _)) = word("Type")(input) {
        return Ok((input, Term::Typ));
    }
    if let Ok(result) = all_term(input, vars) {
        return Ok(result);
    }
    if let Ok(result) = lam_term(input, vars) {
        return Ok(result);
    }
    if let Ok(result) = paren_term(input, vars) {
        return Ok(result);
    }
    name_term(input, vars)
}

/// `self(name : bind[;]) -> body` — the self name is optional. The domain
/// is parsed under one extra binder (self), the codomain under two (self,
/// then the parameter).
fn all_term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    let (input, _) = multispace0(input)?;
    let (input, self_name) = opt(identifier)(input)?;
    let self_name = self_name.unwrap_or_default();
    let (input, _) = ws(char('('))(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = ws(char(':'))(input)?;

    let mut bind_vars = vec![self_name.clone()];
    bind_vars.extend_from_slice(vars);
    let (input, bind) = term(input, &bind_vars)?;

    let (input, eras) = opt(ws(char(';')))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    let (input, _) = ws(tag("->"))(input)?;

    let mut body_vars = vec![name.clone(), self_name.clone()];
    body_vars.extend_from_slice(vars);
    let (input, body) = term(input, &body_vars)?;

    Ok((input, Term::all(eras.is_some(), self_name, name, bind, body)))
}

/// `(name[;]) => body`
fn lam_term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    let (input, _) = ws(char('('))(input)?;
    let (input, name) = identifier(input)?;
    let (input, eras) = opt(ws(char(';')))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    let (input, _) = ws(tag("=>"))(input)?;

    let mut body_vars = vec![name.clone()];
    body_vars.extend_from_slice(vars);
    let (input, body) = term(input, &body_vars)?;

    Ok((input, Term::lam(eras.is_some(), name, body)))
}

fn paren_term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    let (input, _) = ws(char('('))(input)?;
    let (input, inner) = term(input, vars)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, inner))
}

fn name_term<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, Term> {
    let (input, _) = multispace0(input)?;
    let (input, name) = identifier(input)?;
    match vars.iter().position(|bound| *bound == name) {
        Some(indx) => Ok((input, Term::var(indx))),
        None => Ok((input, Term::refer(name))),
    }
}

/// Curried application: zero or more `(argm[;])` suffixes
fn app_suffixes<'a>(
    mut input: &'a str,
    mut func: Term,
    vars: &[String],
) -> ParseResult<'a, Term> {
    loop {
        match app_argument(input, vars) {
            Ok((rest, (argm, eras))) => {
                func = Term::app(eras, func, argm);
                input = rest;
            }
            Err(_) => return Ok((input, func)),
        }
    }
}

fn app_argument<'a>(input: &'a str, vars: &[String]) -> ParseResult<'a, (Term, bool)> {
    let (input, _) = ws(char('('))(input)?;
    let (input, argm) = term(input, vars)?;
    let (input, eras) = opt(ws(char(';')))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    // `(x) => ...` is the start of a lambda, not an argument
    if input.trim_start().starts_with("=>") {
        return Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Tag,
        )));
    }
    Ok((input, (argm, eras.is_some())))
}

// ============================================================================
// Definitions and Modules
// ============================================================================

/// `name : type` followed by the defining term; terms are closed at the
/// top level (every name in them is a Var of some inner binder or a Ref)
fn def(input: &str) -> ParseResult<Def> {
    let (input, _) = multispace0(input)?;
    let (input, name) = context("definition name", identifier)(input)?;
    let (input, _) = ws(char(':'))(input)?;
    let (input, typ) = context("definition type", |i| term(i, &[]))(input)?;
    let (input, body) = context("definition term", |i| term(i, &[]))(input)?;
    Ok((input, Def::new(name, typ, body)))
}

fn module(input: &str) -> ParseResult<Module> {
    let (input, defs) = many1(def)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, defs.into_iter().collect()))
}

// ============================================================================
// Public API
// ============================================================================

pub fn parse_term_str(input: &str) -> Result<Term, String> {
    to_result(term(input, &[]))
}

pub fn parse_def_str(input: &str) -> Result<Def, String> {
    to_result(def(input))
}

pub fn parse_module_str(input: &str) -> Result<Module, String> {
    to_result(module(input))
}

fn to_result<T>(parsed: ParseResult<T>) -> Result<T, String> {
    match parsed {
        Ok((rest, result)) if rest.trim().is_empty() => Ok(result),
        Ok((rest, _)) => Err(format!("Parse succeeded but input remained: '{}'", rest)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(format!("Parse error: {:?}", e))
        }
        Err(nom::Err::Incomplete(_)) => Err("Incomplete input".to_string()),
    }
}
