//! # mathlet
//!
//! mathlet is a small mathematical expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions with support
//! for scoped `Let` definitions, user-defined functions, and a registry of
//! built-in mathematical functions and constants.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::{core::evaluate, env::Environment},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches token spans to nodes for error reporting and substitution.
/// - Defines operators, their precedences, and binding representations.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// source code. It standardizes error reporting and carries detailed
/// information about failures, including the offending lexeme or name and
/// its position where one is available.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete runtime for source code. It exposes the phases individually so
/// consumers can stop at tokens or at the AST when that is all they need.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single line of source against a persistent environment.
///
/// A line that is a bare `Let` definition installs its binding into `env`
/// and produces no value. Any other line is evaluated and its numeric result
/// returned. Blank lines produce no value.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use mathlet::{eval_line, interpreter::evaluator::env::Environment};
///
/// let mut env = Environment::new();
///
/// assert!(eval_line("Let x = 3", &mut env).unwrap().is_none());
/// assert_eq!(eval_line("x + 1", &mut env).unwrap(), Some(4.0));
/// ```
pub fn eval_line(line: &str,
                 env: &mut Environment)
                 -> Result<Option<f64>, Box<dyn std::error::Error>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let node = parse(&tokens)?;

    if let Node::Definition { name, target, .. } = node {
        env.define(name, Rc::clone(&target));
        return Ok(None);
    }

    match evaluate(&node, env) {
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(Box::new(e)),
    }
}

/// Returns the final evaluation result after executing a script.
///
/// Each line of the provided source is evaluated in order against a shared
/// environment, so a definition on one line is visible to every later line.
/// If execution succeeds, it returns `Ok(())`; otherwise, it returns an
/// error with details about the failure. With `auto_print` set, the last
/// value any line produced is printed to standard output.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails on any line.
///
/// # Examples
/// ```
/// use mathlet::run_source;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "Let result = 2 + 2";
/// let res = run_source(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown symbol).
/// let source = "y + 1"; // 'y' is not defined
/// let res = run_source(source, false);
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut env = Environment::new();
    let mut result = None;

    for line in source.lines() {
        if let Some(value) = eval_line(line, &mut env)? {
            result = Some(value);
        }
    }

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
