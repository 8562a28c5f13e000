/// Core evaluation logic.
///
/// Walks the AST and computes a numeric result, dispatching exhaustively on
/// the node variant.
pub mod core;

/// The fixed registry of built-in functions and constants.
///
/// Builtins are consulted before the environment, so a user definition can
/// never shadow one.
pub mod builtin;

/// The environment overlay.
///
/// An immutable name → binding mapping extended by scoped definitions and
/// consulted by the evaluator.
pub mod env;
