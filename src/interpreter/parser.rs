/// Parser entry point and leading-token dispatch.
///
/// Recognizes grouping, leading unary operators, and the `Let` keyword, and
/// hands everything else to the precedence fold.
pub mod core;

/// The `Let` definition form.
///
/// Parses equations after `Let`, extracts value or function bindings, and
/// merges chained definitions into a single scoped node.
pub mod definition;

/// The precedence fold.
///
/// Resolves a flat run of operands and operators into one expression tree,
/// one precedence level at a time, without an operator stack.
pub mod fold;

/// Identifier forms inside an expression.
///
/// Distinguishes symbols from calls, and parses call argument lists.
pub mod ident;

/// Index-range views over the token sequence.
///
/// Lets the parser recurse into sub-ranges without copying token slices.
pub mod window;
