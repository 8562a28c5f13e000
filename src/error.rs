/// Errors produced while tokenizing raw input.
mod lex_error;
/// Errors produced while parsing a token range into an AST.
mod parse_error;
/// Errors produced while evaluating an AST node.
mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
