use std::rc::Rc;

use crate::{
    ast::{Node, Span},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{definition::parse_let, fold::fold_expression, window::TokenWindow},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The `Let` keyword.
///
/// Not reserved by the lexer; it is an ordinary identifier the parser
/// recognizes when it leads a range.
pub const KEYWORD_LET: &str = "Let";

/// Parses a complete token sequence into one AST node.
///
/// This is the entry point for parsing. It wraps the sequence in a window
/// covering the full range and dispatches on the leading token.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The single AST root for the sequence.
///
/// # Errors
/// Returns a [`ParseError`] if the sequence is empty or malformed; parsing
/// fails fast on the first fault, there is no recovery.
///
/// # Example
/// ```
/// use mathlet::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let node = parse(&tokens).unwrap();
///
/// assert_eq!(node.span().len(), 5);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    parse_window(TokenWindow::new(tokens))
}

/// Parses one window of tokens into one AST node.
///
/// Dispatch on the leading token:
/// - an operator becomes a unary operator over the parse of the *entire*
///   remainder of the range;
/// - the `Let` identifier begins a definition form;
/// - `(`, any other identifier, or a number is resolved by the precedence
///   fold, which scans groups in place and stops at the first terminator or
///   unmatched `)`;
/// - `)` or a terminator cannot begin an expression.
///
/// # Errors
/// - [`ParseError::EmptyRange`] when the window covers no tokens.
/// - [`ParseError::UnexpectedLeadingToken`] for `)` or a terminator.
/// - Propagates any error from sub-parses.
pub fn parse_window(window: TokenWindow<'_>) -> ParseResult<Node> {
    let Some(first) = window.first() else {
        return Err(ParseError::EmptyRange { start: window.start(),
                                            end:   window.end(), });
    };

    match first.kind {
        TokenKind::Operator(op) => {
            let operand = parse_window(window.narrowed(window.start() + 1, window.end()))?;
            let span = Span::new(window.start(), window.start() + operand.span().len() + 1);

            Ok(Node::UnaryOp { op,
                               operand: Rc::new(operand),
                               span })
        },

        TokenKind::Text if first.lexeme == KEYWORD_LET => parse_let(window, window.start()),

        TokenKind::GroupOpen | TokenKind::Number | TokenKind::Text => fold_expression(window),

        TokenKind::GroupClose | TokenKind::Terminator => {
            Err(ParseError::UnexpectedLeadingToken { lexeme:   first.lexeme.clone(),
                                                     position: window.start(), })
        },
    }
}

/// Parses a parenthesized group starting at `index`.
///
/// The interior is parsed as a fresh window beginning one past the `(`; its
/// own scan stops at the matching `)`. The group's span covers both
/// parentheses, so the caller resumes one past the close.
///
/// # Errors
/// Propagates errors from the interior parse; an empty group surfaces as
/// [`ParseError::UnexpectedLeadingToken`] on the `)`.
pub(in crate::interpreter::parser) fn parse_group(window: TokenWindow<'_>,
                                                  index: usize)
                                                  -> ParseResult<Node> {
    let inner = parse_window(window.narrowed(index + 1, window.end()))?;
    let span = Span::new(index, index + inner.span().len() + 2);

    Ok(Node::Group { inner: Rc::new(inner),
                     span })
}
