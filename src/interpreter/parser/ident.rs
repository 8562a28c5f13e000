use std::rc::Rc;

use crate::{
    ast::{Node, Span},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{KEYWORD_LET, ParseResult, parse_window},
            definition::parse_let,
            window::TokenWindow,
        },
    },
};

/// Parses the identifier form starting at `index`.
///
/// Three shapes are possible:
/// - the `Let` keyword, which begins a definition form;
/// - an identifier immediately followed by `(`, which is a call;
/// - anything else, which is a plain symbol reference.
///
/// # Parameters
/// - `window`: The window being scanned; `index` must lie inside it.
/// - `index`: Absolute index of the identifier token.
///
/// # Returns
/// The parsed node, spanning every token it consumed.
///
/// # Errors
/// Propagates errors from definition or argument sub-parses.
pub(in crate::interpreter::parser) fn parse_ident(window: TokenWindow<'_>,
                                                  index: usize)
                                                  -> ParseResult<Node> {
    let Some(token) = window.token(index) else {
        return Err(ParseError::EmptyRange { start: index,
                                            end:   window.end(), });
    };

    if token.lexeme == KEYWORD_LET {
        return parse_let(window, index);
    }

    if let Some(next) = window.token(index + 1)
       && next.kind == TokenKind::GroupOpen
    {
        return parse_call(window, index, token.lexeme.clone());
    }

    Ok(Node::Symbol { name: token.lexeme.clone(),
                      span: Span::new(index, index + 1), })
}

/// Parses a call form `name(arg, arg, ...)` starting at `index`.
///
/// Each argument is parsed by recursing from the current cursor; the cursor
/// then advances by exactly the number of tokens the sub-parse reports. A
/// `,` after an argument continues the list, any other delimiter (normally
/// `)`) is consumed and ends it.
///
/// # Errors
/// - [`ParseError::UnbalancedCall`] when an argument runs to the end of the
///   range with no delimiter left to consume.
/// - Propagates errors from argument sub-parses.
fn parse_call(window: TokenWindow<'_>, index: usize, name: String) -> ParseResult<Node> {
    // Skip the name and the opening parenthesis.
    let mut cursor = index + 2;
    let mut args = Vec::new();

    while cursor < window.end() {
        let arg = parse_window(window.with_start(cursor))?;
        cursor += arg.span().len();
        args.push(Rc::new(arg));

        let Some(delimiter) = window.token(cursor) else {
            return Err(ParseError::UnbalancedCall { name });
        };
        cursor += 1;

        if delimiter.lexeme != "," {
            break;
        }
    }

    Ok(Node::Call { name,
                    args,
                    span: Span::new(index, cursor), })
}
