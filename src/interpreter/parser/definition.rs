use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Binding, Node, Operator, Span},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_window},
            window::TokenWindow,
        },
    },
};

/// Parses a `Let` form starting at `index`.
///
/// The remainder of the range after the keyword must fold to an equation, a
/// binary `=` at the top level. The left side decides the binding kind:
///
/// - a bare symbol produces a value binding (`Let x = 3`),
/// - a call whose arguments are all bare symbols produces a function binding
///   over those parameter names (`Let f(x, y) = x + y`).
///
/// If tokens remain after the equation, a terminator must follow and the
/// tail is parsed recursively:
///
/// - a tail that is itself a scoped definition has this binding merged into
///   its map; the existing entry wins, so later `Let`s in a chain shadow
///   earlier ones of the same name;
/// - any other tail becomes the body of a fresh scoped definition.
///
/// With no tokens remaining, the result is a terminal [`Node::Definition`]
/// for the caller to install in its own binding table.
///
/// # Parameters
/// - `window`: The window being parsed; `index` must lie inside it.
/// - `index`: Absolute index of the `Let` token.
///
/// # Errors
/// - [`ParseError::ExpectedEquation`] when the form after `Let` is not a
///   top-level `=`.
/// - [`ParseError::InvalidDefinitionTarget`] for a left side that is neither
///   a symbol nor a call.
/// - [`ParseError::InvalidParameter`] for a call argument that is not a bare
///   symbol.
/// - [`ParseError::MissingTerminator`] when more tokens follow the equation
///   without a `.` or `,` between.
pub(in crate::interpreter::parser) fn parse_let(window: TokenWindow<'_>,
                                                index: usize)
                                                -> ParseResult<Node> {
    let equation = parse_window(window.with_start(index + 1))?;
    let equation_len = equation.span().len();

    let (left, right) = match equation {
        Node::BinaryOp { left,
                         right,
                         op: Operator::Equal,
                         .. } => (left, right),
        other => return Err(ParseError::ExpectedEquation { found: other.code() }),
    };

    let (name, binding) = extract_binding(&left, right)?;

    // One past the equation; a terminator sits here when the chain continues.
    let local_end = index + 1 + equation_len;

    if local_end == window.end() {
        return Ok(Node::Definition { name,
                                     target: Rc::new(binding),
                                     span: Span::new(index, local_end), });
    }

    match window.token(local_end) {
        Some(token) if token.kind == TokenKind::Terminator => {},
        _ => return Err(ParseError::MissingTerminator { position: local_end }),
    }

    let tail = parse_window(window.narrowed(local_end + 1, window.end()))?;
    let span = Span::new(index, local_end + 1 + tail.span().len());

    match tail {
        Node::Scoped { mut bindings, body, .. } => {
            // Later Lets in the chain shadow earlier same-named ones, so the
            // binding already present stays.
            bindings.entry(name).or_insert_with(|| Rc::new(binding));

            Ok(Node::Scoped { bindings, body, span })
        },
        other => {
            let mut bindings = HashMap::new();
            bindings.insert(name, Rc::new(binding));

            Ok(Node::Scoped { bindings,
                              body: Rc::new(other),
                              span })
        },
    }
}

/// Extracts the defined name and binding from the left side of an equation.
fn extract_binding(left: &Node, body: Rc<Node>) -> ParseResult<(String, Binding)> {
    match left {
        Node::Symbol { name, .. } => Ok((name.clone(), Binding::Value { body })),

        Node::Call { name, args, .. } => {
            let mut params = Vec::with_capacity(args.len());
            for arg in args {
                match &**arg {
                    Node::Symbol { name, .. } => params.push(name.clone()),
                    other => return Err(ParseError::InvalidParameter { found: other.code() }),
                }
            }

            Ok((name.clone(), Binding::Function { params, body }))
        },

        other => Err(ParseError::InvalidDefinitionTarget { found: other.code() }),
    }
}
