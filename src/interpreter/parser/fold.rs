use std::{collections::BTreeSet, rc::Rc};

use crate::{
    ast::{Node, Span},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_group},
            ident::parse_ident,
            window::TokenWindow,
        },
    },
};

/// One cell of the fold's scratch arena.
///
/// During the scan, operator positions hold their raw precedence and operand
/// positions hold finished nodes. Each folding pass replaces one operator and
/// its two neighbors with a single node stamped across their whole range.
#[derive(Debug, Clone)]
enum Slot {
    /// An operator token not yet folded into a node.
    Precedence(i32),
    /// A finished node, stamped across every index its tokens cover.
    Resolved(Rc<Node>),
}

/// Resolves a flat run of operands and operators into one expression node.
///
/// Two phases over a scratch arena keyed by absolute token index, owned by
/// this invocation and discarded when it returns:
///
/// 1. **Scan.** Walk left to right. Groups and identifier forms are parsed
///    recursively on the spot and stamped across every index they span, so
///    later passes see one substituted node instead of raw tokens. Numbers
///    become literal nodes at their single index. Operators record their raw
///    precedence. The scan stops at a terminator or a closing parenthesis.
/// 2. **Fold.** For each distinct precedence present, highest first, walk the
///    scanned range left to right. Every operator slot matching the current
///    precedence is folded with its immediate neighbors (already resolved,
///    because all tighter operators folded in earlier passes) into a binary
///    node stamped across the combined range. Walking left to right within a
///    pass is what makes equal-precedence operators left-associative: the
///    earliest operator swallows its left neighbor first, so the next one
///    sees the folded result as its left operand.
///
/// The node left at the range's start index is the result.
///
/// # Errors
/// - [`ParseError::MalformedNumber`] when a greedily scanned literal fails
///   float conversion.
/// - [`ParseError::MissingOperand`] when an operator's neighbor is another
///   operator or lies outside the scanned range.
/// - Propagates errors from group and identifier sub-parses.
pub(in crate::interpreter::parser) fn fold_expression(window: TokenWindow<'_>)
                                                      -> ParseResult<Node> {
    let mut slots: Vec<Option<Slot>> = vec![None; window.backing_len()];
    let mut precedences = BTreeSet::new();

    // Phase 1: scan and substitute.
    let mut index = window.start();
    while index < window.end() {
        let Some(token) = window.token(index) else {
            break;
        };

        match token.kind {
            TokenKind::GroupOpen => {
                let group = parse_group(window, index)?;
                index = stamp(&mut slots, group.span(), Rc::new(group));
            },

            TokenKind::Text => {
                let node = parse_ident(window, index)?;
                index = stamp(&mut slots, node.span(), Rc::new(node));
            },

            TokenKind::Operator(_) => {
                slots[index] = Some(Slot::Precedence(token.precedence));
                precedences.insert(token.precedence);
                index += 1;
            },

            TokenKind::Number => {
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                                                           ParseError::MalformedNumber {
                                lexeme:   token.lexeme.clone(),
                                position: index,
                            }
                                                       })?;
                let number = Node::Number { value,
                                            span: Span::new(index, index + 1), };

                slots[index] = Some(Slot::Resolved(Rc::new(number)));
                index += 1;
            },

            TokenKind::GroupClose | TokenKind::Terminator => break,
        }
    }

    let limit = index;

    // Phase 2: fold, tightest precedence first.
    for &precedence in precedences.iter().rev() {
        let mut index = window.start();

        while index < limit {
            let matches_level =
                matches!(&slots[index], Some(Slot::Precedence(p)) if *p == precedence);
            if !matches_level {
                index += 1;
                continue;
            }

            let Some(token) = window.token(index) else {
                unreachable!("the scanned range never exceeds the window");
            };
            let TokenKind::Operator(op) = token.kind else {
                unreachable!("precedence slots only mark operator tokens");
            };

            let left =
                resolved_neighbor(&slots, window.start(), token, index, index.wrapping_sub(1))?;
            let right = resolved_neighbor(&slots, window.start(), token, index, index + 1)?;

            let span = Span::new(left.span().start, right.span().end);
            let node = Node::BinaryOp { left,
                                        op,
                                        right,
                                        span };

            index = stamp(&mut slots, span, Rc::new(node));
        }
    }

    match slots[window.start()].take() {
        Some(Slot::Resolved(node)) => Ok((*node).clone()),
        _ => unreachable!("a non-empty scan always resolves the range start"),
    }
}

/// Stamps `node` into every slot its span covers and returns the span's end.
fn stamp(slots: &mut [Option<Slot>], span: Span, node: Rc<Node>) -> usize {
    for slot in &mut slots[span.start..span.end] {
        *slot = Some(Slot::Resolved(Rc::clone(&node)));
    }
    span.end
}

/// Fetches the resolved node adjacent to the operator at `operator_index`.
fn resolved_neighbor(slots: &[Option<Slot>],
                     range_start: usize,
                     operator: &Token,
                     operator_index: usize,
                     neighbor: usize)
                     -> ParseResult<Rc<Node>> {
    let missing = || {
        ParseError::MissingOperand { operator: operator.lexeme.clone(),
                                     position: operator_index, }
    };

    if neighbor < range_start || neighbor >= slots.len() {
        return Err(missing());
    }

    match &slots[neighbor] {
        Some(Slot::Resolved(node)) => Ok(Rc::clone(node)),
        _ => Err(missing()),
    }
}
