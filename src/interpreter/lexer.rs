use logos::Logos;

use crate::{ast::Operator, error::LexError};

/// Precedence stamped on grouping tokens.
///
/// Out of band above every real operator, so the precedence fold never picks
/// a parenthesis: groups are resolved recursively during the scan instead.
pub const GROUP_PRECEDENCE: i32 = 1000;
/// Precedence stamped on terminator tokens.
///
/// Below every real operator, so an expression fold can never consume past a
/// `.` or `,`.
pub const TERMINATOR_PRECEDENCE: i32 = -100;

/// Raw token classes matched directly against the source text.
///
/// The two-character `!=` wins over any single-character operator because
/// logos always prefers the longer match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Greedy numeric scan: a digit followed by any run of digits, `.` and
    /// `e`. Signed exponents and repeated decimal points are *not* rejected
    /// here; a malformed literal only surfaces when the parser converts the
    /// lexeme to a float.
    #[regex(r"[0-9][0-9.e]*")]
    Number,
    /// One or more alphabetic characters. No digits, no underscores.
    #[regex(r"[a-zA-Z]+")]
    Text,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `~`
    #[token("~")]
    Tilde,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    GroupOpen,
    /// `)`
    #[token(")")]
    GroupClose,
    /// `.` outside a number; separates chained `Let` forms.
    #[token(".")]
    Dot,
    /// `,`; separates chained forms and call arguments.
    #[token(",")]
    Comma,
}

/// Classifies a [`Token`] for the parser's dispatch.
///
/// `Let` is deliberately *not* a token kind: it is an ordinary `Text` token
/// the parser recognizes by lexeme when it leads a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal.
    Number,
    /// An operator symbol.
    Operator(Operator),
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// `.` or `,`
    Terminator,
    /// An identifier: a symbol, function name, or the `Let` keyword.
    Text,
}

/// A classified token with its source text and fold precedence.
///
/// The precedence is fixed when the token is created: real operators take
/// theirs from [`Operator::precedence`], grouping and terminator tokens take
/// the out-of-band sentinels, and everything else carries `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the parser dispatches on.
    pub kind:       TokenKind,
    /// The slice of source text this token was scanned from.
    pub lexeme:     String,
    /// Precedence used by the parser's folding pass.
    pub precedence: i32,
}

impl Token {
    fn new(raw: RawToken, lexeme: &str) -> Self {
        let kind = match raw {
            RawToken::Number => TokenKind::Number,
            RawToken::Text => TokenKind::Text,
            RawToken::Plus => TokenKind::Operator(Operator::Add),
            RawToken::Minus => TokenKind::Operator(Operator::Sub),
            RawToken::Star => TokenKind::Operator(Operator::Mul),
            RawToken::Slash => TokenKind::Operator(Operator::Div),
            RawToken::Percent => TokenKind::Operator(Operator::Mod),
            RawToken::Caret => TokenKind::Operator(Operator::Pow),
            RawToken::Equals => TokenKind::Operator(Operator::Equal),
            RawToken::NotEquals => TokenKind::Operator(Operator::NotEqual),
            RawToken::Greater => TokenKind::Operator(Operator::Greater),
            RawToken::Less => TokenKind::Operator(Operator::Less),
            RawToken::Tilde => TokenKind::Operator(Operator::Not),
            RawToken::GroupOpen => TokenKind::GroupOpen,
            RawToken::GroupClose => TokenKind::GroupClose,
            RawToken::Dot | RawToken::Comma => TokenKind::Terminator,
        };

        let precedence = match kind {
            TokenKind::Operator(op) => op.precedence(),
            TokenKind::GroupOpen | TokenKind::GroupClose => GROUP_PRECEDENCE,
            TokenKind::Terminator => TERMINATOR_PRECEDENCE,
            TokenKind::Number | TokenKind::Text => 0,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               precedence }
    }
}

/// Converts raw text into a flat sequence of classified tokens.
///
/// A single left-to-right scan with no backtracking. Whitespace is skipped
/// without emitting a token.
///
/// # Parameters
/// - `source`: The raw input text.
///
/// # Returns
/// The token sequence in source order.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] with the offending character
/// and its byte offset when a character matches no token class.
///
/// # Example
/// ```
/// use mathlet::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind,
///            TokenKind::Operator(mathlet::ast::Operator::Add));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        match raw {
            Ok(raw) => tokens.push(Token::new(raw, lexer.slice())),
            Err(()) => {
                return Err(LexError::UnrecognizedCharacter { character: lexer.slice()
                                                                             .chars()
                                                                             .next()
                                                                             .unwrap_or('\0'),
                                                             position:  lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
