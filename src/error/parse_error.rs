#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token range.
pub enum ParseError {
    /// Asked to parse a range containing no tokens.
    EmptyRange {
        /// Start of the empty range (token index).
        start: usize,
        /// End of the empty range (token index).
        end:   usize,
    },
    /// The leading token of a range cannot begin an expression.
    UnexpectedLeadingToken {
        /// The token text encountered.
        lexeme:   String,
        /// The token index where it was found.
        position: usize,
    },
    /// The form after a `Let` did not fold to a top-level `=`.
    ExpectedEquation {
        /// Reconstructed source of what was parsed instead.
        found: String,
    },
    /// The left side of a `Let` equation is neither a bare name nor a call.
    InvalidDefinitionTarget {
        /// Reconstructed source of the offending left side.
        found: String,
    },
    /// A parameter in a `Let f(...)` definition is not a bare name.
    InvalidParameter {
        /// Reconstructed source of the offending parameter.
        found: String,
    },
    /// A chained `Let` was not separated from its tail by `.` or `,`.
    MissingTerminator {
        /// The token index where a terminator was expected.
        position: usize,
    },
    /// A greedily scanned numeric literal does not convert to a number.
    MalformedNumber {
        /// The literal text.
        lexeme:   String,
        /// The token index of the literal.
        position: usize,
    },
    /// An operator in the precedence fold has no resolved neighbor to bind.
    MissingOperand {
        /// The operator missing an operand.
        operator: String,
        /// The token index of the operator.
        position: usize,
    },
    /// A call's argument list ran past the end of the range unclosed.
    UnbalancedCall {
        /// The called name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRange { start, end } => {
                write!(f, "Nothing to parse in token range {start}..{end}.")
            },
            Self::UnexpectedLeadingToken { lexeme, position } => write!(f,
                                                                       "Token '{lexeme}' at position {position} cannot begin an expression."),

            Self::ExpectedEquation { found } => write!(f,
                                                       "Let must be followed by an equation like 'f(x) = ...' or 'x = ...', found: {found}"),

            Self::InvalidDefinitionTarget { found } => write!(f,
                                                              "Only a bare name or a call over bare names can be defined, found: {found}"),

            Self::InvalidParameter { found } => write!(f,
                                                       "Function parameters must be bare names like 'f(x, y)', found: {found}"),

            Self::MissingTerminator { position } => write!(f,
                                                           "Expected '.' or ',' after the definition at position {position} before the next form."),

            Self::MalformedNumber { lexeme, position } => {
                write!(f, "'{lexeme}' at position {position} is not a valid number.")
            },
            Self::MissingOperand { operator, position } => {
                write!(f, "Operator '{operator}' at position {position} is missing an operand.")
            },
            Self::UnbalancedCall { name } => {
                write!(f, "The argument list of '{name}' is never closed.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
