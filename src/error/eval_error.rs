#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// An operator parsed in binary position has no binary meaning.
    UnknownBinaryOperator {
        /// The operator symbol.
        op: String,
    },
    /// An operator parsed in unary position has no unary meaning.
    UnknownUnaryOperator {
        /// The operator symbol.
        op: String,
    },
    /// Called a name that is neither a builtin nor bound in the environment.
    UnknownFunction {
        /// The called name.
        name: String,
    },
    /// Referenced a name that is neither a builtin constant nor bound in the
    /// environment.
    UnknownSymbol {
        /// The referenced name.
        name: String,
    },
    /// Called a name that is bound to a value, not a function.
    NotAFunction {
        /// The called name.
        name: String,
    },
    /// Referenced a name in value position that is bound to a function.
    NotAValue {
        /// The referenced name.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The called name.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// A bare definition reached the evaluator.
    ///
    /// Definitions are meaningful only to the caller, which installs them in
    /// its persistent binding table without evaluating anything.
    UnexpectedDefinition {
        /// The defined name.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBinaryOperator { op } => {
                write!(f, "'{op}' cannot be applied to two operands.")
            },
            Self::UnknownUnaryOperator { op } => {
                write!(f, "'{op}' cannot be applied to a single operand.")
            },
            Self::UnknownFunction { name } => write!(f, "There is no function named '{name}'."),
            Self::UnknownSymbol { name } => write!(f, "There is no symbol named '{name}'."),
            Self::NotAFunction { name } => {
                write!(f, "'{name}' is a value and cannot be called.")
            },
            Self::NotAValue { name } => {
                write!(f, "'{name}' is a function and cannot be used as a value.")
            },
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                           "'{name}' takes {expected} argument(s), but {found} were supplied."),

            Self::UnexpectedDefinition { name } => write!(f,
                                                          "The definition of '{name}' produces no value to evaluate."),
        }
    }
}

impl std::error::Error for EvalError {}
