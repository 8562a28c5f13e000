use std::{collections::HashMap, rc::Rc};

/// Represents an operator symbol recognized by the lexer.
///
/// A single enum covers both positions an operator can appear in:
/// between two operands (binary) or at the head of a range (unary).
/// Which operators are actually *evaluable* in each position is decided by the
/// interpreter; an operator that parses but has no meaning in its position
/// (such as binary `~`) surfaces as an evaluation error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction or negation (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equality (`=`), also the definition operator inside a `Let` form.
    Equal,
    /// Inequality (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Logical negation (`~`)
    Not,
}

impl Operator {
    /// Returns the binding strength of this operator.
    ///
    /// Higher values bind tighter. Operators of equal precedence fold left to
    /// right. The table is fixed at lex time; the parser's precedence fold
    /// only ever compares these values, it never reinterprets them.
    ///
    /// # Example
    /// ```
    /// use mathlet::ast::Operator;
    ///
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> i32 {
        match self {
            Self::Pow => 85,
            Self::Mul | Self::Div | Self::Mod => 80,
            Self::Add | Self::Sub => 50,
            Self::Equal | Self::NotEqual | Self::Greater | Self::Less => 30,
            Self::Not => 20,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Not => "~",
        };
        write!(f, "{symbol}")
    }
}

/// A half-open range of token indices into the backing token sequence.
///
/// Every AST node carries the span it was parsed from. The parser relies on
/// spans to know how many tokens a finished sub-parse consumed: sibling
/// ranges are advanced by `span().len()` rather than by re-scanning.
///
/// The span of a composite node is always the contiguous union of its
/// children's spans.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    /// Index of the first token covered by this span.
    pub start: usize,
    /// Index one past the last token covered by this span.
    pub end:   usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of tokens covered by this span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The value produced by a `Let` definition.
///
/// A binding is either callable or a plain named expression. Both carry an
/// unevaluated body: a `Value` binding is re-evaluated against the
/// environment at *every* reference site, never cached. Caching would change
/// observable behavior, because the environment a reference sees can differ
/// between sites.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A callable binding from `Let f(x, y) = ...`.
    ///
    /// Called by binding each evaluated argument to its parameter name as an
    /// overlay on the caller's environment and evaluating `body` there.
    Function {
        /// The parameter names, in declaration order.
        params: Vec<String>,
        /// The body expression evaluated when the function is called.
        body:   Rc<Node>,
    },
    /// A named expression binding from `Let x = ...`.
    Value {
        /// The body expression re-evaluated on every reference.
        body: Rc<Node>,
    },
}

impl Binding {
    /// Reconstructs the `Let` form that would produce this binding under
    /// `name`.
    #[must_use]
    pub fn code(&self, name: &str) -> String {
        match self {
            Self::Function { params, body } => {
                format!("Let {name}({}) = {}", params.join(", "), body.code())
            },
            Self::Value { body } => format!("Let {name} = {}", body.code()),
        }
    }
}

/// An abstract syntax tree node for the expression language.
///
/// The parser produces exactly one `Node` per input range. Children are
/// reference-counted because the parser's precedence fold stamps a finished
/// node across every arena slot its tokens occupy; the tree is immutable once
/// built, so sharing is safe.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A parenthesized sub-expression. The span includes both parentheses.
    Group {
        /// The expression inside the parentheses.
        inner: Rc<Node>,
        /// Token range this node was parsed from.
        span:  Span,
    },
    /// A binary operation such as `left + right`.
    BinaryOp {
        /// Left operand.
        left:  Rc<Node>,
        /// The operator between the operands.
        op:    Operator,
        /// Right operand.
        right: Rc<Node>,
        /// Token range this node was parsed from.
        span:  Span,
    },
    /// A unary operation such as `-value`.
    ///
    /// The operand is the parse of the *entire remaining range*, so a leading
    /// operator binds looser than any infix operator after it:
    /// `-3 + 2` is `-(3 + 2)`.
    UnaryOp {
        /// The operator at the head of the range.
        op:      Operator,
        /// The operand expression.
        operand: Rc<Node>,
        /// Token range this node was parsed from.
        span:    Span,
    },
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Token range this node was parsed from.
        span:  Span,
    },
    /// A reference to a named symbol, such as `x` or `pi`.
    Symbol {
        /// The referenced name.
        name: String,
        /// Token range this node was parsed from.
        span: Span,
    },
    /// A function call such as `f(x)` or `add(1, 2)`.
    Call {
        /// The called name.
        name: String,
        /// Argument expressions, in call order.
        args: Vec<Rc<Node>>,
        /// Token range this node was parsed from.
        span: Span,
    },
    /// A terminal `Let` with nothing following the equation.
    ///
    /// Never evaluated; the caller installs `name → target` into its own
    /// persistent binding table instead.
    Definition {
        /// The defined name.
        name:   String,
        /// The binding being defined.
        target: Rc<Binding>,
        /// Token range this node was parsed from.
        span:   Span,
    },
    /// One or more chained `Let`s followed by a trailing expression.
    ///
    /// The bindings are only visible while evaluating `body`; chaining
    /// multiple `Let`s accumulates into a single map, with later definitions
    /// shadowing earlier same-named ones.
    Scoped {
        /// The accumulated name → binding map.
        bindings: HashMap<String, Rc<Binding>>,
        /// The expression evaluated under the bindings.
        body:     Rc<Node>,
        /// Token range this node was parsed from.
        span:     Span,
    },
}

impl Node {
    /// Gets the token span from `self`.
    ///
    /// # Example
    /// ```
    /// use mathlet::ast::{Node, Span};
    ///
    /// let node = Node::Symbol { name: "x".to_string(),
    ///                           span: Span::new(2, 3), };
    ///
    /// assert_eq!(node.span().len(), 1);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Group { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::Number { span, .. }
            | Self::Symbol { span, .. }
            | Self::Call { span, .. }
            | Self::Definition { span, .. }
            | Self::Scoped { span, .. } => *span,
        }
    }

    /// Reconstructs a source form of this node.
    ///
    /// The output is not the original text: grouping made implicit by
    /// precedence is written out with explicit parentheses. Re-parsing the
    /// result yields a structurally equivalent expression.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Group { inner, .. } => format!("({})", inner.code()),
            Self::BinaryOp { left, op, right, .. } => {
                format!("({} {op} {})", left.code(), right.code())
            },
            Self::UnaryOp { op, operand, .. } => format!("({op}{})", operand.code()),
            Self::Number { value, .. } => format!("{value}"),
            Self::Symbol { name, .. } => name.clone(),
            Self::Call { name, args, .. } => {
                let args = args.iter().map(|a| a.code()).collect::<Vec<_>>().join(", ");
                format!("{name}({args})")
            },
            Self::Definition { name, target, .. } => target.code(name),
            Self::Scoped { bindings, body, .. } => {
                // Name order in the map carries no meaning; sort so the
                // reconstruction is stable.
                let mut names = bindings.keys().collect::<Vec<_>>();
                names.sort();

                let mut out = String::new();
                for name in names {
                    out.push_str(&bindings[name.as_str()].code(name));
                    out.push_str(" . ");
                }
                out.push_str(&body.code());
                out
            },
        }
    }
}
