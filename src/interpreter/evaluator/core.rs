use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Binding, Node, Operator},
    error::EvalError,
    interpreter::evaluator::{
        builtin::{builtin_constant, builtin_function},
        env::Environment,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an AST node to a numeric result.
///
/// The evaluator dispatches exhaustively on the node variant. The
/// environment is read-only here: scoped definitions and function calls
/// extend it through overlays, never in place, so no holder of the same
/// environment observes an evaluation.
///
/// A [`Node::Definition`] is not a legal argument: it is only meaningful to
/// the caller, which installs the binding into its own persistent table and
/// evaluates nothing that turn.
///
/// # Parameters
/// - `node`: The node to evaluate.
/// - `env`: The current environment overlay.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// Returns an [`EvalError`] when an operator has no meaning in its position,
/// a called or referenced name is neither a builtin nor bound, an argument
/// count does not match, or a definition reaches the evaluator.
///
/// # Example
/// ```
/// use mathlet::interpreter::{
///     evaluator::{core::evaluate, env::Environment},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let node = parse(&tokens).unwrap();
///
/// assert_eq!(evaluate(&node, &Environment::new()).unwrap(), 7.0);
/// ```
pub fn evaluate(node: &Node, env: &Environment) -> EvalResult<f64> {
    match node {
        Node::Number { value, .. } => Ok(*value),

        Node::Group { inner, .. } => evaluate(inner, env),

        Node::BinaryOp { left, op, right, .. } => {
            // Left before right, so the leftmost fault surfaces first.
            let lhs = evaluate(left, env)?;
            let rhs = evaluate(right, env)?;

            eval_binary(*op, lhs, rhs)
        },

        Node::UnaryOp { op, operand, .. } => {
            let value = evaluate(operand, env)?;

            eval_unary(*op, value)
        },

        Node::Call { name, args, .. } => eval_call(name, args, env),

        Node::Symbol { name, .. } => eval_symbol(name, env),

        Node::Scoped { bindings, body, .. } => evaluate(body, &env.overlay(bindings)),

        Node::Definition { name, .. } => {
            Err(EvalError::UnexpectedDefinition { name: name.clone() })
        },
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Only the arithmetic operators have binary meaning. Division by zero is
/// not guarded; the IEEE result (infinity or NaN) propagates as-is.
fn eval_binary(op: Operator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => Ok(lhs / rhs),
        Operator::Mod => Ok(lhs % rhs),
        Operator::Pow => Ok(lhs.powf(rhs)),
        Operator::Equal
        | Operator::NotEqual
        | Operator::Greater
        | Operator::Less
        | Operator::Not => Err(EvalError::UnknownBinaryOperator { op: op.to_string() }),
    }
}

/// Applies a unary operator to an evaluated operand.
///
/// `~` is logical negation returned as a boolean-like numeric value: `1.0`
/// for a zero operand, `0.0` otherwise.
fn eval_unary(op: Operator, value: f64) -> EvalResult<f64> {
    match op {
        Operator::Sub => Ok(-value),
        Operator::Add => Ok(value),
        Operator::Not => Ok(if value == 0.0 { 1.0 } else { 0.0 }),
        Operator::Mul
        | Operator::Div
        | Operator::Mod
        | Operator::Pow
        | Operator::Equal
        | Operator::NotEqual
        | Operator::Greater
        | Operator::Less => Err(EvalError::UnknownUnaryOperator { op: op.to_string() }),
    }
}

/// Evaluates a function call.
///
/// Arguments are evaluated left to right first. The name is then resolved
/// against the builtin registry before the environment, so builtins cannot
/// be shadowed. A user-defined function binds its parameters positionally to
/// the evaluated arguments as an overlay on the *caller's* environment, so
/// the body can resolve names the caller has in scope.
fn eval_call(name: &str, args: &[Rc<Node>], env: &Environment) -> EvalResult<f64> {
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(evaluate(arg, env)?);
    }

    if let Some(builtin) = builtin_function(name) {
        if values.len() != builtin.arity {
            return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                          expected: builtin.arity,
                                                          found:    values.len(), });
        }

        return Ok((builtin.func)(&values, env));
    }

    let Some(binding) = env.lookup(name) else {
        return Err(EvalError::UnknownFunction { name: name.to_string() });
    };

    match &**binding {
        Binding::Function { params, body } => {
            if params.len() != values.len() {
                return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                              expected: params.len(),
                                                              found:    values.len(), });
            }

            let arguments = bind_arguments(params, args, &values);

            evaluate(body, &env.overlay(&arguments))
        },

        Binding::Value { .. } => Err(EvalError::NotAFunction { name: name.to_string() }),
    }
}

/// Builds the parameter overlay for a user-defined function call.
///
/// Each evaluated argument is wrapped back into a value binding over a
/// literal node, so parameter references go through the same lookup path as
/// any other symbol.
fn bind_arguments(params: &[String],
                  args: &[Rc<Node>],
                  values: &[f64])
                  -> HashMap<String, Rc<Binding>> {
    params.iter()
          .zip(args.iter().zip(values))
          .map(|(param, (arg, value))| {
              let literal = Node::Number { value: *value,
                                           span:  arg.span(), };

              (param.clone(), Rc::new(Binding::Value { body: Rc::new(literal) }))
          })
          .collect()
}

/// Evaluates a symbol reference.
///
/// Builtin constants win over the environment. A value binding is
/// re-evaluated against the *current* environment on every reference; the
/// result is never cached.
fn eval_symbol(name: &str, env: &Environment) -> EvalResult<f64> {
    if let Some(value) = builtin_constant(name) {
        return Ok(value);
    }

    let Some(binding) = env.lookup(name) else {
        return Err(EvalError::UnknownSymbol { name: name.to_string() });
    };

    match &**binding {
        Binding::Value { body } => evaluate(body, env),
        Binding::Function { .. } => Err(EvalError::NotAValue { name: name.to_string() }),
    }
}
