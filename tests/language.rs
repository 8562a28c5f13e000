use std::fs::{self};

use mathlet::{
    ast::{Binding, Node},
    error::{EvalError, LexError, ParseError},
    eval_line,
    interpreter::{
        evaluator::{
            builtin::{BUILTIN_FUNCTIONS, builtin_function},
            core::evaluate,
            env::Environment,
        },
        lexer::{TokenKind, tokenize},
        parser::core::parse,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_source(&code, false) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mathlet") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_source(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs a script line by line and returns the last value produced.
fn eval(src: &str) -> f64 {
    let mut env = Environment::new();
    let mut result = None;

    for line in src.lines() {
        match eval_line(line, &mut env) {
            Ok(Some(value)) => result = Some(value),
            Ok(None) => {},
            Err(e) => panic!("Script failed: {e}"),
        }
    }

    result.expect("script produced no value")
}

fn parse_str(src: &str) -> Result<Node, ParseError> {
    parse(&tokenize(src).expect("script failed to tokenize"))
}

fn eval_error(src: &str) -> EvalError {
    let node = parse_str(src).expect("script failed to parse");

    evaluate(&node, &Environment::new()).expect_err("evaluation was expected to fail")
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("2 ^ 3 + 1"), 9.0);
    assert_eq!(eval("7 % 4"), 3.0);
    assert_eq!(eval("10 - 2 - 3"), 5.0);
}

#[test]
fn equal_precedence_folds_left_to_right() {
    assert_eq!(eval("8 / 4 / 2"), 1.0);
    assert_eq!(eval("2 ^ 3 ^ 2"), 64.0);
}

#[test]
fn leading_operator_covers_the_remainder() {
    assert_eq!(eval("-3 + 2"), -5.0);
    assert_eq!(eval("(-3) + 2"), -1.0);
    assert_eq!(eval("~0"), 1.0);
    assert_eq!(eval("~5"), 0.0);
    assert_eq!(eval("~(1 - 1)"), 1.0);
}

#[test]
fn scoped_definitions() {
    assert_eq!(eval("Let x = 3 . Let y = x + 1 . y"), 4.0);
    assert_eq!(eval("Let x = 2 , x * x"), 4.0);
}

#[test]
fn later_definition_shadows_earlier() {
    assert_eq!(eval("Let x = 3 . Let x = 9 . x"), 9.0);
}

#[test]
fn value_bindings_are_not_snapshots() {
    // 'y' references 'x' before the chain defines it; the body is only
    // evaluated when 'y' itself is referenced.
    assert_eq!(eval("Let y = x + 1 . Let x = 1 . y"), 2.0);
}

#[test]
fn user_defined_functions() {
    assert_eq!(eval("Let f(x) = x * 2 . f(5)"), 10.0);
    assert_eq!(eval("Let add(a, b) = a + b . add(2, 5)"), 7.0);
}

#[test]
fn function_bodies_see_the_call_site_environment() {
    assert_eq!(eval("Let f(x) = x + y . Let y = 1 . f(2)"), 3.0);
    assert_eq!(eval("Let scale(x) = x * factor . Let factor = 3 . scale(2)"), 6.0);
}

#[test]
fn definitions_persist_across_lines() {
    assert_eq!(eval("Let double(x) = x * 2\nLet base = 10\ndouble(base) + 1"), 21.0);
}

#[test]
fn builtin_functions_and_constants() {
    assert_eq!(eval("sin(0)"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("tan(0)"), 0.0);
    assert_eq!(eval("floor(1.9) + ceil(1.1)"), 3.0);
    assert_eq!(eval("round(2.5)"), 3.0);
    assert_eq!(eval("pi"), std::f64::consts::PI);
    assert!((eval("log(100)") - 2.0).abs() < 1e-12);
    assert!((eval("ln(e)") - 1.0).abs() < 1e-12);
}

#[test]
fn digits_split_identifiers() {
    // Identifiers are letters only, so a name like 'atan2' scans as the
    // symbol 'atan' followed by the number 2. The registry entry exists but
    // no program text can reach it.
    let tokens = tokenize("atan2(0, 1)").unwrap();
    let lexemes = tokens.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>();

    assert_eq!(lexemes, vec!["atan", "2", "(", "0", ",", "1", ")"]);
    assert!(matches!(eval_error("atan2(0, 1)"),
                     EvalError::UnknownSymbol { ref name } if name == "atan"));
}

#[test]
fn every_listed_builtin_is_registered() {
    assert_eq!(BUILTIN_FUNCTIONS.len(), 15);

    for name in BUILTIN_FUNCTIONS {
        let def = builtin_function(name)
            .unwrap_or_else(|| panic!("'{name}' is listed but not registered"));
        assert!((1..=2).contains(&def.arity), "'{name}' has arity {}", def.arity);
    }

    assert!(BUILTIN_FUNCTIONS.contains(&"sin"));
    assert!(BUILTIN_FUNCTIONS.contains(&"ln"));
}

#[test]
fn builtins_cannot_be_shadowed() {
    assert_eq!(eval("Let cos(x) = x + 5 . cos(0)"), 1.0);
    assert_eq!(eval("Let pi = 3 . pi"), std::f64::consts::PI);
}

#[test]
fn scientific_notation() {
    assert_eq!(eval("1.5e2 + 0.5"), 150.5);
}

#[test]
fn token_kinds_and_precedences() {
    let tokens = tokenize("1 + 2 * 3").unwrap();

    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    assert!(matches!(kinds.as_slice(),
                     [TokenKind::Number,
                      TokenKind::Operator(_),
                      TokenKind::Number,
                      TokenKind::Operator(_),
                      TokenKind::Number]));

    let precedences = tokens.iter().map(|t| t.precedence).collect::<Vec<_>>();
    assert_eq!(precedences, vec![0, 50, 0, 80, 0]);
}

#[test]
fn unrecognized_character_is_a_lex_error() {
    let err = tokenize("1 + @").unwrap_err();

    assert_eq!(err,
               LexError::UnrecognizedCharacter { character: '@',
                                                 position:  4, });
}

#[test]
fn terminal_let_parses_to_a_definition() {
    let node = parse_str("Let x = 5").unwrap();

    let Node::Definition { name, target, .. } = node else {
        panic!("expected a definition, got {node:?}");
    };

    assert_eq!(name, "x");
    assert!(matches!(&*target, Binding::Value { .. }));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(parse_str(""), Err(ParseError::EmptyRange { .. })));
}

#[test]
fn closing_parenthesis_cannot_begin_an_expression() {
    assert!(matches!(parse_str("()"),
                     Err(ParseError::UnexpectedLeadingToken { .. })));
}

#[test]
fn chained_let_requires_a_terminator() {
    assert!(matches!(parse_str("Let x = 3 Let y = 4"),
                     Err(ParseError::MissingTerminator { position: 4 })));
}

#[test]
fn definition_target_must_be_a_name_or_call() {
    assert!(matches!(parse_str("Let 5 = x"),
                     Err(ParseError::InvalidDefinitionTarget { .. })));
    assert!(matches!(parse_str("Let f(1) = 2"),
                     Err(ParseError::InvalidParameter { .. })));
    assert!(matches!(parse_str("Let x + 1"),
                     Err(ParseError::ExpectedEquation { .. })));
}

#[test]
fn adjacent_operators_are_a_missing_operand() {
    assert!(matches!(parse_str("1 + + 2"),
                     Err(ParseError::MissingOperand { position: 1, .. })));
    assert!(matches!(parse_str("3 +"), Err(ParseError::MissingOperand { .. })));
}

#[test]
fn malformed_number_is_a_parse_error() {
    assert!(matches!(parse_str("1.5e + 1"),
                     Err(ParseError::MalformedNumber { .. })));
}

#[test]
fn unclosed_call_is_a_parse_error() {
    assert!(matches!(parse_str("f(1"), Err(ParseError::UnbalancedCall { .. })));
}

#[test]
fn comparisons_parse_but_do_not_evaluate() {
    assert!(parse_str("1 < 2").is_ok());
    assert!(matches!(eval_error("1 < 2"), EvalError::UnknownBinaryOperator { .. }));
    assert!(matches!(eval_error("1 != 2"), EvalError::UnknownBinaryOperator { .. }));
}

#[test]
fn meaningless_unary_operator_is_an_eval_error() {
    assert!(matches!(eval_error("* 3"), EvalError::UnknownUnaryOperator { .. }));
}

#[test]
fn unknown_names_are_eval_errors() {
    assert!(matches!(eval_error("y + 1"), EvalError::UnknownSymbol { .. }));
    assert!(matches!(eval_error("g(1)"), EvalError::UnknownFunction { .. }));
}

#[test]
fn binding_kind_mismatches_are_eval_errors() {
    assert!(matches!(eval_error("Let x = 1 . x(2)"), EvalError::NotAFunction { .. }));
    assert!(matches!(eval_error("Let f(a) = a . f + 1"), EvalError::NotAValue { .. }));
}

#[test]
fn argument_count_is_checked() {
    assert!(matches!(eval_error("sin(1, 2)"),
                     EvalError::ArgumentCountMismatch { expected: 1, found: 2, .. }));
    assert!(matches!(eval_error("Let f(x, y) = x + y . f(3)"),
                     EvalError::ArgumentCountMismatch { expected: 2, found: 1, .. }));
}

#[test]
fn reconstructed_code_reparses_equivalently() {
    let node = parse_str("Let f(x) = x * 2 . f(5)").unwrap();
    let rebuilt = parse_str(&node.code()).unwrap();

    assert_eq!(evaluate(&rebuilt, &Environment::new()).unwrap(), 10.0);
}

#[test]
fn reconstructed_code_orders_bindings_by_name() {
    let node = parse_str("Let b = 2 . Let a = 1 . a + b").unwrap();

    assert_eq!(node.code(), "Let a = 1 . Let b = 2 . (a + b)");
}

#[test]
fn eval_line_installs_definitions() {
    let mut env = Environment::new();

    assert_eq!(eval_line("Let x = 3", &mut env).unwrap(), None);
    assert_eq!(eval_line("", &mut env).unwrap(), None);
    assert_eq!(eval_line("x + 1", &mut env).unwrap(), Some(4.0));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.mlet").expect("missing file");
    assert_success(&script);
}

#[test]
fn zero_argument_call_is_an_error() {
    assert_failure("Let f(x) = x . f()");
}

#[test]
fn trailing_tokens_after_a_terminator_are_ignored() {
    assert_eq!(eval("1 + 2 . 9 * 9"), 3.0);
}
