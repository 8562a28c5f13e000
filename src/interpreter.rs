/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, resolves symbols and
/// function calls against the environment and the builtin registry, and
/// computes a floating-point result for every expression.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves names through builtins first, then the environment.
/// - Reports evaluation errors such as unknown symbols or argument count
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat list of tokens,
/// each classified as a number, operator, identifier text, group delimiter,
/// or terminator, and annotated with the precedence the parser folds by.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Assigns every token its parse precedence.
/// - Reports unrecognized characters with their position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer and constructs
/// an AST representing groups, operator applications, calls, and `Let`
/// definitions. Operator expressions are resolved by a precedence fold over
/// a shared scratch arena rather than by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Resolves operator precedence and left-associativity.
/// - Validates `Let` forms and reports malformed input with location info.
pub mod parser;
