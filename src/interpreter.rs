/// The normalizer module rewrites display glyphs into grammar symbols.
///
/// Calculator front ends show `×`, `÷` and `^` on their buttons. The
/// normalizer maps them onto `*`, `/` and `**` before lexing, so the grammar
/// itself only ever sees canonical symbols.
pub mod normalizer;
/// The lexer module tokenizes normalized input for further parsing.
///
/// The lexer reads the text and produces a stream of tokens, each paired with
/// the byte offset where it starts: numbers, identifiers, operators and
/// parentheses, followed by an end marker.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Reports lexical errors for characters outside the accepted alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that can only contain literals, unary and binary operations, and
/// function calls.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with offsets.
/// - Bounds nesting depth so hostile input cannot exhaust the stack.
pub mod parser;
/// The policy module is the whitelist of permitted operations.
///
/// It holds the static tables of operators and functions the evaluator may
/// execute, along with their arities. Nothing outside these tables can run.
pub mod policy;
/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the tree, looks every operator and function up in the
/// policy and applies the native implementation, converting arithmetic
/// failures into typed errors.
pub mod evaluator;
