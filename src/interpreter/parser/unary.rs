use std::iter::Peekable;

use crate::{
    ast::UnaryOperator,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult, Subtree, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `+` and `-`. Signs nest, so `--x` is parsed as
/// `-( -x )`; each sign descends one depth level.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: The current depth guard.
///
/// # Returns
/// An [`Expr::UnaryOp`](crate::ast::Expr::UnaryOp) or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_primary(tokens, depth),
    };

    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: 0 });
    };
    let operand = parse_unary(tokens, depth.descend(*position)?)?;
    depth.unary(op, operand, *position)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT "(" [ expression ("," expression)* ] ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: The current depth guard.
///
/// # Returns
/// The parsed primary expression or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Depth::leaf(*value)),
        Some((Token::LParen, position)) => parse_grouping(tokens, depth, *position),
        Some((Token::Identifier(name), position)) => {
            parse_call(tokens, depth, name.clone(), *position)
        },
        Some((Token::End, position)) => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. The group descends one depth level but adds no node to the tree.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `depth`: The current depth guard.
/// - `open`: Offset of the opening parenthesis.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// `ParseError::ExpectedClosingParen` if the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: Depth, open: usize) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expression(tokens, depth.descend(open)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

/// Parses a function call.
///
/// The identifier has already been consumed. It must be followed by a
/// parenthesized, comma-separated argument list; there are no variables, so a
/// bare identifier is an error. The name is not checked here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `depth`: The current depth guard.
/// - `name`: The function name.
/// - `position`: Offset of the identifier.
///
/// # Returns
/// An [`Expr::Call`](crate::ast::Expr::Call) node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - no `(` follows the identifier,
/// - an argument fails to parse,
/// - the closing `)` is missing.
fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                     depth: Depth,
                     name: String,
                     position: usize)
                     -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let open = match tokens.peek() {
        Some((Token::LParen, open)) => *open,
        _ => return Err(ParseError::BareIdentifier { name, position }),
    };
    tokens.next();

    let args = parse_comma_separated(tokens, depth.descend(open)?, parse_expression, open)?;
    depth.call(name, args, position)
}
