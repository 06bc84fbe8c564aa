use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult, Subtree},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: The current depth guard.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = depth.binary(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := power (("*" | "/" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: The current depth guard.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_power(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let position = *position;
            tokens.next();
            let right = parse_power(tokens, depth)?;
            left = depth.binary(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. The right-hand side is itself a power expression, so it
/// may start with a sign: `2 ** -1`.
///
/// The rule is: `power := unary ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: The current depth guard; the exponent is parsed one level
///   deeper.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, depth)?;

    if let Some((Token::Pow, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let exponent = parse_power(tokens, depth.descend(position)?)?;
        return depth.binary(BinaryOperator::Pow, base, exponent, position);
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `**`) and `None` for all other tokens.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Pow),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}
