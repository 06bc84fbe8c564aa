use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Depth, ParseResult},
    },
};

/// Parses a comma-separated list of items until a closing parenthesis.
///
/// The opening parenthesis has already been consumed. The function repeatedly
/// calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list. Trailing commas are
/// not allowed.
///
/// Grammar (simplified): `list := [ item ("," item)* ] ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or `)`.
/// - `depth`: Depth guard passed to every item.
/// - `parse_item`: Function used to parse each list element.
/// - `open`: Offset of the opening parenthesis, for error reporting.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    depth: Depth,
    parse_item: impl Fn(&mut Peekable<I>, Depth) -> ParseResult<T>,
    open: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens, depth)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::End, _)) | None => {
                return Err(ParseError::ExpectedClosingParen { position: open });
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or ')', found {tok}"),
                                                         position: *position, });
            },
        }
    }
    Ok(items)
}
