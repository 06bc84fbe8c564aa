use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed expression together with the height of its tree.
///
/// Left-associative chains such as `1 + 1 + ... + 1` are parsed in a loop, not
/// by recursion, but still produce a tree whose height grows with every
/// operator. Carrying the height lets the parser bound it without walking
/// subtrees it has already built.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtree {
    /// The parsed expression.
    pub expr:   Expr,
    /// Number of nodes on the longest root-to-leaf path.
    pub height: usize,
}

/// Tracks how deep the parser is and how deep it may go.
///
/// `Depth` bounds two things with the same limit:
/// - recursion: every parenthesized group, argument list, prefix sign and
///   right-hand side of `**` descends one level via [`Depth::descend`];
/// - tree height: every node is built through [`Depth::binary`],
///   [`Depth::unary`] or [`Depth::call`], which reject trees taller than the
///   limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    level: usize,
    max:   usize,
}

impl Depth {
    /// Creates a guard at level zero.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { level: 0, max }
    }

    /// Current recursion level.
    #[must_use]
    pub const fn level(self) -> usize {
        self.level
    }

    /// Returns the guard for one level deeper.
    ///
    /// # Errors
    /// `ParseError::TooDeep` when the limit is already reached.
    pub const fn descend(self, position: usize) -> ParseResult<Self> {
        if self.level >= self.max {
            return Err(ParseError::TooDeep { limit: self.max,
                                             position });
        }
        Ok(Self { level: self.level + 1,
                  max:   self.max, })
    }

    /// Wraps a literal into a subtree of height one.
    #[must_use]
    pub const fn leaf(value: f64) -> Subtree {
        Subtree { expr:   Expr::literal(value),
                  height: 1, }
    }

    /// Builds a binary node, rejecting it if the tree gets too tall.
    pub fn binary(self,
                  op: BinaryOperator,
                  left: Subtree,
                  right: Subtree,
                  position: usize)
                  -> ParseResult<Subtree> {
        let height = self.checked_height(left.height.max(right.height), position)?;
        Ok(Subtree { expr: Expr::binary(op, left.expr, right.expr),
                     height })
    }

    /// Builds a unary node, rejecting it if the tree gets too tall.
    pub fn unary(self,
                 op: UnaryOperator,
                 operand: Subtree,
                 position: usize)
                 -> ParseResult<Subtree> {
        let height = self.checked_height(operand.height, position)?;
        Ok(Subtree { expr: Expr::unary(op, operand.expr),
                     height })
    }

    /// Builds a call node, rejecting it if the tree gets too tall.
    pub fn call(self, name: String, args: Vec<Subtree>, position: usize) -> ParseResult<Subtree> {
        let tallest = args.iter().map(|arg| arg.height).max().unwrap_or(0);
        let height = self.checked_height(tallest, position)?;
        Ok(Subtree { expr: Expr::call(name, args.into_iter().map(|arg| arg.expr).collect()),
                     height })
    }

    /// Height of a node whose tallest child has `child_height`.
    const fn checked_height(self, child_height: usize, position: usize) -> ParseResult<usize> {
        let height = child_height + 1;
        if height > self.max {
            return Err(ParseError::TooDeep { limit: self.max,
                                             position });
        }
        Ok(height)
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: The current depth guard.
///
/// # Returns
/// The parsed expression with its height.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Subtree>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Parses a complete token stream into an expression tree.
///
/// The stream must hold exactly one expression followed by [`Token::End`].
///
/// # Errors
/// - `EmptyExpression` if there is nothing before the end marker.
/// - `UnmatchedClosingParen` or `UnexpectedTrailingTokens` if tokens remain
///   after a complete expression.
/// - `TooDeep` if the expression nests deeper than `max_depth`.
/// - Any error raised while parsing sub-expressions.
///
/// # Example
/// ```
/// use safecalc::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("(2 + 3) * 4").unwrap();
/// let tree = parse(&tokens, 128).unwrap();
///
/// assert_eq!(tree.to_string(), "((2 + 3) * 4)");
/// ```
pub fn parse(tokens: &[(Token, usize)], max_depth: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    match iter.peek() {
        None => return Err(ParseError::EmptyExpression { position: 0 }),
        Some((Token::End, position)) => {
            return Err(ParseError::EmptyExpression { position: *position });
        },
        Some(_) => {},
    }

    let tree = parse_expression(&mut iter, Depth::new(max_depth))?;

    match iter.next() {
        Some((Token::End, _)) => Ok(tree.expr),
        Some((Token::RParen, position)) => {
            Err(ParseError::UnmatchedClosingParen { position: *position })
        },
        Some((tok, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                       position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: tokens.last()
                                                                       .map_or(0, |(_, p)| *p) }),
    }
}
