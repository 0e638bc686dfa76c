use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. Lowest binding strength below
/// the conditional.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(lexer)?;

    loop {
        if let Some(spanned) = lexer.peek(1)?
           && spanned.token == Token::OrOr
        {
            lexer.next_token()?;

            let right = parse_logical_and(lexer)?;

            left = Expr::Binary { left:  Box::new(left),
                                  op:    BinaryOperator::Or,
                                  right: Box::new(right),
                                  line:  spanned.line, };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Binds tighter than `||`.
///
/// Grammar: `logical_and := relational ("&&" relational)*`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_relational(lexer)?;

    loop {
        if let Some(spanned) = lexer.peek(1)?
           && spanned.token == Token::AndAnd
        {
            lexer.next_token()?;

            let right = parse_relational(lexer)?;

            left = Expr::Binary { left:  Box::new(left),
                                  op:    BinaryOperator::And,
                                  right: Box::new(right),
                                  line:  spanned.line, };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses relational expressions.
///
/// Handles `<`, `<=`, `>`, `>=`, `==`, `!=`, and `in` as one
/// left-associative level. There is no comparison chaining beyond the plain
/// left fold: `a < b < c` parses as `(a < b) < c` and is rejected at
/// evaluation time.
///
/// Grammar: `relational := additive (relop additive)*`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// A possibly nested `Expr::Binary` tree.
pub fn parse_relational(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_additive(lexer)?;

    loop {
        if let Some(spanned) = lexer.peek(1)?
           && let Some(op) = token_to_binary_operator(&spanned.token)
           && is_relational_op(op)
        {
            lexer.next_token()?;

            let right = parse_additive(lexer)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: spanned.line, };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(lexer)?;

    loop {
        if let Some(spanned) = lexer.peek(1)?
           && let Some(op) = token_to_binary_operator(&spanned.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            lexer.next_token()?;

            let right = parse_multiplicative(lexer)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: spanned.line, };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/`, and `%`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(lexer)?;

    loop {
        if let Some(spanned) = lexer.peek(1)?
           && let Some(op) = token_to_binary_operator(&spanned.token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            lexer.next_token()?;

            let right = parse_unary(lexer)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: spanned.line, };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators. The
/// short-circuiting `&&`/`||` are included: the parser treats them as
/// ordinary binary nodes and the evaluator gives them their lazy semantics.
///
/// # Example
/// ```
/// use sieva::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
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
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::In => Some(BinaryOperator::In),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the relational class:
/// `<`, `<=`, `>`, `>=`, `==`, `!=`, and `in`.
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::In)
}
