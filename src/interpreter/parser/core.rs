use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{binary::parse_logical_or, utils::expect},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses one complete expression from `source`.
///
/// Convenience wrapper constructing the lexer and delegating to [`parse`].
///
/// # Errors
/// Returns a positioned [`SyntaxError`] on any lexical or grammatical
/// failure, including trailing tokens after the expression.
///
/// # Examples
/// ```
/// use sieva::interpreter::parser::core::parse_source;
///
/// assert!(parse_source("a.b + 1").is_ok());
/// assert!(parse_source("a.b + ").is_err());
/// assert!(parse_source("1 2").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let mut lexer = Lexer::new(source);
    parse(&mut lexer)
}

/// Parses the entire token stream into a single AST root.
///
/// The stream must contain exactly one expression: trailing tokens raise a
/// positioned syntax failure, and no partial tree is ever returned. Parsing
/// the same valid source twice yields structurally identical ASTs.
///
/// # Parameters
/// - `lexer`: The token stream, positioned at its start.
///
/// # Returns
/// The root expression node.
pub fn parse(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(lexer)?;

    match lexer.next_token()? {
        None => Ok(expr),
        Some(spanned) => Err(SyntaxError::TrailingTokens { token:  spanned.token.to_string(),
                                                           line:   spanned.line,
                                                           column: spanned.column, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing: the lowest-precedence
/// level is the conditional. The ternary is right-associative: the
/// else-branch re-enters this production, so `a ? b : c ? d : e` parses as
/// `a ? b : (c ? d : e)`. The then-branch is a logical-or expression.
///
/// Grammar: `expression := logical_or ("?" logical_or ":" expression)?`
///
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let condition = parse_logical_or(lexer)?;

    if let Some(spanned) = lexer.peek(1)?
       && spanned.token == Token::Question
    {
        lexer.next_token()?;

        let then_branch = parse_logical_or(lexer)?;
        expect(lexer, &Token::Colon, "':'")?;
        let else_branch = parse_expression(lexer)?;

        return Ok(Expr::Conditional { condition:   Box::new(condition),
                                      then_branch: Box::new(then_branch),
                                      else_branch: Box::new(else_branch),
                                      line:        spanned.line, });
    }

    Ok(condition)
}
