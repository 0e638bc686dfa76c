use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Builds an unexpected-token error at the token's position.
pub(crate) fn unexpected(spanned: &Spanned) -> SyntaxError {
    SyntaxError::UnexpectedToken { token:  spanned.token.to_string(),
                                   line:   spanned.line,
                                   column: spanned.column, }
}

/// Builds an unexpected-end-of-input error at the end of the source.
pub(crate) fn end_of_input(lexer: &Lexer<'_>) -> SyntaxError {
    let (line, column) = lexer.end_position();
    SyntaxError::UnexpectedEndOfInput { line, column }
}

/// Consumes the next token, requiring it to equal `token`.
///
/// `what` is the human-readable description used in the error when
/// something else (or nothing) is found.
pub(crate) fn expect(lexer: &mut Lexer<'_>, token: &Token, what: &str) -> ParseResult<Spanned> {
    match lexer.next_token()? {
        Some(spanned) if spanned.token == *token => Ok(spanned),
        Some(spanned) => Err(SyntaxError::ExpectedToken { expected: what.to_owned(),
                                                          found:    spanned.token.to_string(),
                                                          line:     spanned.line,
                                                          column:   spanned.column, }),
        None => Err(end_of_input(lexer)),
    }
}

/// Consumes the next token, requiring an identifier, and returns its name
/// and line.
pub(crate) fn parse_identifier(lexer: &mut Lexer<'_>) -> ParseResult<(String, usize)> {
    match lexer.next_token()? {
        Some(Spanned { token: Token::Ident(name),
                       line,
                       .. }) => Ok((name, line)),
        Some(spanned) => Err(SyntaxError::ExpectedToken { expected: "an identifier".to_owned(),
                                                          found:    spanned.token.to_string(),
                                                          line:     spanned.line,
                                                          column:   spanned.column, }),
        None => Err(end_of_input(lexer)),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and by list, map, and
/// struct literals. It repeatedly calls `parse_item` to parse one element,
/// expecting either a comma to continue or the closing token to end the
/// list. An immediately encountered closing token produces an empty list.
/// With `allow_trailing_comma`, one comma may directly precede the closing
/// token (the form collection literals permit; argument lists do not).
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `lexer`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
/// - `allow_trailing_comma`: Whether one trailing comma is permitted.
///
/// # Returns
/// A vector of parsed items; the closing token is consumed.
pub(crate) fn parse_comma_separated<T>(lexer: &mut Lexer<'_>,
                                       parse_item: impl Fn(&mut Lexer<'_>) -> ParseResult<T>,
                                       closing: &Token,
                                       allow_trailing_comma: bool)
                                       -> ParseResult<Vec<T>> {
    let mut items = Vec::new();

    if let Some(spanned) = lexer.peek(1)?
       && spanned.token == *closing
    {
        lexer.next_token()?;

        return Ok(items);
    }

    loop {
        items.push(parse_item(lexer)?);

        match lexer.next_token()? {
            Some(spanned) if spanned.token == Token::Comma => {
                if allow_trailing_comma
                   && let Some(next) = lexer.peek(1)?
                   && next.token == *closing
                {
                    lexer.next_token()?;
                    break;
                }
            },
            Some(spanned) if spanned.token == *closing => break,
            Some(spanned) => {
                return Err(SyntaxError::ExpectedToken { expected: format!("',' or '{closing}'"),
                                                        found:    spanned.token.to_string(),
                                                        line:     spanned.line,
                                                        column:   spanned.column, });
            },
            None => return Err(end_of_input(lexer)),
        }
    }

    Ok(items)
}
