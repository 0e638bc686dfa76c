use crate::{
    ast::{Expr, LiteralValue, UnaryOperator, is_macro_method},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `!` (logical
/// not). Unary operators are right-associative, so `!-x` is parsed as
/// `!(-x)`. If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `lexer`: Token stream with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression possibly followed by
/// postfixes.
pub(crate) fn parse_unary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    if let Some(spanned) = lexer.peek(1)?
       && spanned.token == Token::Minus
    {
        lexer.next_token()?;
        let expr = parse_unary(lexer)?;
        Ok(Expr::Unary { op:   UnaryOperator::Negate,
                         expr: Box::new(expr),
                         line: spanned.line, })
    } else if let Some(spanned) = lexer.peek(1)?
              && spanned.token == Token::Bang
    {
        lexer.next_token()?;
        let expr = parse_unary(lexer)?;
        Ok(Expr::Unary { op:   UnaryOperator::Not,
                         expr: Box::new(expr),
                         line: spanned.line, })
    } else {
        let primary = parse_primary(lexer)?;
        parse_postfix(lexer, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - literals (`null`, booleans, numbers, strings, bytes)
/// - identifiers and free function calls
/// - parenthesized expressions
/// - list literals (`[ ... ]`)
/// - map and struct literals (`{ ... }`, `Type{ ... }`, `a.b.C{ ... }`)
/// - leading-dot selection and calls (`.field`, `.f(x)`)
///
/// This function does not handle unary or postfix operators.
///
/// # Parameters
/// - `lexer`: Token stream positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(peeked) = lexer.peek(1)? else {
        return Err(end_of_input(lexer));
    };

    match peeked.token {
        Token::Null
        | Token::True
        | Token::False
        | Token::Int(_)
        | Token::UInt(_)
        | Token::Double(_)
        | Token::String(_)
        | Token::Bytes(_) => parse_literal(lexer),
        Token::LParen => parse_grouping(lexer),
        Token::LBracket => parse_list_literal(lexer),
        Token::LBrace => parse_brace_literal(lexer, None),
        Token::Dot => parse_leading_dot(lexer),
        Token::Ident(_) => parse_identifier_path(lexer),
        _ => Err(unexpected(&peeked)),
    }
}

/// Parses postfix operators applied to an expression.
///
/// Three postfix forms chain freely after a primary:
///
/// 1. field selection: `expr.field`
/// 2. method calls: `expr.method(args)`, flagged as a macro when the
///    method name is one of the macro names
/// 3. indexing: `expr[index]`
///
/// Parsing continues until no further postfix operator is found.
///
/// Grammar:
/// ```text
///     postfix := "." IDENT
///              | "." IDENT "(" args ")"
///              | "[" expression "]"
/// ```
/// # Parameters
/// - `lexer`: Token stream positioned after a primary expression.
/// - `node`: The expression to which postfix operators will be applied.
///
/// # Returns
/// An updated [`Expr`] with all postfix operators folded in.
pub(crate) fn parse_postfix(lexer: &mut Lexer<'_>, mut node: Expr) -> ParseResult<Expr> {
    loop {
        let Some(peeked) = lexer.peek(1)? else {
            break;
        };

        match peeked.token {
            Token::Dot => {
                lexer.next_token()?;
                let (name, _) = parse_identifier(lexer)?;

                if let Some(next) = lexer.peek(1)?
                   && next.token == Token::LParen
                {
                    lexer.next_token()?;
                    let args =
                        parse_comma_separated(lexer, parse_expression, &Token::RParen, false)?;
                    let is_macro = is_macro_method(&name);

                    node = Expr::Call { target: Some(Box::new(node)),
                                        name,
                                        args,
                                        is_macro,
                                        line: peeked.line };
                } else {
                    node = Expr::Select { operand: Some(Box::new(node)),
                                          field:   name,
                                          test:    false,
                                          line:    peeked.line, };
                }
            },
            Token::LBracket => {
                lexer.next_token()?;
                let index = parse_expression(lexer)?;
                expect(lexer, &Token::RBracket, "']'")?;

                node = Expr::Index { operand: Box::new(node),
                                     index:   Box::new(index),
                                     line:    peeked.line, };
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Parses a literal token into an [`Expr::Literal`].
fn parse_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(Spanned { token, line, column }) = lexer.next_token()? else {
        return Err(end_of_input(lexer));
    };

    let value = match token {
        Token::Null => LiteralValue::Null,
        Token::True => LiteralValue::Bool(true),
        Token::False => LiteralValue::Bool(false),
        Token::Int(v) => LiteralValue::Int(v),
        Token::UInt(v) => LiteralValue::UInt(v),
        Token::Double(v) => LiteralValue::Double(v),
        Token::String(s) => LiteralValue::String(s),
        Token::Bytes(b) => LiteralValue::Bytes(b),
        other => {
            return Err(SyntaxError::UnexpectedToken { token: other.to_string(),
                                                      line,
                                                      column });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses a parenthesized expression.
///
/// The inner expression is returned as-is, with no wrapper node.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    lexer.next_token()?;
    let expr = parse_expression(lexer)?;
    expect(lexer, &Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
///
/// Elements are parsed with `parse_expression`, separated by commas; one
/// trailing comma is permitted before the closing bracket.
fn parse_list_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(bracket) = lexer.next_token()? else {
        return Err(end_of_input(lexer));
    };
    let elements = parse_comma_separated(lexer, parse_expression, &Token::RBracket, true)?;
    Ok(Expr::List { elements,
                    line: bracket.line })
}

/// Parses a brace literal: a map, or a struct when a type name preceded the
/// brace or the first entry begins with a bare identifier immediately
/// followed by `:`.
///
/// An empty `{}` with no preceding type name is an empty map; with one it is
/// an empty struct. Both forms permit one trailing comma.
///
/// # Parameters
/// - `lexer`: Token stream positioned at `{`.
/// - `type_name`: The struct type name, when the caller already committed to
///   a struct literal.
///
/// # Returns
/// An [`Expr::Map`] or [`Expr::Struct`] node.
pub(crate) fn parse_brace_literal(lexer: &mut Lexer<'_>,
                                  type_name: Option<String>)
                                  -> ParseResult<Expr> {
    let brace = expect(lexer, &Token::LBrace, "'{'")?;
    let line = brace.line;

    if type_name.is_some() {
        let fields = parse_comma_separated(lexer, parse_struct_field, &Token::RBrace, true)?;
        return Ok(Expr::Struct { type_name,
                                 fields,
                                 line });
    }

    // Untyped struct iff the first entry starts with `ident :`.
    let looks_like_struct = if let Some(first) = lexer.peek(1)?
                               && matches!(first.token, Token::Ident(_))
                               && let Some(second) = lexer.peek(2)?
                               && second.token == Token::Colon
    {
        true
    } else {
        false
    };

    if looks_like_struct {
        let fields = parse_comma_separated(lexer, parse_struct_field, &Token::RBrace, true)?;
        Ok(Expr::Struct { type_name: None,
                          fields,
                          line })
    } else {
        let entries = parse_comma_separated(lexer, parse_map_entry, &Token::RBrace, true)?;
        Ok(Expr::Map { entries, line })
    }
}

/// Parses one `name: value` struct field.
fn parse_struct_field(lexer: &mut Lexer<'_>) -> ParseResult<(String, Expr)> {
    let (name, _) = parse_identifier(lexer)?;
    expect(lexer, &Token::Colon, "':'")?;
    let value = parse_expression(lexer)?;
    Ok((name, value))
}

/// Parses one `key: value` map entry; both sides are full expressions.
fn parse_map_entry(lexer: &mut Lexer<'_>) -> ParseResult<(Expr, Expr)> {
    let key = parse_expression(lexer)?;
    expect(lexer, &Token::Colon, "':'")?;
    let value = parse_expression(lexer)?;
    Ok((key, value))
}

/// Parses a leading-dot selection or call against the top-level bindings:
/// `.field` or `.f(args)`.
fn parse_leading_dot(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(dot) = lexer.next_token()? else {
        return Err(end_of_input(lexer));
    };
    let (name, _) = parse_identifier(lexer)?;

    if let Some(next) = lexer.peek(1)?
       && next.token == Token::LParen
    {
        lexer.next_token()?;
        let args = parse_comma_separated(lexer, parse_expression, &Token::RParen, false)?;
        return Ok(Expr::Call { target: None,
                               name,
                               args,
                               is_macro: false,
                               line: dot.line });
    }

    Ok(Expr::Select { operand: None,
                      field:   name,
                      test:    false,
                      line:    dot.line, })
}

/// Parses an identifier, a free function call, or a struct literal whose
/// type name starts at this identifier.
///
/// The struct commitment needs lookahead: a dotted-identifier chain is a
/// qualified struct type name only if it terminates in `{`, which
/// [`scan_qualified_type`] confirms through the lexer's buffer before any
/// token is consumed. A free call named `has` is rewritten into a
/// presence-test selection.
fn parse_identifier_path(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(ident) = lexer.next_token()? else {
        return Err(end_of_input(lexer));
    };
    let (name, line, column) = match ident {
        Spanned { token: Token::Ident(name),
                  line,
                  column, } => (name, line, column),
        other => return Err(unexpected(&other)),
    };

    match lexer.peek(1)? {
        Some(spanned) if spanned.token == Token::LParen => {
            lexer.next_token()?;
            let args = parse_comma_separated(lexer, parse_expression, &Token::RParen, false)?;

            if name == "has" {
                return rewrite_presence_test(args, line, column);
            }

            Ok(Expr::Call { target: None,
                            name,
                            args,
                            is_macro: false,
                            line })
        },
        Some(spanned) if spanned.token == Token::LBrace => {
            parse_brace_literal(lexer, Some(name))
        },
        Some(spanned) if spanned.token == Token::Dot => {
            let Some(segments) = scan_qualified_type(lexer)? else {
                return Ok(Expr::Ident { name, line });
            };

            let mut full_name = name;
            for _ in 0..segments {
                lexer.next_token()?; // the dot
                let (segment, _) = parse_identifier(lexer)?;
                full_name.push('.');
                full_name.push_str(&segment);
            }

            parse_brace_literal(lexer, Some(full_name))
        },
        _ => Ok(Expr::Ident { name, line }),
    }
}

/// Scans ahead through a repeating `. identifier` pattern to check whether
/// it terminates in `{`, without consuming anything.
///
/// Returns the number of `.identifier` segments when the chain is a
/// qualified struct type name, or `None` when the expression should parse
/// as ordinary member access instead.
fn scan_qualified_type(lexer: &mut Lexer<'_>) -> ParseResult<Option<usize>> {
    let mut at = 1;
    let mut segments = 0;

    loop {
        match lexer.peek(at)? {
            Some(spanned) if spanned.token == Token::Dot => match lexer.peek(at + 1)? {
                Some(next) if matches!(next.token, Token::Ident(_)) => {
                    segments += 1;
                    at += 2;
                },
                _ => return Ok(None),
            },
            Some(spanned) if spanned.token == Token::LBrace && segments > 0 => {
                return Ok(Some(segments));
            },
            _ => return Ok(None),
        }
    }
}

/// Rewrites `has(e)` into a presence-test selection.
///
/// The sole argument must be a field selection or a bare identifier; the
/// rewrite sets the presence-test flag so absence yields `false` at
/// evaluation time instead of raising. Any other argument shape is a syntax
/// failure, since `has` takes a selection rather than a value.
fn rewrite_presence_test(args: Vec<Expr>, line: usize, column: usize) -> ParseResult<Expr> {
    if args.len() != 1 {
        return Err(SyntaxError::ExpectedToken { expected: "exactly one argument to has()"
                                                    .to_owned(),
                                                found: format!("{} arguments", args.len()),
                                                line,
                                                column });
    }

    match args.into_iter().next() {
        Some(Expr::Select { operand,
                            field,
                            line: select_line,
                            .. }) => Ok(Expr::Select { operand,
                                                       field,
                                                       test: true,
                                                       line: select_line }),
        Some(Expr::Ident { name, line: ident_line }) => Ok(Expr::Select { operand: None,
                                                                          field:   name,
                                                                          test:    true,
                                                                          line:    ident_line, }),
        _ => Err(SyntaxError::ExpectedToken { expected:
                                                  "a field selection as the argument of has()"
                                                      .to_owned(),
                                              found: "an expression".to_owned(),
                                              line,
                                              column }),
    }
}
