use std::collections::VecDeque;

use logos::Logos;

use crate::error::SyntaxError;

/// Character-level failures surfaced by the token definitions.
///
/// The [`Lexer`] wrapper converts these into positioned [`SyntaxError`]s;
/// the lexer never recovers or resynchronizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string or bytes literal with no closing quote.
    UnterminatedString,
    /// An integer literal that does not fit its representation.
    NumberOutOfRange,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Whitespace
/// (space, tab, CR, LF) and `//` line comments separate tokens and are
/// skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n\r]*")]
pub enum Token {
    /// `null`
    #[token("null")]
    Null,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `in`
    #[token("in")]
    In,
    /// Non-integral numeric literals such as `3.14`, `.5`, or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_double)]
    Double(f64),
    /// Signed integral literals such as `42` or `0x2A`.
    #[regex(r"[0-9]+", parse_int)]
    #[regex(r"0[xX][0-9a-fA-F]+", parse_hex)]
    Int(i64),
    /// Unsigned integral literals such as `42u` or `0x2AU`. The suffix is
    /// only valid on non-fractional forms.
    #[regex(r"[0-9]+[uU]", parse_uint)]
    #[regex(r"0[xX][0-9a-fA-F]+[uU]", parse_hex_uint)]
    UInt(u64),
    /// String literals: plain quoted (either quote), raw-prefixed (`r`/`R`,
    /// escapes left untouched), triple-quoted (spans newlines), or both.
    /// The stored text has escape sequences already decoded.
    #[regex(r#"[rR]?["']"#, lex_string)]
    String(String),
    /// Bytes literals: `b`/`B` prefix plus a quoted body, escapes decoded
    /// like non-raw strings. Stored as decoded text.
    #[regex(r#"[bB]["']"#, lex_bytes)]
    Bytes(String),
    /// Identifier tokens; variable, field, or function names such as `x` or
    /// `startsWith`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a non-integral literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::NumberOutOfRange)
}

/// Parses a decimal integer literal from the current token slice.
fn parse_int(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::NumberOutOfRange)
}

/// Parses a hexadecimal integer literal (`0x` prefix already matched).
fn parse_hex(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    i64::from_str_radix(&lex.slice()[2..], 16).map_err(|_| LexError::NumberOutOfRange)
}

/// Parses a `u`-suffixed decimal integer literal.
fn parse_uint(lex: &logos::Lexer<Token>) -> Result<u64, LexError> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse()
                            .map_err(|_| LexError::NumberOutOfRange)
}

/// Parses a `u`-suffixed hexadecimal integer literal.
fn parse_hex_uint(lex: &logos::Lexer<Token>) -> Result<u64, LexError> {
    let slice = lex.slice();
    u64::from_str_radix(&slice[2..slice.len() - 1], 16).map_err(|_| LexError::NumberOutOfRange)
}

/// Lexes a string body after its opener (optional `r`/`R` plus one quote).
fn lex_string<'s>(lex: &mut logos::Lexer<'s, Token>) -> Result<String, LexError> {
    let raw = lex.slice().starts_with(['r', 'R']);
    scan_quoted(lex, raw)
}

/// Lexes a bytes body after its opener (`b`/`B` plus one quote).
fn lex_bytes<'s>(lex: &mut logos::Lexer<'s, Token>) -> Result<String, LexError> {
    scan_quoted(lex, false)
}

/// Scans the remainder of a quoted literal and consumes it.
///
/// The opener (already matched) ends with the quote character. If the two
/// following characters repeat that quote, the literal is triple-quoted: its
/// content may span newlines and closing requires three matching quotes in a
/// row. Otherwise the literal is single-line and an unescaped newline before
/// the closing quote is an unterminated-string failure.
///
/// In non-raw mode a backslash always escapes the following character for
/// termination purposes; decoding of the recognized escape table happens in
/// [`decode_escapes`] once the body has been delimited.
fn scan_quoted<'s>(lex: &mut logos::Lexer<'s, Token>, raw: bool) -> Result<String, LexError> {
    let quote = match lex.slice().chars().last() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(LexError::UnexpectedCharacter),
    };
    let remainder: &'s str = lex.remainder();

    let (pair, closer) = if quote == '"' {
        ("\"\"", "\"\"\"")
    } else {
        ("''", "'''")
    };
    let triple = remainder.starts_with(pair);
    let body = if triple { &remainder[2..] } else { remainder };

    let mut chars = body.char_indices();
    let end = loop {
        let Some((i, c)) = chars.next() else {
            return Err(LexError::UnterminatedString);
        };

        if !triple && (c == '\n' || c == '\r') {
            return Err(LexError::UnterminatedString);
        }

        if c == quote {
            if !triple {
                break i;
            }
            if body[i..].starts_with(closer) {
                break i;
            }
            continue;
        }

        if c == '\\' && !raw {
            match chars.next() {
                None => return Err(LexError::UnterminatedString),
                Some((_, escaped)) if !triple && (escaped == '\n' || escaped == '\r') => {
                    return Err(LexError::UnterminatedString);
                },
                Some(_) => {},
            }
        }
    };

    let content = &body[..end];
    let opener_extra = if triple { 2 } else { 0 };
    let closer_len = if triple { 3 } else { 1 };
    lex.bump(opener_extra + end + closer_len);

    if raw {
        Ok(content.to_owned())
    } else {
        Ok(decode_escapes(content))
    }
}

/// Decodes the escape sequences of a non-raw string or bytes body.
///
/// Recognized sequences: `\\ \" \' \` \? \a \b \f \n \r \t \v`, `\xHH`
/// (exactly two hex digits), `\uHHHH` (four), `\UHHHHHHHH` (eight), and
/// octal `\[0-3][0-7][0-7]`. Any other backslash sequence passes through
/// literally.
///
/// ## Example
/// ```
/// use sieva::interpreter::lexer::decode_escapes;
///
/// assert_eq!(decode_escapes(r"\x41\x42"), "AB");
/// assert_eq!(decode_escapes(r"\q"), "\\q");
/// assert_eq!(decode_escapes(r"\101"), "A");
/// ```
#[must_use]
pub fn decode_escapes(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' || i + 1 >= chars.len() {
            out.push(c);
            i += 1;
            continue;
        }

        let escape = chars[i + 1];
        match escape {
            '\\' | '"' | '\'' | '`' | '?' => {
                out.push(escape);
                i += 2;
            },
            'a' => {
                out.push('\u{7}');
                i += 2;
            },
            'b' => {
                out.push('\u{8}');
                i += 2;
            },
            'f' => {
                out.push('\u{c}');
                i += 2;
            },
            'n' => {
                out.push('\n');
                i += 2;
            },
            'r' => {
                out.push('\r');
                i += 2;
            },
            't' => {
                out.push('\t');
                i += 2;
            },
            'v' => {
                out.push('\u{b}');
                i += 2;
            },
            'x' => i = decode_hex(&chars, i, 2, &mut out),
            'u' => i = decode_hex(&chars, i, 4, &mut out),
            'U' => i = decode_hex(&chars, i, 8, &mut out),
            '0'..='3' => i = decode_octal(&chars, i, &mut out),
            other => {
                out.push('\\');
                out.push(other);
                i += 2;
            },
        }
    }

    out
}

/// Decodes a `\x`/`\u`/`\U` escape with exactly `digits` hex digits
/// starting after the marker at `chars[at + 1]`.
///
/// Returns the index to continue from. Too few digits, non-hex digits, or a
/// code point outside the valid range make the marker pass through
/// literally (the digit characters are then consumed by the main loop).
fn decode_hex(chars: &[char], at: usize, digits: usize, out: &mut String) -> usize {
    let start = at + 2;
    let end = start + digits;

    if end <= chars.len() && chars[start..end].iter().all(char::is_ascii_hexdigit) {
        let code: String = chars[start..end].iter().collect();
        if let Some(decoded) = u32::from_str_radix(&code, 16).ok().and_then(char::from_u32) {
            out.push(decoded);
            return end;
        }
    }

    out.push('\\');
    out.push(chars[at + 1]);
    at + 2
}

/// Decodes an octal escape `\[0-3][0-7][0-7]` starting at the backslash.
///
/// The first digit has already been checked by the caller. A sequence with
/// fewer than three octal digits passes through literally.
#[allow(clippy::cast_possible_truncation)]
fn decode_octal(chars: &[char], at: usize, out: &mut String) -> usize {
    if at + 3 < chars.len() && chars[at + 2].is_digit(8) && chars[at + 3].is_digit(8) {
        let code = (chars[at + 1] as u32 - '0' as u32) * 64
                   + (chars[at + 2] as u32 - '0' as u32) * 8
                   + (chars[at + 3] as u32 - '0' as u32);
        out.push(char::from(code as u8));
        return at + 4;
    }

    out.push('\\');
    out.push(chars[at + 1]);
    at + 2
}

/// A token together with its 1-based source position.
///
/// Positions are monotonically non-decreasing as tokens are produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// 1-based line of the token's first character.
    pub line:   usize,
    /// 1-based column of the token's first character, counted in characters.
    pub column: usize,
}

/// The stateful lexer consumed by the parser.
///
/// Wraps the generated token scanner with position bookkeeping and the
/// lookahead buffer: [`next_token`](Lexer::next_token) consumes the next
/// token, [`peek`](Lexer::peek) inspects the n-th upcoming token (1-indexed)
/// without consuming, filling an internal queue on demand so nothing is ever
/// re-scanned.
///
/// `\r`, `\n`, and `\r\n` each advance the line counter exactly once (CRLF
/// collapses to one newline) and reset the column to 1; any other character
/// advances the column by one.
///
/// ## Example
/// ```
/// use sieva::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("a.b");
///
/// assert_eq!(lexer.peek(3).unwrap().map(|s| s.token),
///            Some(Token::Ident("b".to_owned())));
/// assert_eq!(lexer.next_token().unwrap().map(|s| s.token),
///            Some(Token::Ident("a".to_owned())));
/// ```
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, Token>,
    lookahead:   VecDeque<Spanned>,
    line_starts: Vec<usize>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       Token::lexer(source),
               lookahead:   VecDeque::new(),
               line_starts: compute_line_starts(source), }
    }

    /// Returns the next token, consuming it, or `None` at end of input.
    ///
    /// # Errors
    /// Returns a positioned [`SyntaxError`] for unterminated literals,
    /// out-of-range numbers, and unrecognized characters.
    pub fn next_token(&mut self) -> Result<Option<Spanned>, SyntaxError> {
        if let Some(spanned) = self.lookahead.pop_front() {
            return Ok(Some(spanned));
        }
        self.pull()
    }

    /// Returns the `n`-th upcoming token (1-indexed) without consuming it.
    ///
    /// The internal buffer is filled on demand; `None` means the stream ends
    /// before the requested token.
    ///
    /// # Errors
    /// Returns a positioned [`SyntaxError`] if filling the buffer hits a
    /// lexical failure.
    pub fn peek(&mut self, n: usize) -> Result<Option<Spanned>, SyntaxError> {
        while self.lookahead.len() < n {
            match self.pull()? {
                Some(spanned) => self.lookahead.push_back(spanned),
                None => return Ok(None),
            }
        }
        Ok(self.lookahead.get(n - 1).cloned())
    }

    /// The position just past the last character of the source, used for
    /// end-of-input diagnostics.
    #[must_use]
    pub fn end_position(&self) -> (usize, usize) {
        self.position_of(self.inner.source().len())
    }

    /// Scans one token from the underlying lexer.
    fn pull(&mut self) -> Result<Option<Spanned>, SyntaxError> {
        match self.inner.next() {
            None => Ok(None),
            Some(Ok(token)) => {
                let (line, column) = self.position_of(self.inner.span().start);
                Ok(Some(Spanned { token, line, column }))
            },
            Some(Err(error)) => {
                let (line, column) = self.position_of(self.inner.span().start);
                Err(match error {
                        LexError::UnexpectedCharacter => {
                            SyntaxError::UnexpectedCharacter { line, column }
                        },
                        LexError::UnterminatedString => {
                            SyntaxError::UnterminatedString { line, column }
                        },
                        LexError::NumberOutOfRange => SyntaxError::NumberOutOfRange { line, column },
                    })
            },
        }
    }

    /// Maps a byte offset to its 1-based line and column.
    fn position_of(&self, offset: usize) -> (usize, usize) {
        let line_index = self.line_starts
                             .partition_point(|&start| start <= offset)
                             - 1;
        let line_start = self.line_starts[line_index];
        let column = self.inner.source()[line_start..offset].chars().count() + 1;
        (line_index + 1, column)
    }
}

/// Computes the byte offset of every line start.
///
/// `\r\n` is collapsed into a single line terminator; a lone `\r` or `\n`
/// each terminate a line on their own.
fn compute_line_starts(source: &str) -> Vec<usize> {
    let bytes = source.as_bytes();
    let mut starts = vec![0];
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                starts.push(i + 1);
                i += 1;
            },
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    starts.push(i + 2);
                    i += 2;
                } else {
                    starts.push(i + 1);
                    i += 1;
                }
            },
            _ => i += 1,
        }
    }

    starts
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::In => write!(f, "in"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}u"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Bytes(s) => write!(f, "b\"{s}\""),
            Self::Ident(name) => write!(f, "{name}"),
            Self::AndAnd => write!(f, "&&"),
            Self::OrOr => write!(f, "||"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Bang => write!(f, "!"),
            Self::Question => write!(f, "?"),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
        }
    }
}
