//! Parsing of numeric text into a [`ParsedValue`] tree.
//!
//! ## Overview
//!
//! The parser accepts the textual output of numeric code: a scalar, or a
//! bracketed and possibly nested list of numbers.
//!
//! - **Decoration tolerant**: leading tokens such as a constructor name
//!   (`array(`) are skipped, and scanning stops at the first token after the
//!   value that is not part of the number alphabet (a `dtype=...)` annotation)
//! - **Separator tolerant**: elements may be separated by commas, whitespace, or both,
//!   so both `repr` style (`[1.0, 2.0]`) and `str` style (`[1. 2.]`) array text parse
//! - **Error reporting**: unbalanced brackets and dangling signs are reported with
//!   line/column information
//!
//! ## Usage
//!
//! ```rust
//! use numtest::{parse_numbers, parsed};
//!
//! assert_eq!(parse_numbers("1.34e-7").unwrap(), parsed!(1.34e-7));
//! assert_eq!(parse_numbers("[1, 2, 3]").unwrap(), parsed!([1, 2, 3]));
//! assert_eq!(parse_numbers("array([0, 1, 2], uint8)").unwrap(), parsed!([0, 1, 2]));
//! assert_eq!(parse_numbers("[[1 2]\n [3 4]]").unwrap(), parsed!([[1, 2], [3, 4]]));
//! assert!(parse_numbers("[1, [2, 3]").is_err());
//! ```

use crate::{Error, ParsedValue, Result};

/// Sequences nested deeper than this are rejected instead of recursing further.
pub const MAX_DEPTH: usize = 256;

/// Parses text representing a number or a nested list of numbers.
///
/// A scalar input yields a [`ParsedValue::Leaf`]; a bracketed input yields a
/// [`ParsedValue::Node`] whose nesting mirrors the brackets. Leaves keep the
/// literal text, with any unary sign attached.
///
/// # Errors
///
/// Returns [`Error::MalformedStructure`] if no value is found, brackets are
/// unbalanced, a sign is not followed by a number, an unexpected token appears
/// inside brackets, a second top-level value follows the first, or nesting
/// exceeds [`MAX_DEPTH`].
pub fn parse_numbers(text: &str) -> Result<ParsedValue> {
    Parser::new(text).parse()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind<'a> {
    Number(&'a str),
    Name(&'a str),
    Punct(char),
    End,
}

#[derive(Clone, Copy, Debug)]
struct Token<'a> {
    kind: TokenKind<'a>,
    line: usize,
    col: usize,
}

impl Token<'_> {
    /// Whether this token can begin a value.
    fn starts_value(&self) -> bool {
        match self.kind {
            TokenKind::Number(_) => true,
            TokenKind::Name(name) => is_keyword(name),
            TokenKind::Punct(ch) => matches!(ch, '[' | '+' | '-'),
            TokenKind::End => false,
        }
    }

    /// Whether this token belongs to the number alphabet at all.
    fn is_structural(&self) -> bool {
        self.starts_value() || matches!(self.kind, TokenKind::Punct(']' | ',') | TokenKind::End)
    }
}

fn is_keyword(name: &str) -> bool {
    matches!(name, "inf" | "nan")
}

/// Splits text into numbers, identifiers and single punctuation characters.
struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.position..].chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.next_char();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.next_char();
        }
    }

    fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        let (line, col) = (self.line, self.column);
        let start = self.position;

        let kind = match self.peek_char() {
            None => TokenKind::End,
            Some(ch)
                if ch.is_ascii_digit()
                    || (ch == '.' && self.peek_second().is_some_and(|c| c.is_ascii_digit())) =>
            {
                self.scan_number();
                TokenKind::Number(&self.input[start..self.position])
            }
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                while self
                    .peek_char()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
                {
                    self.next_char();
                }
                TokenKind::Name(&self.input[start..self.position])
            }
            Some(ch) => {
                self.next_char();
                TokenKind::Punct(ch)
            }
        };

        Token { kind, line, col }
    }

    /// Consumes `\d*(\.\d*)?([Ee][+-]?\d+)?`; the exponent only when digits follow it.
    fn scan_number(&mut self) {
        self.skip_digits();
        if self.peek_char() == Some('.') {
            self.next_char();
            self.skip_digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let rest = &self.input[self.position + 1..];
            let digits = rest.strip_prefix(['+', '-']).unwrap_or(rest);
            if digits.starts_with(|c: char| c.is_ascii_digit()) {
                self.next_char();
                if matches!(self.peek_char(), Some('+' | '-')) {
                    self.next_char();
                }
                self.skip_digits();
            }
        }
    }
}

/// Recursive-descent parser over the token stream.
struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Token<'a> {
        match self.peeked {
            Some(token) => token,
            None => {
                let token = self.lexer.next_token();
                self.peeked = Some(token);
                token
            }
        }
    }

    fn bump(&mut self) -> Token<'a> {
        let token = self.peek();
        self.peeked = None;
        token
    }

    fn parse(mut self) -> Result<ParsedValue> {
        // Skip decoration such as a constructor name and its parenthesis.
        while !self.peek().is_structural() {
            self.bump();
        }
        while self.peek().kind == TokenKind::Punct(',') {
            self.bump();
        }

        let token = self.peek();
        if token.kind == TokenKind::End {
            return Err(Error::malformed_structure(
                token.line,
                token.col,
                "no numeric value found",
            ));
        }

        let value = self.parse_value(0)?;

        // After the value, separators are skipped and the first foreign token
        // (e.g. a dtype annotation) ends the scan.
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Punct(',') => {
                    self.bump();
                }
                TokenKind::Punct(']') => {
                    return Err(Error::malformed_structure(
                        token.line,
                        token.col,
                        "unmatched ']'",
                    ));
                }
                _ if token.starts_value() => {
                    return Err(Error::malformed_structure(
                        token.line,
                        token.col,
                        "unexpected trailing value",
                    ));
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<ParsedValue> {
        let token = self.bump();
        match token.kind {
            TokenKind::Punct('[') => self.parse_sequence(token, depth + 1),
            TokenKind::Punct(sign @ ('+' | '-')) => {
                let operand = self.bump();
                match operand.kind {
                    TokenKind::Number(text) => Ok(ParsedValue::Leaf(format!("{}{}", sign, text))),
                    TokenKind::Name(name) if is_keyword(name) => {
                        Ok(ParsedValue::Leaf(format!("{}{}", sign, name)))
                    }
                    _ => Err(Error::malformed_structure(
                        operand.line,
                        operand.col,
                        &format!("expected a number after '{}'", sign),
                    )),
                }
            }
            TokenKind::Number(text) => Ok(ParsedValue::Leaf(text.to_string())),
            TokenKind::Name(name) if is_keyword(name) => Ok(ParsedValue::Leaf(name.to_string())),
            _ => Err(Error::malformed_structure(
                token.line,
                token.col,
                "expected a number or '['",
            )),
        }
    }

    fn parse_sequence(&mut self, open: Token<'a>, depth: usize) -> Result<ParsedValue> {
        if depth > MAX_DEPTH {
            return Err(Error::malformed_structure(
                open.line,
                open.col,
                "nesting too deep",
            ));
        }

        let mut children = Vec::new();
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Punct(']') => {
                    self.bump();
                    return Ok(ParsedValue::Node(children));
                }
                TokenKind::Punct(',') => {
                    self.bump();
                }
                TokenKind::End => {
                    return Err(Error::malformed_structure(
                        open.line,
                        open.col,
                        "unclosed '['",
                    ));
                }
                _ if token.starts_value() => children.push(self.parse_value(depth)?),
                _ => {
                    return Err(Error::malformed_structure(
                        token.line,
                        token.col,
                        "unexpected token inside brackets",
                    ));
                }
            }
        }
    }
}
