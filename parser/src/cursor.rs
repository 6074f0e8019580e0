use miette::SourceSpan;

use crate::result::ParseError;

/// A single forward-only cursor over the raw source buffer (spec §4.2: "a
/// single cursor position"). No lexer, no token buffer — every recognised
/// form is read directly off the character stream.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and `-- ... \n` line comments (spec §4.2, §6).
    pub fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('-') if self.rest().starts_with("--") => {
                    while let Some(c) = self.peek() {
                        self.bump();
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn span_at(&self, at: usize) -> SourceSpan {
        SourceSpan::from((at, 1))
    }

    pub fn unexpected(&self, found: char) -> ParseError {
        ParseError::UnexpectedCharacter { found, at: self.pos, span: self.span_at(self.pos) }
    }

    pub fn eof(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedEof { expected: expected.into(), at: self.pos }
    }

    /// Consumes `c` if it is next (after trivia), else fails.
    pub fn expect_char(&mut self, c: char) -> Result<(), ParseError> {
        self.skip_trivia();
        match self.peek() {
            Some(found) if found == c => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(self.unexpected(found)),
            None => Err(self.eof(format!("'{c}'"))),
        }
    }

    /// Consumes a keyword/sigil string `s` if it is next, else fails with a
    /// `MissingToken` at the current position.
    pub fn expect_str(&mut self, s: &str) -> Result<(), ParseError> {
        self.skip_trivia();
        let at = self.pos;
        if self.rest().starts_with(s) {
            self.pos += s.len();
            Ok(())
        } else {
            Err(ParseError::MissingToken { expected: s.to_string(), at, span: self.span_at(at) })
        }
    }

    /// True, and consumes, only if the upcoming token is exactly `s` followed
    /// by a non-identifier character (so `def` does not match `define`).
    pub fn eat_keyword(&mut self, s: &str) -> bool {
        self.skip_trivia();
        let rest = self.rest();
        if rest.starts_with(s) {
            let after = &rest[s.len()..];
            if !after.starts_with(is_ident_char) {
                self.pos += s.len();
                return true;
            }
        }
        false
    }

    pub fn eat_char(&mut self, c: char) -> bool {
        self.skip_trivia();
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Reads one `[A-Za-z0-9_]+` identifier. Does not skip leading trivia
    /// itself — callers that need that should call `skip_trivia` first (most
    /// already have, via a preceding `peek`).
    pub fn parse_ident(&mut self) -> Result<String, ParseError> {
        self.skip_trivia();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_ident_char(c)) {
            self.bump();
        }
        if self.pos == start {
            return match self.peek() {
                Some(found) => Err(self.unexpected(found)),
                None => Err(self.eof("an identifier")),
            };
        }
        Ok(self.text[start..self.pos].to_string())
    }

    pub fn parse_digits(&mut self) -> Result<String, ParseError> {
        self.skip_trivia();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        if self.pos == start {
            return match self.peek() {
                Some(found) => Err(self.unexpected(found)),
                None => Err(self.eof("a digit")),
            };
        }
        Ok(self.text[start..self.pos].to_string())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
