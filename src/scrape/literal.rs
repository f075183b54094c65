//! Scanner for the provider's embedded JavaScript array literal.
//!
//! The dataset is emitted as a JavaScript array-of-arrays with single-quoted
//! strings, which is not valid JSON. This parser consumes that literal
//! grammar directly: nested arrays, single- or double-quoted strings with
//! backslash escapes, bare tokens (numbers, `null`) kept verbatim, optional
//! trailing commas, and the terminating `;` of the assignment statement.
//! Quote characters inside field values survive intact.

use crate::scrape::error::ScrapeError;

/// A value inside the dataset literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum JsValue {
    /// Quoted string, with escapes resolved.
    Str(String),
    /// Unquoted token, kept verbatim.
    Raw(String),
    Array(Vec<JsValue>),
}

pub(crate) struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Parses the outer array and the `;` that closes the assignment.
    pub(crate) fn parse_dataset(&mut self) -> Result<Vec<JsValue>, ScrapeError> {
        self.skip_ws();
        if self.peek() != Some('[') {
            return Err(self.err("expected '[' to open the dataset literal"));
        }
        let rows = self.parse_array()?;
        self.skip_ws();
        if self.peek() != Some(';') {
            return Err(self.err("missing ';' terminator after the dataset literal"));
        }
        self.bump();
        Ok(rows)
    }

    fn parse_value(&mut self) -> Result<JsValue, ScrapeError> {
        match self.peek() {
            Some('[') => Ok(JsValue::Array(self.parse_array()?)),
            Some('\'') | Some('"') => self.parse_string(),
            Some(c) if is_raw_start(c) => Ok(self.parse_raw()),
            Some(c) => Err(self.err(&format!("unexpected character '{c}'"))),
            None => Err(self.err("unexpected end of input")),
        }
    }

    /// Caller has already seen the opening `[` via `peek`.
    fn parse_array(&mut self) -> Result<Vec<JsValue>, ScrapeError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    break;
                }
                None => return Err(self.err("unterminated array in dataset literal")),
                _ => {}
            }
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    return Err(self.err(&format!("expected ',' or ']', found '{c}'")));
                }
                None => return Err(self.err("unterminated array in dataset literal")),
            }
        }
        Ok(items)
    }

    fn parse_string(&mut self) -> Result<JsValue, ScrapeError> {
        let quote = match self.bump() {
            Some(q) => q,
            None => return Err(self.err("unexpected end of input")),
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.err("unterminated string in dataset literal")),
                Some(c) if c == quote => break,
                Some('\\') => match self.bump() {
                    None => return Err(self.err("unterminated escape in dataset literal")),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    // \' \" \\ \/ and anything else resolve to the escaped
                    // character itself.
                    Some(other) => out.push(other),
                },
                Some(c) => out.push(c),
            }
        }
        Ok(JsValue::Str(out))
    }

    fn parse_raw(&mut self) -> JsValue {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ',' || c == ']' || c == ';' || c.is_whitespace() {
                break;
            }
            self.bump();
        }
        JsValue::Raw(self.src[start..self.pos].to_string())
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn err(&self, message: &str) -> ScrapeError {
        ScrapeError::MalformedLiteral {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

fn is_raw_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '+' || c == '.'
}
