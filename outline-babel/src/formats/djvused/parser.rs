//! Reader for `print-outline` output.
//!
//! Two passes: a tokenizer that understands djvused string escapes (including octal byte
//! escapes, used for non-ASCII titles), then a recursive descent over the token stream.

use crate::error::FormatError;
use crate::formats::common::{nesting_error, MAX_NESTING};
use crate::outline::{Outline, OutlineNode};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open,
    Close,
    Str(String),
    Atom(String),
}

pub(super) fn parse_djvused(source: &str) -> Result<Outline, FormatError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Ok(Outline::default());
    }

    let mut reader = Reader {
        tokens: &tokens,
        pos: 0,
        last_page: 0,
    };
    reader.expect(&Token::Open)?;
    match reader.next() {
        Some(Token::Atom(keyword)) if keyword == "bookmarks" => {}
        // `()` is what djvused prints for a document without an outline
        Some(Token::Close) if reader.at_end() => return Ok(Outline::default()),
        other => {
            return Err(FormatError::ParseError(format!(
                "Expected 'bookmarks', found {}",
                describe(other)
            )))
        }
    }
    let entries = reader.entries(0)?;
    reader.expect(&Token::Close)?;
    if let Some(extra) = reader.next() {
        return Err(FormatError::ParseError(format!(
            "Unexpected {} after the outline",
            describe(Some(extra))
        )));
    }

    let outline = Outline::new(entries);
    debug!(entries = outline.len_total(), "read djvused outline");
    Ok(outline)
}

struct Reader<'a> {
    tokens: &'a [Token],
    pos: usize,
    last_page: u32,
}

impl<'a> Reader<'a> {
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn expect(&mut self, wanted: &Token) -> Result<(), FormatError> {
        match self.next() {
            Some(token) if token == wanted => Ok(()),
            other => Err(FormatError::ParseError(format!(
                "Expected {}, found {}",
                describe(Some(wanted)),
                describe(other)
            ))),
        }
    }

    /// Reads entries until the closing parenthesis of the enclosing list.
    fn entries(&mut self, level: usize) -> Result<Vec<OutlineNode>, FormatError> {
        let mut nodes = Vec::new();
        while let Some(Token::Open) = self.peek() {
            self.pos += 1;
            nodes.push(self.entry(level)?);
        }
        Ok(nodes)
    }

    fn entry(&mut self, level: usize) -> Result<OutlineNode, FormatError> {
        if level >= MAX_NESTING {
            return Err(nesting_error("djvused"));
        }
        let title = match self.next() {
            Some(Token::Str(title)) => title.clone(),
            other => {
                return Err(FormatError::ParseError(format!(
                    "Expected bookmark title, found {}",
                    describe(other)
                )))
            }
        };
        let target = match self.next() {
            Some(Token::Str(target)) => target,
            other => {
                return Err(FormatError::ParseError(format!(
                    "Expected target of '{title}', found {}",
                    describe(other)
                )))
            }
        };
        if let Some(page) = page_of(target) {
            self.last_page = page;
        }
        let page_number = self.last_page;
        let children = self.entries(level + 1)?;
        self.expect(&Token::Close)?;
        Ok(OutlineNode::new(title, level, page_number).with_children(children))
    }
}

/// `"#12"` targets page 12. Named pages and URLs have no page number.
fn page_of(target: &str) -> Option<u32> {
    let digits = target.strip_prefix('#')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn describe(token: Option<&Token>) -> String {
    match token {
        None => "end of input".to_string(),
        Some(Token::Open) => "'('".to_string(),
        Some(Token::Close) => "')'".to_string(),
        Some(Token::Str(s)) => format!("string \"{s}\""),
        Some(Token::Atom(a)) => format!("'{a}'"),
    }
}

fn tokenize(source: &str) -> Result<Vec<Token>, FormatError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            b')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            b'"' => {
                let (text, next) = read_string(bytes, i + 1)?;
                tokens.push(Token::Str(text));
                i = next;
            }
            b if b.is_ascii_whitespace() => i += 1,
            _ => {
                let start = i;
                while i < bytes.len()
                    && !bytes[i].is_ascii_whitespace()
                    && !matches!(bytes[i], b'(' | b')' | b'"')
                {
                    i += 1;
                }
                tokens.push(Token::Atom(String::from_utf8_lossy(&bytes[start..i]).into_owned()));
            }
        }
    }
    Ok(tokens)
}

/// Reads a string body starting after the opening quote. Returns the text and the index after
/// the closing quote.
fn read_string(bytes: &[u8], mut i: usize) -> Result<(String, usize), FormatError> {
    let start = i;
    let mut raw = Vec::new();
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Ok((String::from_utf8_lossy(&raw).into_owned(), i + 1)),
            b'\\' => {
                i += 1;
                let Some(&escaped) = bytes.get(i) else { break };
                match escaped {
                    b'0'..=b'7' => {
                        let mut value: u32 = 0;
                        let mut len = 0;
                        while len < 3 && matches!(bytes.get(i), Some(b'0'..=b'7')) {
                            value = value * 8 + u32::from(bytes[i] - b'0');
                            i += 1;
                            len += 1;
                        }
                        raw.push((value & 0xff) as u8);
                        continue;
                    }
                    b'n' => raw.push(b'\n'),
                    b't' => raw.push(b'\t'),
                    b'r' => raw.push(b'\r'),
                    b'a' => raw.push(0x07),
                    b'b' => raw.push(0x08),
                    b'f' => raw.push(0x0c),
                    b'v' => raw.push(0x0b),
                    other => raw.push(other),
                }
                i += 1;
            }
            b => {
                raw.push(b);
                i += 1;
            }
        }
    }
    Err(FormatError::ParseError(format!(
        "Unterminated string starting at byte {}",
        start - 1
    )))
}
