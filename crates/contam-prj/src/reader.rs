//! Tokenizing reader for PRJ record text.
//!
//! The PRJ format is whitespace-delimited and strictly positional: callers
//! know the expected type and order of every field from the record grammar,
//! so the reader only offers "read the next token as X" operations plus the
//! current line number for diagnostics. There is no pushback.

use std::fs;
use std::path::Path;

use crate::error::{PrjError, Result};
use crate::number::Rx;

/// Cursor over PRJ text, handing out whitespace-delimited tokens.
#[derive(Debug)]
pub struct Reader {
    lines: Vec<String>,
    current: usize,
    pos: usize,
}

impl Reader {
    /// Create a reader over in-memory text.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect();
        Self {
            lines,
            current: 0,
            pos: 0,
        }
    }

    /// Open a PRJ file and load it for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PrjError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PrjError::Io(e)
            }
        })?;
        Ok(Self::new(&text))
    }

    /// Current 1-based physical line number.
    pub fn line(&self) -> u32 {
        (self.current + 1).min(self.lines.len().max(1)) as u32
    }

    /// Read one whitespace-delimited token, crossing physical lines as
    /// needed.
    pub fn read_string(&mut self) -> Result<String> {
        loop {
            let Some(line) = self.lines.get(self.current) else {
                return Err(PrjError::UnexpectedEof { line: self.line() });
            };
            let rest = &line[self.pos..];
            match rest.find(|c: char| !c.is_whitespace()) {
                Some(start) => {
                    let token_start = self.pos + start;
                    let end = rest[start..]
                        .find(char::is_whitespace)
                        .map_or(line.len(), |e| token_start + e);
                    let token = line[token_start..end].to_owned();
                    self.pos = end;
                    return Ok(token);
                }
                None => {
                    self.current += 1;
                    self.pos = 0;
                }
            }
        }
    }

    /// Read the next token as a signed integer.
    pub fn read_int(&mut self) -> Result<i32> {
        let token = self.read_string()?;
        token.parse().map_err(|_| PrjError::BadInt {
            token,
            line: self.line(),
        })
    }

    /// Read the next token as an unsigned integer.
    pub fn read_uint(&mut self) -> Result<u32> {
        let token = self.read_string()?;
        token.parse().map_err(|_| PrjError::BadInt {
            token,
            line: self.line(),
        })
    }

    /// Read the next token as a real number, keeping its exact text.
    pub fn read_number(&mut self) -> Result<Rx> {
        let token = self.read_string()?;
        let line = self.line();
        Rx::parse(&token).ok_or(PrjError::BadNumber { token, line })
    }

    /// Read a free-text line.
    ///
    /// Returns the unconsumed remainder of the current physical line, or the
    /// next whole line when the current one is exhausted. Description fields
    /// occupy a full line of their own, which may be empty.
    pub fn read_line(&mut self) -> Result<String> {
        let Some(line) = self.lines.get(self.current) else {
            return Err(PrjError::UnexpectedEof { line: self.line() });
        };
        let rest = line[self.pos..].trim_start();
        if rest.is_empty() {
            self.current += 1;
            let Some(next) = self.lines.get(self.current) else {
                return Err(PrjError::UnexpectedEof { line: self.line() });
            };
            let result = next.clone();
            self.current += 1;
            self.pos = 0;
            Ok(result)
        } else {
            let result = rest.to_owned();
            self.current += 1;
            self.pos = 0;
            Ok(result)
        }
    }

    /// Read one token and require it to equal a fixed literal.
    pub fn expect(&mut self, literal: &str) -> Result<()> {
        let token = self.read_string()?;
        if token == literal {
            Ok(())
        } else {
            Err(PrjError::Mismatch {
                expected: literal.to_owned(),
                found: token,
                line: self.line(),
            })
        }
    }
}
