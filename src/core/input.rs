use crate::domain::model::Operand;
use crate::utils::error::{CompareError, Result};
use std::io::BufRead;

/// Reads whitespace-delimited integers from a line-oriented stream.
///
/// Values may share a line (`"5 3"`) or span several lines; the reader pulls
/// another line only when the current one has no tokens left.
pub struct TokenReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pos: 0,
        }
    }

    /// Tokens are raw bytes; UTF-8 is checked per token, not per line.
    fn next_token(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            let rest = &self.line[self.pos..];
            self.pos += rest
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(rest.len());

            let rest = &self.line[self.pos..];
            if !rest.is_empty() {
                let end = rest
                    .iter()
                    .position(u8::is_ascii_whitespace)
                    .unwrap_or(rest.len());
                let token = rest[..end].to_vec();
                self.pos += end;
                return Ok(Some(token));
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// 整個 token 必須是合法整數，"12abc" 之類視為錯誤
    pub fn next_integer(&mut self, operand: Operand) -> Result<i64> {
        let token = self
            .next_token()?
            .ok_or_else(|| CompareError::InputFormatError {
                operand,
                input: String::new(),
                reason: "unexpected end of input".to_string(),
            })?;

        let text = std::str::from_utf8(&token).map_err(|e| CompareError::InputFormatError {
            operand,
            input: String::from_utf8_lossy(&token).into_owned(),
            reason: e.to_string(),
        })?;

        text.parse::<i64>().map_err(|e| CompareError::InputFormatError {
            operand,
            input: text.to_string(),
            reason: e.to_string(),
        })
    }

    /// Drops whatever is left of the current line, including its terminator.
    pub fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }

    /// Blocks until one more line arrives. EOF also returns. The bytes are
    /// not inspected, so any keypress counts.
    pub fn wait_for_line(&mut self) -> Result<()> {
        let mut ack = Vec::new();
        self.reader.read_until(b'\n', &mut ack)?;
        Ok(())
    }
}
