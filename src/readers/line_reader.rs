//! Line-at-a-time access to the input file.
use std::io::BufRead;

use crate::{
    errors::{EfpError, Result},
    readers::cursor::Cursor,
};

/// One lower-cased input line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }
}

/// Reads lines one by one and keeps only the current one.
///
/// Requesting a new line drops the previous one, so cursors into it can't outlive it.
pub struct LineReader<R> {
    reader: R,
    line_number: usize,
    current: Option<Line>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            current: None,
        }
    }

    /// Replaces the current line with the next one from the input.
    ///
    /// An empty line is still a line; only end of input leaves no current line.
    pub fn next_line(&mut self) -> Result<Option<&Line>> {
        self.current = None;
        let mut buffer = Vec::new();
        let n_bytes = self
            .reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| EfpError::ReadError {
                line: self.line_number + 1,
                source: e,
            })?;
        if n_bytes == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        let mut text = String::from_utf8_lossy(&buffer).into_owned();
        text.make_ascii_lowercase();

        self.current = Some(Line {
            number: self.line_number,
            text,
        });
        Ok(self.current.as_ref())
    }

    pub fn current(&self) -> Option<&Line> {
        self.current.as_ref()
    }

    /// Number of the current line, or of the last line read once the input is exhausted.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_lower_cased_and_numbered() {
        let mut reader = LineReader::new("Run_Type MD\nFragment \"H2O\"\r\n".as_bytes());

        let line = reader.next_line().unwrap().unwrap();
        assert_eq!(line.text, "run_type md");
        assert_eq!(line.number, 1);

        let line = reader.next_line().unwrap().unwrap();
        assert_eq!(line.text, "fragment \"h2o\"");
        assert_eq!(line.number, 2);

        assert!(reader.next_line().unwrap().is_none());
        assert!(reader.current().is_none());
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut reader = LineReader::new("\n\nlast".as_bytes());
        assert_eq!(reader.next_line().unwrap().unwrap().text, "");
        assert_eq!(reader.next_line().unwrap().unwrap().text, "");
        assert_eq!(reader.next_line().unwrap().unwrap().text, "last");
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut reader = LineReader::new("".as_bytes());
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn long_lines_are_read_whole() {
        let long = "1.0 ".repeat(1000);
        let mut reader = LineReader::new(long.as_bytes());
        assert_eq!(reader.next_line().unwrap().unwrap().text.len(), long.len());
    }
}
