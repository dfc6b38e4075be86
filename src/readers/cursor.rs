//! A read-only view of one input line with an explicit byte offset.

/// Position inside a lower-cased input line.
///
/// The cursor only ever moves forward. Parsers advance it past what they consume and leave it
/// untouched when they do not match.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The unconsumed part of the line.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.text.len());
    }

    pub fn skip_space(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes `keyword` if it is the next whole token on the line.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        match rest.strip_prefix(keyword) {
            Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => {
                self.pos += keyword.len();
                true
            }
            _ => false,
        }
    }
}
