//! Line cursor with explicit lookahead.
//!
//! Several decoders consume lines beyond the one that triggered them
//! (verbatim argument bodies, trailing `balance` lines, block-header
//! initialization). Those decoders take the cursor and advance it
//! explicitly instead of doing index arithmetic on a shared slice.

/// Forward-only cursor over the lines of a raw report.
#[derive(Debug)]
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Splits the raw report into lines, tolerating CRLF endings.
    pub(crate) fn new(raw: &'a str) -> Self {
        let lines = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, pos: 0 }
    }

    /// Returns the next line and advances past it.
    pub(crate) fn next(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// Returns the next line without consuming it.
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consumes the next line, if any.
    pub(crate) fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_peek() {
        let mut cursor = LineCursor::new("a\nb\nc");
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.next(), Some("a"));
        assert_eq!(cursor.peek(), Some("b"));
        assert_eq!(cursor.next(), Some("b"));
        assert_eq!(cursor.next(), Some("c"));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_strips_carriage_returns() {
        let mut cursor = LineCursor::new("a\r\nb\r");
        assert_eq!(cursor.next(), Some("a"));
        assert_eq!(cursor.next(), Some("b"));
    }

    #[test]
    fn test_advance_past_end_is_a_no_op() {
        let mut cursor = LineCursor::new("only");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let mut cursor = LineCursor::new("a\n");
        assert_eq!(cursor.next(), Some("a"));
        assert_eq!(cursor.next(), Some(""));
        assert_eq!(cursor.next(), None);
    }
}
