//! Forward-only cursor over a mangled symbol string.
//!
//! Every grammar production consumes input through this type. The cursor
//! never moves backwards: `accept` leaves the position untouched on a
//! mismatch, so a production can probe for its leading token and commit
//! only once the token is actually present.

/// Read head over the raw mangled text.
#[derive(Debug)]
pub struct Cursor<'a> {
    raw: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `raw`.
    pub fn new(raw: &'a str) -> Self {
        Cursor { raw, pos: 0 }
    }

    /// Returns the unconsumed tail of the input.
    pub fn rest(&self) -> &'a str {
        &self.raw[self.pos..]
    }

    /// True when every character has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.raw.len()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the next `len` bytes without consuming them.
    ///
    /// Mangled names are ASCII, so a byte count doubles as a character
    /// count. Returns `None` when fewer than `len` bytes remain or the
    /// slice would split a multi-byte character.
    pub fn lookahead(&self, len: usize) -> Option<&'a str> {
        self.rest().get(..len)
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn accept(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next `count` characters.
    ///
    /// Fails without consuming anything when fewer than `count`
    /// characters remain.
    pub fn advance(&mut self, count: usize) -> Option<&'a str> {
        let rest = self.rest();
        let mut end = rest.len();
        let mut remaining = count;
        for (idx, _) in rest.char_indices() {
            if remaining == 0 {
                end = idx;
                break;
            }
            remaining -= 1;
        }
        if remaining > 0 {
            return None;
        }
        self.pos += end;
        Some(&rest[..end])
    }

    /// Consumes up to and including `delimiter`, returning the text
    /// before it.
    ///
    /// The returned slice is empty when the delimiter is the very next
    /// character. Fails without consuming anything when the delimiter
    /// never appears.
    pub fn advance_until(&mut self, delimiter: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(delimiter)?;
        self.pos += idx + delimiter.len_utf8();
        Some(&rest[..idx])
    }

    /// Consumes the longest prefix whose characters all satisfy `pred`.
    ///
    /// Returns the consumed run, which may be empty.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += end;
        &rest[..end]
    }
}
