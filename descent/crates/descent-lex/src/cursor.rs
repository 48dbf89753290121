//! Character cursor with a one-character pushback buffer.
//!
//! Scanners pull characters one at a time with [`Cursor::bump`] and, when a
//! character turns out to belong to the next token, hand it back with
//! [`Cursor::putback`]. Only the most recently bumped character can be pushed
//! back; the cursor never re-reads further than that.
//!
//! Columns are 1-based and reset to 1 after every line terminator.

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

/// A cursor for traversing input text character by character.
///
/// # Example
///
/// ```
/// use descent_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("12+");
/// assert_eq!(cursor.bump(), Some('1'));
/// assert_eq!(cursor.bump(), Some('2'));
/// assert_eq!(cursor.bump(), Some('+'));
/// cursor.putback();
/// assert_eq!(cursor.column(), 3);
/// assert_eq!(cursor.bump(), Some('+'));
/// assert_eq!(cursor.bump(), None);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Column of the next character (1-based).
    column: u32,

    /// State before the last `bump`, consumed by `putback`.
    pushback: Option<CursorSnapshot>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            pushback: None,
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Consumes and returns the next character, or `None` at end of input.
    ///
    /// A line terminator moves the cursor to column 1 of the next line.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pushback = Some(self.snapshot());
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Un-reads the character returned by the last [`bump`](Self::bump).
    ///
    /// A second `putback` without an intervening `bump` does nothing.
    pub fn putback(&mut self) {
        if let Some(snapshot) = self.pushback.take() {
            self.restore(snapshot);
        }
    }

    /// Discards everything up to and including the next line terminator.
    pub fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
        self.pushback = None;
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the next character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and `end` byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Returns the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
