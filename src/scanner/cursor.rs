use winnow::stream::{LocatingSlice, Location, Stream};

type Input<'a> = LocatingSlice<&'a str>;
type Checkpoint<'a> = <Input<'a> as Stream>::Checkpoint;

/// State needed to reverse the most recent `get_char`.
#[derive(Debug)]
struct Undo<'a> {
    checkpoint: Checkpoint<'a>,
    column: usize,
}

/// Character cursor over an in-memory buffer.
///
/// Tracks the byte offset, the 1-based line and the number of characters
/// consumed on the current line. Holds at most one pending pushback.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: Input<'a>,
    line: usize,
    column: usize,
    undo: Option<Undo<'a>>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            input: LocatingSlice::new(source),
            line: 1,
            column: 0,
            undo: None,
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the next unread character.
    pub(crate) fn offset(&self) -> usize {
        self.input.current_token_start()
    }

    /// Read one character, or `None` at end of input.
    pub(crate) fn get_char(&mut self) -> Option<char> {
        let checkpoint = self.input.checkpoint();
        match self.input.next_token() {
            Some(c) => {
                self.undo = Some(Undo {
                    checkpoint,
                    column: self.column,
                });
                self.column += 1;
                Some(c)
            }
            None => {
                self.undo = None;
                None
            }
        }
    }

    /// Unread the character returned by the last `get_char`.
    ///
    /// Only one character can be pushed back between two reads, and nothing
    /// can be pushed back after end of input was read.
    pub(crate) fn unget_char(&mut self) {
        let undo = self.undo.take();
        debug_assert!(undo.is_some(), "unget_char without a character to unread");
        if let Some(Undo { checkpoint, column }) = undo {
            self.input.reset(&checkpoint);
            self.column = column;
        }
    }

    /// Finish a line terminator whose first character `c` was just read.
    ///
    /// Returns `false` if `c` is not `\n` or `\r`. A `\r\n` pair is consumed
    /// as a single terminator.
    pub(crate) fn end_line(&mut self, c: char) -> bool {
        match c {
            '\n' => {}
            '\r' => match self.get_char() {
                Some('\n') | None => {}
                Some(_) => self.unget_char(),
            },
            _ => return false,
        }
        self.line += 1;
        self.column = 0;
        self.undo = None;
        true
    }
}

pub(crate) fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}
