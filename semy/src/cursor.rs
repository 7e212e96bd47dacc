/// Tracks the current position while the grammar walks over the input.
///
/// `Cursor` only ever moves forward. Productions peek at the remaining bytes
/// with [`rest`](Cursor::rest) and consume what they matched with
/// [`take`](Cursor::take) or [`eat`](Cursor::eat).
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes `b` if it is the next byte.
    #[inline]
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next `len` bytes.
    ///
    /// `len` comes from a production that already matched that many bytes of
    /// [`rest`](Cursor::rest), so it never runs past the end.
    #[inline]
    pub(crate) fn take(&mut self, len: usize) -> &'a [u8] {
        debug_assert!(self.pos + len <= self.input.len());
        let bytes = &self.input[self.pos..self.pos + len];
        self.pos += len;
        bytes
    }
}
