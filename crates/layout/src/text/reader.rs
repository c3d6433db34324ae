/// A forward-only cursor over a text buffer that hands out wrapped lines.
///
/// Each read:
///   * strips leading spaces (not other whitespace)
///   * stops at `\n`, `\r` or `\r\n`, consuming the terminator; a terminator
///     at the cursor yields an empty line
///   * otherwise breaks at the last space inside the window, dropping that
///     space
///   * splits mid-word when the window holds no space at all
///
/// Widths are counted in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextReader {
    text: String,
    /// Byte offset into `text`, always on a char boundary.
    pos: usize,
}

impl TextReader {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }

    /// Replaces the buffer and rewinds the cursor.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.pos = 0;
    }

    /// The whole backing text, regardless of how much has been read.
    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The text not yet consumed.
    pub fn remaining(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Reads up to the next line terminator (or the end of the buffer).
    pub fn read_rest(&mut self) -> &str {
        let count = self.remaining().chars().count();
        self.read(count)
    }

    /// Reads one wrapped line of at most `max_chars` characters.
    ///
    /// Always returns a string, possibly empty; use [`TextReader::is_eof`]
    /// to detect exhaustion.
    pub fn read(&mut self, max_chars: usize) -> &str {
        self.consume_space();

        let start = self.pos;
        let mut window_end = start;
        let mut last_space = None;

        for (count, (offset, ch)) in self.text[start..].char_indices().enumerate() {
            if count >= max_chars {
                break;
            }
            let p = start + offset;
            match ch {
                '\n' => {
                    self.pos = p + 1;
                    return &self.text[start..p];
                }
                '\r' => {
                    let skip = if self.text[p + 1..].starts_with('\n') { 2 } else { 1 };
                    self.pos = p + skip;
                    return &self.text[start..p];
                }
                ' ' => last_space = Some(p),
                _ => {}
            }
            window_end = p + ch.len_utf8();
        }

        // If the window ran into the end of the buffer, take everything.
        let (end, resume) = if window_end == self.text.len() {
            (window_end, window_end)
        } else if let Some(space) = last_space {
            (space, space + 1)
        } else {
            (window_end, window_end)
        };

        self.pos = resume;
        &self.text[start..end]
    }

    fn consume_space(&mut self) {
        let skipped = self.text[self.pos..]
            .bytes()
            .take_while(|b| *b == b' ')
            .count();
        self.pos += skipped;
    }
}
