//! Character-oriented text channel

use std::io;

/// Where the form engine reads keystrokes and lines from and writes text to
///
/// Reads return `None` once no further input is available. Implementations
/// only need single-character pushback to support [`peek`](Self::peek).
pub trait TextChannel {
    /// Next character without consuming it
    fn peek(&mut self) -> io::Result<Option<char>>;

    /// Consume one character
    fn read_char(&mut self) -> io::Result<Option<char>>;

    /// Consume one line; the terminator is stripped
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Wipe whatever was drawn before. Channels without a screen ignore it.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Strip a trailing `\n` or `\r\n`
pub(crate) fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
