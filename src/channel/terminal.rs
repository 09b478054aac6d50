//! Text channel over the interactive terminal
//!
//! Keys are read in raw mode through crossterm and translated into the same
//! characters a terminal would send (arrows become `ESC [ A..D`). Lines come
//! from the same key events, echoed as they are typed, so characters and
//! lines never race between two readers.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

use super::traits::TextChannel;

/// How long `peek` waits for the rest of an escape sequence
const SEQUENCE_GRACE: Duration = Duration::from_millis(30);

/// What a key press turns into on the character stream
#[derive(Debug, Clone, PartialEq, Eq)]
enum Translated {
    Chars(&'static str),
    Char(char),
    End,
    Ignore,
}

fn translate(key: KeyEvent) -> Translated {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Translated::End,
            _ => Translated::Ignore,
        };
    }
    match key.code {
        KeyCode::Char(c) => Translated::Char(c),
        KeyCode::Enter => Translated::Char('\n'),
        KeyCode::Esc => Translated::Char('\x1b'),
        KeyCode::Up => Translated::Chars("\x1b[A"),
        KeyCode::Down => Translated::Chars("\x1b[B"),
        KeyCode::Right => Translated::Chars("\x1b[C"),
        KeyCode::Left => Translated::Chars("\x1b[D"),
        _ => Translated::Ignore,
    }
}

/// What a key press does to the line being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKey {
    Push(char),
    Erase,
    Submit,
    End,
    Ignore,
}

fn line_key(key: KeyEvent) -> LineKey {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => LineKey::End,
            _ => LineKey::Ignore,
        };
    }
    match key.code {
        KeyCode::Char(c) => LineKey::Push(c),
        KeyCode::Backspace => LineKey::Erase,
        KeyCode::Enter => LineKey::Submit,
        _ => LineKey::Ignore,
    }
}

/// Raw mode for as long as the guard lives
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!("failed to leave raw mode: {err}");
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalChannel {
    pending: VecDeque<char>,
    closed: bool,
}

impl TerminalChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read key events into `pending` until one produces characters.
    /// With a timeout, gives up quietly once it expires.
    fn fill(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        let _raw = RawMode::enable()?;
        while self.pending.is_empty() && !self.closed {
            if let Some(timeout) = timeout {
                if !event::poll(timeout)? {
                    return Ok(());
                }
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match translate(key) {
                Translated::Chars(chars) => self.pending.extend(chars.chars()),
                Translated::Char(c) => self.pending.push_back(c),
                Translated::End => self.closed = true,
                Translated::Ignore => {}
            }
            if timeout.is_some() {
                return Ok(());
            }
        }
        Ok(())
    }
}

impl TextChannel for TerminalChannel {
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.pending.is_empty() && !self.closed {
            self.fill(Some(SEQUENCE_GRACE))?;
        }
        Ok(self.pending.front().copied())
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.pending.is_empty() && !self.closed {
            self.fill(None)?;
        }
        Ok(self.pending.pop_front())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while let Some(c) = self.pending.pop_front() {
            if c == '\n' {
                return Ok(Some(line));
            }
            line.push(c);
        }
        if self.closed {
            return Ok((!line.is_empty()).then_some(line));
        }
        // Keys already taken for navigation were never echoed
        if !line.is_empty() {
            self.write(&line)?;
        }

        let _raw = RawMode::enable()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match line_key(key) {
                LineKey::Push(c) => {
                    line.push(c);
                    self.write(c.encode_utf8(&mut [0u8; 4]))?;
                }
                LineKey::Erase => {
                    if line.pop().is_some() {
                        self.write("\x08 \x08")?;
                    }
                }
                LineKey::Submit => {
                    // Raw mode does not translate the newline
                    self.write("\r\n")?;
                    return Ok(Some(line));
                }
                LineKey::End => {
                    self.closed = true;
                    self.write("\r\n")?;
                    return Ok((!line.is_empty()).then_some(line));
                }
                LineKey::Ignore => {}
            }
        }
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}
