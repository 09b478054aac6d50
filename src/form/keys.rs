//! Decoding keys from a character channel

use std::io;

use crate::channel::TextChannel;

const ESCAPE: char = '\x1b';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Char(char),
    /// An escape sequence we don't know
    Unknown,
    /// The channel has no more input
    End,
}

/// Read one key. A lone ESC is told apart from the start of an arrow
/// sequence (`ESC [` or `ESC O`) by peeking at the next character.
pub fn read_key<C: TextChannel + ?Sized>(channel: &mut C) -> io::Result<Key> {
    let key = match channel.read_char()? {
        None => Key::End,
        Some(ESCAPE) => read_escape(channel)?,
        Some('\n' | '\r') => Key::Enter,
        Some(c) => Key::Char(c),
    };
    Ok(key)
}

fn read_escape<C: TextChannel + ?Sized>(channel: &mut C) -> io::Result<Key> {
    if !matches!(channel.peek()?, Some('[' | 'O')) {
        return Ok(Key::Escape);
    }
    channel.read_char()?;
    let key = match channel.read_char()? {
        Some('A') => Key::Up,
        Some('B') => Key::Down,
        Some('C') => Key::Right,
        Some('D') => Key::Left,
        Some(_) => Key::Unknown,
        None => Key::End,
    };
    Ok(key)
}
