//! Text channel over any byte stream
//!
//! Used when stdin is not a terminal: keys and lines both come from the same
//! reader, so piped input is consumed in order.

use std::io::{self, BufRead, Write};

use super::traits::{trim_line_ending, TextChannel};

pub struct StreamChannel<R, W> {
    reader: R,
    writer: W,
    peeked: Option<char>,
}

impl<R: BufRead, W: Write> StreamChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            peeked: None,
        }
    }

    /// Decode one UTF-8 character from the reader.
    /// Malformed sequences decode to U+FFFD.
    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let mut first = [0u8; 1];
        if self.reader.read(&mut first)? == 0 {
            return Ok(None);
        }
        let width = match first[0] {
            byte if byte < 0x80 => return Ok(Some(char::from(byte))),
            byte if byte >> 5 == 0b110 => 2,
            byte if byte >> 4 == 0b1110 => 3,
            byte if byte >> 3 == 0b11110 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };
        let mut bytes = [0u8; 4];
        bytes[0] = first[0];
        match self.reader.read_exact(&mut bytes[1..width]) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(Some(char::REPLACEMENT_CHARACTER));
            }
            Err(err) => return Err(err),
        }
        Ok(Some(
            std::str::from_utf8(&bytes[..width])
                .ok()
                .and_then(|text| text.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }
}

impl<R: BufRead, W: Write> TextChannel for StreamChannel<R, W> {
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.decode_char()?;
        }
        Ok(self.peeked)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        match self.peeked.take() {
            Some(c) => Ok(Some(c)),
            None => self.decode_char(),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if let Some(c) = self.peeked.take() {
            if c == '\n' {
                return Ok(Some(line));
            }
            line.push(c);
        }
        let read = self.reader.read_line(&mut line)?;
        if read == 0 && line.is_empty() {
            return Ok(None);
        }
        trim_line_ending(&mut line);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
