//! Text channel driven by a fixed input script
//!
//! Every consumed character and every write is recorded in a transcript of
//! alternating input/output segments, which is what session tests assert on.

use std::collections::VecDeque;
use std::io;

use super::traits::{trim_line_ending, TextChannel};

/// A run of consecutive characters from one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Input(String),
    Output(String),
}

impl Segment {
    pub fn input(text: &str) -> Self {
        Segment::Input(text.to_string())
    }

    pub fn output(text: &str) -> Self {
        Segment::Output(text.to_string())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedChannel {
    input: VecDeque<char>,
    transcript: Vec<Segment>,
}

impl ScriptedChannel {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[Segment] {
        &self.transcript
    }

    /// Everything written so far, concatenated
    pub fn output(&self) -> String {
        self.transcript
            .iter()
            .filter_map(|segment| match segment {
                Segment::Output(text) => Some(text.as_str()),
                Segment::Input(_) => None,
            })
            .collect()
    }

    /// Input not consumed yet
    pub fn remaining(&self) -> String {
        self.input.iter().collect()
    }

    fn record_input(&mut self, c: char) {
        if let Some(Segment::Input(text)) = self.transcript.last_mut() {
            text.push(c);
        } else {
            self.transcript.push(Segment::Input(c.to_string()));
        }
    }

    fn record_output(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Output(existing)) = self.transcript.last_mut() {
            existing.push_str(text);
        } else {
            self.transcript.push(Segment::output(text));
        }
    }
}

impl TextChannel for ScriptedChannel {
    fn peek(&mut self) -> io::Result<Option<char>> {
        Ok(self.input.front().copied())
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let c = self.input.pop_front();
        if let Some(c) = c {
            self.record_input(c);
        }
        Ok(c)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.input.is_empty() {
            return Ok(None);
        }
        let mut line = String::new();
        while let Some(c) = self.input.pop_front() {
            self.record_input(c);
            line.push(c);
            if c == '\n' {
                break;
            }
        }
        trim_line_ending(&mut line);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.record_output(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_line_strips_terminator_and_records_it() {
        let mut channel = ScriptedChannel::new("Bruno\r\nrest");
        assert_eq!(channel.read_line().unwrap(), Some("Bruno".to_string()));
        assert_eq!(channel.transcript(), &[Segment::input("Bruno\r\n")]);
        assert_eq!(channel.remaining(), "rest");
    }

    #[test]
    fn test_read_line_returns_partial_last_line() {
        let mut channel = ScriptedChannel::new("tail");
        assert_eq!(channel.read_line().unwrap(), Some("tail".to_string()));
        assert_eq!(channel.read_line().unwrap(), None);
    }

    #[test]
    fn test_peek_does_not_consume_or_record() {
        let mut channel = ScriptedChannel::new("q");
        assert_eq!(channel.peek().unwrap(), Some('q'));
        assert_eq!(channel.peek().unwrap(), Some('q'));
        assert!(channel.transcript().is_empty());
        assert_eq!(channel.read_char().unwrap(), Some('q'));
        assert_eq!(channel.peek().unwrap(), None);
        assert_eq!(channel.read_char().unwrap(), None);
    }

    #[test]
    fn test_transcript_merges_consecutive_segments() {
        let mut channel = ScriptedChannel::new("nBruno\n");
        channel.write("Name").unwrap();
        channel.write(": ").unwrap();
        channel.read_char().unwrap();
        channel.read_line().unwrap();
        channel.write_line("done").unwrap();
        assert_eq!(
            channel.transcript(),
            &[
                Segment::output("Name: "),
                Segment::input("nBruno\n"),
                Segment::output("done\n"),
            ]
        );
        assert_eq!(channel.output(), "Name: done\n");
    }

    #[test]
    fn test_clear_is_a_noop() {
        let mut channel = ScriptedChannel::new("");
        channel.clear().unwrap();
        assert!(channel.transcript().is_empty());
    }
}
