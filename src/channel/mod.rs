//! Text channels the form engine talks through

#[cfg(test)]
mod scripted;
mod stream;
mod terminal;
mod traits;

pub use stream::StreamChannel;
pub use terminal::TerminalChannel;
pub use traits::TextChannel;

#[cfg(test)]
pub use scripted::{ScriptedChannel, Segment};
