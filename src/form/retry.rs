//! Retry-until-valid loop
//!
//! Wraps a fallible attempt: on failure the message is shown and the operator
//! chooses between another attempt and giving up.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::channel::TextChannel;
use crate::error::Result;
use crate::state::Outcome;

pub const RETRY_PROMPT: &str = "Press \"q\" to quit...\nPress any other key to try again...\n";

/// What to do with a failure that carries no message (the operator
/// cancelled the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbandonPolicy {
    /// Show the retry prompt anyway
    #[default]
    Reprompt,
    /// Stop immediately with no result
    Quit,
}

/// Run `attempt` until it succeeds or the operator quits.
///
/// Returns `Ok(None)` when the operator gives up. Errors from `attempt` or the
/// channel end the loop at once.
pub fn try_until_valid<C, T, F>(
    channel: &mut C,
    on_abandon: AbandonPolicy,
    mut attempt: F,
) -> Result<Option<T>>
where
    C: TextChannel + ?Sized,
    F: FnMut(&mut C) -> Result<Outcome<T>>,
{
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let message = match attempt(channel)? {
            Outcome::Success(value) => {
                debug!(attempts, "attempt succeeded");
                return Ok(Some(value));
            }
            Outcome::Failure(message) => message,
        };

        match message {
            Some(message) => {
                warn!(attempts, %message, "attempt failed");
                channel.write_line(&message)?;
            }
            None if on_abandon == AbandonPolicy::Quit => {
                debug!(attempts, "attempt abandoned, not offering a retry");
                return Ok(None);
            }
            None => debug!(attempts, "attempt abandoned"),
        }

        if !wants_retry(channel)? {
            debug!(attempts, "operator quit");
            return Ok(None);
        }
    }
}

fn wants_retry<C: TextChannel + ?Sized>(channel: &mut C) -> Result<bool> {
    channel.write(RETRY_PROMPT)?;
    Ok(!matches!(channel.read_char()?, None | Some('q' | 'Q')))
}
