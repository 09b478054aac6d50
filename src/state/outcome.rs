//! Result of a single fallible attempt

/// Either a value or a failure with an optional operator-facing message
///
/// `Failure(None)` is a silent failure: nothing is shown, but the retry loop
/// still decides whether to offer another attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(Option<String>),
}

impl<T> Outcome<T> {
    /// Failure carrying a message for the operator
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(Some(message.into()))
    }
}
