//! The single error raised at the boundary between text input and the clock.

use thiserror::Error;

/// Text could not be read as a 24-hour `HH:mm:ss` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input} is not a valid time. Expected format is HH:mm:ss and range must be between 00:00:00 and 23:59:59")]
pub struct InvalidTimeFormat {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidTimeFormat {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
