// ABOUTME: Error type for failed engine calls.
// ABOUTME: Carries the engine's error text verbatim, with no classification.

use thiserror::Error;

/// A failed call against the container engine.
///
/// The wrapper does not retry and does not interpret engine error codes; the
/// message is the engine's own error text, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<bollard::errors::Error> for EngineError {
    fn from(e: bollard::errors::Error) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message_verbatim() {
        let err = EngineError::new("no such container: foo");
        assert_eq!(err.to_string(), "no such container: foo");
        assert_eq!(err.message(), "no such container: foo");
    }
}
