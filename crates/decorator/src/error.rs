use std::error::Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecoratorError>;

#[derive(Debug, Error)]
pub enum DecoratorError {
    /// The operation exists on no layer of the stack. The stack is reported as one
    /// logical object, so the message never names the layer where the search ended.
    #[error("operation `{operation}` was not found in the decorator, or the decorated object(s)")]
    CapabilityNotFound { operation: String },

    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("operation `{operation}` expects {expected} argument(s), but {given} given")]
    InvalidArguments { operation: String, expected: usize, given: usize },

    #[error("options error: {source}")]
    Options {
        #[from]
        source: serde_json::Error,
    },

    #[error("component error: {source}")]
    Component { source: Box<dyn Error + Send + Sync> },
}

impl DecoratorError {
    pub fn capability_not_found<S: ToString>(operation: S) -> Self {
        Self::CapabilityNotFound { operation: operation.to_string() }
    }

    pub fn configuration<S: ToString>(reason: S) -> Self {
        Self::Configuration { reason: reason.to_string() }
    }

    pub fn invalid_arguments<S: ToString>(operation: S, expected: usize, given: usize) -> Self {
        Self::InvalidArguments { operation: operation.to_string(), expected, given }
    }

    pub fn component<E: Into<Box<dyn Error + Send + Sync>>>(e: E) -> Self {
        Self::Component { source: e.into() }
    }

    /// Returns true when this is a `CapabilityNotFound` for exactly `operation`.
    pub fn is_not_found_for(&self, operation: &str) -> bool {
        matches!(self, Self::CapabilityNotFound { operation: missing } if missing == operation)
    }
}
