use thiserror::Error;

/// A parse- or type-resolution-time failure, attributed to the JSON
/// path (`key`) at which it occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (at \"{key}\")")]
pub struct CompileError {
    pub message: String,
    pub key: String,
}

impl CompileError {
    pub fn new(message: impl Into<String>, key: impl Into<String>) -> Self {
        CompileError {
            message: message.into(),
            key: key.into(),
        }
    }
}

/// A runtime evaluation failure. Carries a descriptive message only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EvaluationError {
    pub message: String,
}

impl EvaluationError {
    pub fn new(message: impl Into<String>) -> Self {
        EvaluationError {
            message: message.into(),
        }
    }
}
