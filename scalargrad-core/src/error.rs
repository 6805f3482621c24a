use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Network must contain at least one layer")]
    EmptyArchitecture,
}
