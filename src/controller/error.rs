use std::fmt;

use crate::api::ApiError;
use crate::controller::request::Operation;

/// A failed controller operation, as reported to the caller.
#[derive(Debug)]
pub struct ControllerError {
    pub operation: Operation,
    pub source: ApiError,
}

impl ControllerError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation.failure_message(), self.source)
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
