//! Operation factory and registry.

use std::sync::Arc;

use tracing::debug;

use crate::operation::{Add, Multiply, Operation, Subtract};

/// Error type for operation lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// No operation is registered under this name.
    #[error("unknown operation: {0}")]
    Unknown(String),
}

/// Factory trait for resolving operations by name.
pub trait OperationFactory: Send + Sync {
    /// Get an operation by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Operation>, OperationError>;

    /// List all available operation names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory over the built-in operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OperationFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Operation>, OperationError> {
        let op: Arc<dyn Operation> = match name {
            "add" => Arc::new(Add::new()),
            "sub" | "subtract" => Arc::new(Subtract::new()),
            "mul" | "multiply" => Arc::new(Multiply::new()),
            _ => return Err(OperationError::Unknown(name.to_string())),
        };
        debug!(requested = name, operation = op.name(), "resolved operation");
        Ok(op)
    }

    fn available(&self) -> Vec<&str> {
        vec!["add", "sub", "mul"]
    }
}
