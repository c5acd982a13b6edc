//! Error types for grocery-core

use thiserror::Error;

/// Result type alias using grocery-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grocery-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying service failure
    #[error("Service error: {0}")]
    Service(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Grocery list not found
    #[error("Grocery list not found: {0}")]
    ListNotFound(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Operation cancelled before completion
    #[error("Operation cancelled")]
    Cancelled,
}
