use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] grocery_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Grocery list not found for id/name: {0}")]
    ListNotFound(String),
    #[error("{0}")]
    AmbiguousList(String),
    #[error("No available product matches: {0}")]
    ProductNotFound(String),
    #[error("{0}")]
    AmbiguousProduct(String),
    #[error("Invalid color (expected #RRGGBB): {0}")]
    InvalidColor(String),
    #[error("List name cannot be empty")]
    EmptyName,
    #[error("Invalid output path: {0}")]
    InvalidOutput(String),
    #[error("Seed data error: {0}")]
    Seed(String),
}
