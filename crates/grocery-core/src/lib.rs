//! grocery-core - Core library for Grocery
//!
//! This crate contains the shared models, service interfaces, and list logic
//! used by all Grocery interfaces (app layer and CLI).

pub mod cancel;
pub mod catalog;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use models::{
    GroceryList, GroceryListId, GroceryListItem, GroceryListItemId, Product, ProductId,
};
