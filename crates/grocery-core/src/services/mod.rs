//! Service interfaces and their bundled implementations.
//!
//! The traits are the seams the app layer is written against; the in-memory
//! implementations back the app and the tests.

mod file_saver;
mod grocery_lists;
mod list_items;
mod products;

pub use file_saver::{FileSaverService, LocalFileSaver};
pub use grocery_lists::{GroceryListService, InMemoryGroceryListService};
pub use list_items::{GroceryListItemsService, InMemoryGroceryListItemsService};
pub use products::{InMemoryProductService, ProductService};
