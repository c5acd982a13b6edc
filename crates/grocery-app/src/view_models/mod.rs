//! View models for Grocery front ends

mod list_items;

pub use list_items::GroceryListItemsViewModel;
