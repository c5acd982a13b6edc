//! Grocery list item model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GroceryListId, ProductId};

/// A unique identifier for a list item, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroceryListItemId(Uuid);

impl GroceryListItemId {
    /// Create a new unique item ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for GroceryListItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroceryListItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroceryListItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Association between a grocery list and a product, with an amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListItem {
    /// Unique identifier
    pub id: GroceryListItemId,
    /// Owning list
    pub grocery_list_id: GroceryListId,
    /// Referenced product
    pub product_id: ProductId,
    /// Number of units on the list
    pub amount: u32,
}

impl GroceryListItem {
    /// Create a new item for the given list and product.
    #[must_use]
    pub fn new(grocery_list_id: GroceryListId, product_id: ProductId, amount: u32) -> Self {
        Self {
            id: GroceryListItemId::new(),
            grocery_list_id,
            product_id,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_unique() {
        let id1 = GroceryListItemId::new();
        let id2 = GroceryListItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_item_links_list_and_product() {
        let list_id = GroceryListId::new();
        let product_id = ProductId::new();

        let item = GroceryListItem::new(list_id, product_id, 1);
        assert_eq!(item.grocery_list_id, list_id);
        assert_eq!(item.product_id, product_id);
        assert_eq!(item.amount, 1);
    }
}
