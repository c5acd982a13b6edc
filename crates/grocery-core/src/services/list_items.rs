//! Grocery list item storage operations

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{GroceryListId, GroceryListItem};

/// Trait for list item storage operations
#[async_trait]
pub trait GroceryListItemsService: Send + Sync {
    /// List the items on the given grocery list
    async fn all_for_list(&self, list_id: GroceryListId) -> Result<Vec<GroceryListItem>>;

    /// Persist a new item
    async fn add(&self, item: GroceryListItem) -> Result<GroceryListItem>;
}

/// In-memory implementation of `GroceryListItemsService`
#[derive(Default)]
pub struct InMemoryGroceryListItemsService {
    items: Mutex<Vec<GroceryListItem>>,
}

impl InMemoryGroceryListItemsService {
    /// Create a service seeded with the given items.
    #[must_use]
    pub fn new(items: Vec<GroceryListItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GroceryListItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GroceryListItemsService for InMemoryGroceryListItemsService {
    async fn all_for_list(&self, list_id: GroceryListId) -> Result<Vec<GroceryListItem>> {
        Ok(self
            .lock()
            .iter()
            .filter(|item| item.grocery_list_id == list_id)
            .cloned()
            .collect())
    }

    async fn add(&self, item: GroceryListItem) -> Result<GroceryListItem> {
        if item.amount == 0 {
            return Err(Error::InvalidInput(
                "Item amount must be at least 1".to_string(),
            ));
        }
        self.lock().push(item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;

    #[tokio::test]
    async fn all_for_list_filters_by_list() {
        let list_a = GroceryListId::new();
        let list_b = GroceryListId::new();
        let service = InMemoryGroceryListItemsService::new(vec![
            GroceryListItem::new(list_a, ProductId::new(), 1),
            GroceryListItem::new(list_b, ProductId::new(), 2),
            GroceryListItem::new(list_a, ProductId::new(), 3),
        ]);

        let items = service.all_for_list(list_a).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.grocery_list_id == list_a));
    }

    #[tokio::test]
    async fn add_persists_the_item() {
        let service = InMemoryGroceryListItemsService::default();
        let list_id = GroceryListId::new();
        let item = GroceryListItem::new(list_id, ProductId::new(), 1);

        service.add(item.clone()).await.unwrap();

        let items = service.all_for_list(list_id).await.unwrap();
        assert_eq!(items, vec![item]);
    }

    #[tokio::test]
    async fn add_rejects_zero_amount() {
        let service = InMemoryGroceryListItemsService::default();
        let item = GroceryListItem::new(GroceryListId::new(), ProductId::new(), 0);

        let error = service.add(item).await.unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
    }
}
