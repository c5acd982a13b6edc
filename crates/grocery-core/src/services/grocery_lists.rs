//! Grocery list storage operations

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{GroceryList, GroceryListId};

/// Trait for grocery list storage operations
#[async_trait]
pub trait GroceryListService: Send + Sync {
    /// List every known grocery list
    async fn all(&self) -> Result<Vec<GroceryList>>;

    /// Get a grocery list by ID
    async fn get(&self, id: GroceryListId) -> Result<Option<GroceryList>>;

    /// Persist updated display attributes (name, color)
    async fn update(&self, list: GroceryList) -> Result<GroceryList>;
}

/// In-memory implementation of `GroceryListService`
#[derive(Default)]
pub struct InMemoryGroceryListService {
    lists: Mutex<Vec<GroceryList>>,
}

impl InMemoryGroceryListService {
    /// Create a service seeded with the given lists.
    #[must_use]
    pub fn new(lists: Vec<GroceryList>) -> Self {
        Self {
            lists: Mutex::new(lists),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GroceryList>> {
        self.lists.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GroceryListService for InMemoryGroceryListService {
    async fn all(&self) -> Result<Vec<GroceryList>> {
        Ok(self.lock().clone())
    }

    async fn get(&self, id: GroceryListId) -> Result<Option<GroceryList>> {
        Ok(self.lock().iter().find(|list| list.id == id).cloned())
    }

    async fn update(&self, list: GroceryList) -> Result<GroceryList> {
        let mut lists = self.lock();
        let Some(stored) = lists.iter_mut().find(|stored| stored.id == list.id) else {
            return Err(Error::ListNotFound(list.id.to_string()));
        };
        *stored = list.clone();
        Ok(list)
    }
}
