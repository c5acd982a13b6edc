//! View model for the items of a selected grocery list.
//!
//! Holds the full set of available products (in stock, not yet on the list)
//! and republishes the search-filtered subset to the UI executor whenever the
//! list selection, the items, or the search text change.

use std::path::PathBuf;
use std::sync::Arc;

use grocery_core::catalog::{available_products, filter_products};
use grocery_core::export::{render_json_export, suggested_export_file_name};
use grocery_core::models::{GroceryList, GroceryListItem, Product, ProductId};
use grocery_core::services::{FileSaverService, GroceryListItemsService, ProductService};
use grocery_core::{CancelToken, Error, Result};

use crate::ui::{NavigationRequest, Toast, UiEvent, UiHandle};

/// Toast shown when an export completes.
const EXPORT_SAVED_MESSAGE: &str = "Grocery list saved.";
/// Toast prefix shown when an export fails.
const EXPORT_FAILED_PREFIX: &str = "Saving failed";

/// View model backing the grocery-list items screen.
pub struct GroceryListItemsViewModel {
    items_service: Arc<dyn GroceryListItemsService>,
    product_service: Arc<dyn ProductService>,
    file_saver: Arc<dyn FileSaverService>,
    ui: UiHandle,
    list: Option<GroceryList>,
    items: Vec<GroceryListItem>,
    available: Vec<Product>,
    search_text: String,
}

impl GroceryListItemsViewModel {
    /// Create a view model with no list selected.
    #[must_use]
    pub fn new(
        items_service: Arc<dyn GroceryListItemsService>,
        product_service: Arc<dyn ProductService>,
        file_saver: Arc<dyn FileSaverService>,
        ui: UiHandle,
    ) -> Self {
        Self {
            items_service,
            product_service,
            file_saver,
            ui,
            list: None,
            items: Vec::new(),
            available: Vec::new(),
            search_text: String::new(),
        }
    }

    /// The active list, if one is selected.
    #[must_use]
    pub fn list(&self) -> Option<&GroceryList> {
        self.list.as_ref()
    }

    /// Items currently on the active list.
    #[must_use]
    pub fn items(&self) -> &[GroceryListItem] {
        &self.items
    }

    /// Full set of products eligible for addition, before search filtering.
    #[must_use]
    pub fn available(&self) -> &[Product] {
        &self.available
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Select a list and reload its items and available products.
    pub async fn select_list(&mut self, list: GroceryList) -> Result<()> {
        tracing::debug!("Selecting grocery list {} ({})", list.name, list.id);
        self.list = Some(list);
        self.load().await
    }

    /// Update the search text and republish the displayed subset.
    pub fn search(&mut self, query: impl Into<String>) {
        self.search_text = query.into();
        self.publish_displayed();
    }

    /// Add an available product to the active list.
    ///
    /// A product id that is not in the available set (unknown, out of stock,
    /// or already on the list) is a no-op. A successful add persists the new
    /// item, takes one unit of stock, and reloads the derived sets so the
    /// observable state matches a fresh selection.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<()> {
        let Some(list) = self.list.clone() else {
            return Ok(());
        };
        let Some(mut product) = self
            .available
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
        else {
            tracing::debug!("Ignoring add for product outside the available set: {product_id}");
            return Ok(());
        };

        let item = GroceryListItem::new(list.id, product.id, 1);
        self.items_service.add(item).await?;

        product.take_one();
        self.product_service.update(product).await?;

        // Drop the product locally before the reload so the displayed set
        // cannot re-offer it between the two updates.
        self.available.retain(|product| product.id != product_id);
        self.ui.dispatch(UiEvent::RemoveDisplayedProduct(product_id));

        self.load().await
    }

    /// Publish a navigation request for the list's color/name editor.
    pub fn edit_color(&self) {
        if let Some(list) = &self.list {
            self.ui
                .dispatch(UiEvent::Navigate(NavigationRequest::EditListColor {
                    list_id: list.id,
                    name: list.name.clone(),
                }));
        }
    }

    /// Export the active list's items as a JSON file.
    ///
    /// `file_name` overrides the name derived from the list name. Failures
    /// never escape this boundary: success and failure both surface as
    /// toasts, and a cancelled save surfaces as nothing at all.
    pub async fn share_list(&self, file_name: Option<&str>, cancel: &CancelToken) {
        let Some(list) = &self.list else {
            return;
        };

        match self.save_items(list, file_name, cancel).await {
            Ok(path) => {
                tracing::info!("Exported grocery list {} to {}", list.name, path.display());
                self.ui
                    .dispatch(UiEvent::Toast(Toast::success(EXPORT_SAVED_MESSAGE)));
            }
            Err(Error::Cancelled) => {
                tracing::debug!("Export of grocery list {} cancelled", list.name);
            }
            Err(error) => {
                self.ui.dispatch(UiEvent::Toast(Toast::error(format!(
                    "{EXPORT_FAILED_PREFIX}: {error}"
                ))));
            }
        }
    }

    async fn save_items(
        &self,
        list: &GroceryList,
        file_name: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<PathBuf> {
        let rendered = render_json_export(&self.items)?;
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => suggested_export_file_name(&list.name),
        };
        self.file_saver.save(&file_name, &rendered, cancel).await
    }

    async fn load(&mut self) -> Result<()> {
        let Some(list) = self.list.clone() else {
            return Ok(());
        };

        self.items = self.items_service.all_for_list(list.id).await?;
        self.ui.dispatch(UiEvent::ListItems(self.items.clone()));

        let catalog = self.product_service.all().await?;
        self.available = available_products(&catalog, &self.items);
        self.publish_displayed();
        Ok(())
    }

    fn publish_displayed(&self) {
        let displayed = filter_products(&self.available, &self.search_text);
        self.ui.dispatch(UiEvent::DisplayedProducts(displayed));
    }
}
