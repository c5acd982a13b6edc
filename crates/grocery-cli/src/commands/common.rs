//! Shared command helpers: service construction, lookups, and UI rendering.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use grocery_app::ui::{NavigationRequest, ToastKind, UiHandle, UiState};
use grocery_app::GroceryListItemsViewModel;
use grocery_core::models::{GroceryList, GroceryListItem, Product};
use grocery_core::services::{
    GroceryListService, InMemoryGroceryListItemsService, InMemoryGroceryListService,
    InMemoryProductService, LocalFileSaver,
};

use crate::error::CliError;
use crate::seed::load_seed;

/// Services backing a single CLI invocation.
pub struct AppContext {
    pub lists: Arc<InMemoryGroceryListService>,
    pub items: Arc<InMemoryGroceryListItemsService>,
    pub products: Arc<InMemoryProductService>,
}

impl AppContext {
    /// Build services from the seed file (or the embedded seed).
    pub fn build(data: Option<&Path>) -> Result<Self, CliError> {
        let seed = load_seed(data)?;
        tracing::debug!(
            "Seeded {} lists, {} products, {} items",
            seed.lists.len(),
            seed.products.len(),
            seed.items.len()
        );
        Ok(Self {
            lists: Arc::new(InMemoryGroceryListService::new(seed.lists)),
            items: Arc::new(InMemoryGroceryListItemsService::new(seed.items)),
            products: Arc::new(InMemoryProductService::new(seed.products)),
        })
    }

    /// Build the items view model against these services.
    ///
    /// Exports are written beneath `export_root`.
    #[must_use]
    pub fn view_model(&self, ui: UiHandle, export_root: PathBuf) -> GroceryListItemsViewModel {
        GroceryListItemsViewModel::new(
            self.items.clone(),
            self.products.clone(),
            Arc::new(LocalFileSaver::new(export_root)),
            ui,
        )
    }
}

/// Resolve a list by full id, id prefix, or case-insensitive name.
pub async fn resolve_list(ctx: &AppContext, reference: &str) -> Result<GroceryList, CliError> {
    let lists = ctx.lists.all().await?;
    let needle = reference.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CliError::ListNotFound(reference.to_string()));
    }

    let matches: Vec<&GroceryList> = lists
        .iter()
        .filter(|list| list.id.as_str().starts_with(&needle) || list.name.to_lowercase() == needle)
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::ListNotFound(reference.to_string())),
        [list] => Ok((*list).clone()),
        _ => Err(CliError::AmbiguousList(format!(
            "Multiple lists match {reference}; use a longer id prefix"
        ))),
    }
}

/// Resolve a product among the given candidates by id prefix or name.
pub fn resolve_product<'a>(
    candidates: &'a [Product],
    reference: &str,
) -> Result<&'a Product, CliError> {
    let needle = reference.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CliError::ProductNotFound(reference.to_string()));
    }

    let matches: Vec<&Product> = candidates
        .iter()
        .filter(|product| {
            product.id.as_str().starts_with(&needle) || product.name.to_lowercase() == needle
        })
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::ProductNotFound(reference.to_string())),
        [product] => Ok(product),
        _ => Err(CliError::AmbiguousProduct(format!(
            "Multiple products match {reference}; use a longer id prefix"
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct ListRow {
    pub id: String,
    pub name: String,
    pub created_on: String,
    pub color: String,
}

#[must_use]
pub fn list_to_row(list: &GroceryList) -> ListRow {
    ListRow {
        id: list.id.to_string(),
        name: list.name.clone(),
        created_on: list.created_on.to_string(),
        color: list.color.clone(),
    }
}

#[derive(Debug, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub stock: u32,
}

#[must_use]
pub fn product_to_row(product: &Product) -> ProductRow {
    ProductRow {
        id: product.id.to_string(),
        name: product.name.clone(),
        stock: product.stock,
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRow {
    pub id: String,
    pub product_id: String,
    pub product: String,
    pub amount: u32,
}

/// Build an item row, resolving the product name from the catalog.
#[must_use]
pub fn item_to_row(item: &GroceryListItem, catalog: &[Product]) -> ItemRow {
    let product = catalog
        .iter()
        .find(|product| product.id == item.product_id)
        .map_or("(unknown product)", |product| product.name.as_str());

    ItemRow {
        id: item.id.to_string(),
        product_id: item.product_id.to_string(),
        product: product.to_string(),
        amount: item.amount,
    }
}

/// Print toasts and navigation requests collected by the UI executor.
pub fn render_notices(state: &UiState) {
    for toast in &state.toasts {
        match toast.kind {
            ToastKind::Success => println!("{}", toast.message),
            ToastKind::Error => eprintln!("{}", toast.message),
        }
    }
    for request in &state.navigations {
        let NavigationRequest::EditListColor { list_id, name } = request;
        println!("Navigate: edit color for {name} ({list_id})");
    }
}
