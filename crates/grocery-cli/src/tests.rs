use std::path::Path;

use grocery_app::ui::{ui_channel, UiState};
use grocery_core::models::Product;
use grocery_core::services::GroceryListService;
use grocery_core::CancelToken;

use crate::commands::common::{resolve_list, resolve_product, AppContext};
use crate::commands::export::split_output;
use crate::error::CliError;

#[tokio::test]
async fn resolve_list_by_name_ignores_case() {
    let ctx = AppContext::build(None).unwrap();

    let list = resolve_list(&ctx, "weekly SHOP").await.unwrap();
    assert_eq!(list.name, "Weekly shop");
}

#[tokio::test]
async fn resolve_list_by_id_prefix() {
    let ctx = AppContext::build(None).unwrap();
    let expected = ctx.lists.all().await.unwrap()[0].clone();
    // UUID v7 ids share their leading timestamp characters; take enough of
    // the random tail to stay unambiguous.
    let prefix: String = expected.id.as_str().chars().take(24).collect();

    let list = resolve_list(&ctx, &prefix).await.unwrap();
    assert_eq!(list.id, expected.id);
}

#[tokio::test]
async fn resolve_list_unknown_reference_fails() {
    let ctx = AppContext::build(None).unwrap();

    let error = resolve_list(&ctx, "no such list").await.unwrap_err();
    assert!(matches!(error, CliError::ListNotFound(_)));

    let error = resolve_list(&ctx, "  ").await.unwrap_err();
    assert!(matches!(error, CliError::ListNotFound(_)));
}

#[test]
fn resolve_product_matches_whole_name_case_insensitively() {
    let candidates = vec![Product::new("Milk", 3), Product::new("Buttermilk", 2)];

    let product = resolve_product(&candidates, "MILK").unwrap();
    assert_eq!(product.name, "Milk");
}

#[test]
fn resolve_product_unknown_reference_fails() {
    let candidates = vec![Product::new("Milk", 3)];

    let error = resolve_product(&candidates, "Bread").unwrap_err();
    assert!(matches!(error, CliError::ProductNotFound(_)));
}

#[test]
fn split_output_keeps_an_explicit_parent() {
    let (root, name) = split_output(Path::new("/tmp/exports/list.json")).unwrap();
    assert_eq!(root, Path::new("/tmp/exports"));
    assert_eq!(name, "list.json");
}

#[test]
fn split_output_bare_file_name_uses_the_default_directory() {
    let (root, name) = split_output(Path::new("list.json")).unwrap();
    assert_eq!(name, "list.json");
    assert!(!root.as_os_str().is_empty());
}

#[tokio::test]
async fn export_writes_the_file_beneath_the_chosen_root() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = AppContext::build(None).unwrap();
    let list = resolve_list(&ctx, "Weekly shop").await.unwrap();

    let (ui, mut receiver) = ui_channel();
    let mut vm = ctx.view_model(ui, dir.path().to_path_buf());
    vm.select_list(list).await.unwrap();
    vm.share_list(None, &CancelToken::new()).await;

    let mut state = UiState::default();
    state.apply_all(&mut receiver);
    assert_eq!(state.toasts[0].message, "Grocery list saved.");
    assert!(dir.path().join("weekly-shop.json").exists());
}
