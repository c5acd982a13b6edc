use std::path::Path;

use grocery_app::ui::{ui_channel, UiState};
use grocery_core::services::ProductService;

use crate::commands::common::{render_notices, resolve_list, resolve_product, AppContext};
use crate::commands::export::default_export_directory;
use crate::error::CliError;

pub async fn run_add(
    data: Option<&Path>,
    list_ref: &str,
    product_ref: &str,
) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let list = resolve_list(&ctx, list_ref).await?;
    let list_name = list.name.clone();

    let (ui, mut receiver) = ui_channel();
    let mut vm = ctx.view_model(ui, default_export_directory());
    vm.select_list(list).await?;

    // Resolve against the available set: out-of-stock products and products
    // already on the list are not addable.
    let product = resolve_product(vm.available(), product_ref)?.clone();
    vm.add_product(product.id).await?;

    let mut state = UiState::default();
    state.apply_all(&mut receiver);
    render_notices(&state);

    let remaining = ctx
        .products
        .all()
        .await?
        .into_iter()
        .find(|stored| stored.id == product.id)
        .map_or(0, |stored| stored.stock);
    println!(
        "Added {} to {} ({} items on the list, {} left in stock)",
        product.name,
        list_name,
        state.items.len(),
        remaining
    );

    Ok(())
}
