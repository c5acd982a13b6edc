use std::path::Path;

use grocery_app::ui::{ui_channel, UiState};

use crate::commands::common::{product_to_row, resolve_list, AppContext, ProductRow};
use crate::commands::export::default_export_directory;
use crate::error::CliError;

pub async fn run_products(
    data: Option<&Path>,
    list_ref: &str,
    search: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let list = resolve_list(&ctx, list_ref).await?;

    let (ui, mut receiver) = ui_channel();
    let mut vm = ctx.view_model(ui, default_export_directory());
    vm.select_list(list).await?;
    if let Some(query) = search {
        vm.search(query);
    }

    let mut state = UiState::default();
    state.apply_all(&mut receiver);

    if as_json {
        let rows = state
            .displayed_products
            .iter()
            .map(product_to_row)
            .collect::<Vec<ProductRow>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for product in &state.displayed_products {
            println!("{}  {:>3}  {}", product.id, product.stock, product.name);
        }
    }

    Ok(())
}
