use std::path::Path;

use grocery_core::services::{GroceryListItemsService, ProductService};

use crate::commands::common::{item_to_row, resolve_list, AppContext, ItemRow};
use crate::error::CliError;

pub async fn run_items(data: Option<&Path>, list_ref: &str, as_json: bool) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let list = resolve_list(&ctx, list_ref).await?;

    let items = ctx.items.all_for_list(list.id).await?;
    let catalog = ctx.products.all().await?;
    let rows = items
        .iter()
        .map(|item| item_to_row(item, &catalog))
        .collect::<Vec<ItemRow>>();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{} ({} items)", list.name, rows.len());
        for row in &rows {
            println!("{}  {:>2}x  {}", row.id, row.amount, row.product);
        }
    }

    Ok(())
}
