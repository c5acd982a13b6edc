use std::path::Path;

use grocery_core::services::GroceryListService;

use crate::commands::common::{list_to_row, AppContext, ListRow};
use crate::error::CliError;

pub async fn run_lists(data: Option<&Path>, as_json: bool) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let lists = ctx.lists.all().await?;

    if as_json {
        let rows = lists.iter().map(list_to_row).collect::<Vec<ListRow>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for list in &lists {
            println!(
                "{}  {}  {}  {}",
                list.id, list.created_on, list.color, list.name
            );
        }
    }

    Ok(())
}
