use std::path::Path;

use grocery_app::ui::{ui_channel, UiState};
use grocery_core::models::normalize_color;
use grocery_core::services::GroceryListService;

use crate::commands::common::{render_notices, resolve_list, AppContext};
use crate::commands::export::default_export_directory;
use crate::error::CliError;

pub async fn run_recolor(
    data: Option<&Path>,
    list_ref: &str,
    color: Option<&str>,
    name: Option<&str>,
) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let mut list = resolve_list(&ctx, list_ref).await?;

    if color.is_none() && name.is_none() {
        // No change requested; surface the editor target the app would open.
        let (ui, mut receiver) = ui_channel();
        let mut vm = ctx.view_model(ui, default_export_directory());
        vm.select_list(list).await?;
        vm.edit_color();

        let mut state = UiState::default();
        state.apply_all(&mut receiver);
        render_notices(&state);
        return Ok(());
    }

    if let Some(name) = name {
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::EmptyName);
        }
        list.rename(name);
    }
    if let Some(color) = color {
        let normalized =
            normalize_color(color).ok_or_else(|| CliError::InvalidColor(color.to_string()))?;
        list.recolor(normalized);
    }

    let updated = ctx.lists.update(list).await?;
    println!("{}  {}  {}", updated.id, updated.color, updated.name);

    Ok(())
}
