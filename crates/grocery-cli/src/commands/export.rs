use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use grocery_app::ui::{ui_channel, ToastKind, UiState};
use grocery_core::export::suggested_export_file_name;
use grocery_core::CancelToken;

use crate::commands::common::{render_notices, resolve_list, AppContext};
use crate::error::CliError;

const EXPORT_DIR_NAME: &str = "grocery-exports";

pub async fn run_export(
    data: Option<&Path>,
    list_ref: &str,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let ctx = AppContext::build(data)?;
    let list = resolve_list(&ctx, list_ref).await?;

    let (root, file_name) = match output {
        Some(path) => {
            let (root, name) = split_output(path)?;
            (root, Some(name))
        }
        None => (default_export_directory(), None),
    };
    let resolved_name = file_name
        .clone()
        .unwrap_or_else(|| suggested_export_file_name(&list.name));

    let (ui, mut receiver) = ui_channel();
    let mut vm = ctx.view_model(ui, root.clone());
    vm.select_list(list).await?;
    vm.share_list(file_name.as_deref(), &CancelToken::new())
        .await;

    let mut state = UiState::default();
    state.apply_all(&mut receiver);
    render_notices(&state);

    if state
        .toasts
        .iter()
        .any(|toast| toast.kind == ToastKind::Success)
    {
        println!("{}", root.join(resolved_name).display());
    }

    Ok(())
}

/// Default directory for exports; `GROCERY_EXPORT_DIR` overrides it.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    if let Ok(dir) = std::env::var("GROCERY_EXPORT_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(EXPORT_DIR_NAME)
}

/// Split an output path into the directory to save under and the file name.
pub fn split_output(path: &Path) -> Result<(PathBuf, String), CliError> {
    let file_name = path
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| CliError::InvalidOutput(path.display().to_string()))?
        .to_string();

    let root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => default_export_directory(),
    };

    Ok((root, file_name))
}
