//! File-save service used by the export flow.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};

/// Trait for saving rendered export content
#[async_trait]
pub trait FileSaverService: Send + Sync {
    /// Save UTF-8 content under `file_name`, honoring the cancel token.
    ///
    /// Returns the path the content was written to. A cancelled save returns
    /// `Error::Cancelled`; there is no partial-file guarantee.
    async fn save(&self, file_name: &str, content: &str, cancel: &CancelToken) -> Result<PathBuf>;
}

/// Local-filesystem implementation of `FileSaverService`
///
/// Writes beneath a fixed root directory, creating it as needed. File names
/// must be plain names, not paths.
pub struct LocalFileSaver {
    root: PathBuf,
}

impl LocalFileSaver {
    /// Create a saver writing beneath the given root directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this saver writes beneath.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn validate_file_name(file_name: &str) -> Result<()> {
        if file_name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Export file name cannot be empty".to_string(),
            ));
        }
        if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
            return Err(Error::InvalidInput(format!(
                "Export file name must be a plain name: {file_name}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl FileSaverService for LocalFileSaver {
    async fn save(&self, file_name: &str, content: &str, cancel: &CancelToken) -> Result<PathBuf> {
        Self::validate_file_name(file_name)?;
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(file_name);
        tokio::fs::write(&path, content).await?;

        if cancel.is_cancelled() {
            // The file may exist on disk; the caller treats the save as
            // aborted regardless.
            return Err(Error::Cancelled);
        }

        tracing::debug!("Saved export to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_content_beneath_root() {
        let dir = tempfile::tempdir().unwrap();
        let saver = LocalFileSaver::new(dir.path().join("exports"));

        let path = saver
            .save("list.json", "[]", &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("exports").join("list.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn save_rejects_path_like_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let saver = LocalFileSaver::new(dir.path());

        for name in ["", "  ", "a/b.json", "..", "a\\b.json"] {
            let error = saver
                .save(name, "[]", &CancelToken::new())
                .await
                .unwrap_err();
            assert!(matches!(error, Error::InvalidInput(_)), "name: {name:?}");
        }
    }

    #[tokio::test]
    async fn cancelled_save_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let saver = LocalFileSaver::new(dir.path());
        let cancel = CancelToken::new();
        cancel.cancel();

        let error = saver.save("list.json", "[]", &cancel).await.unwrap_err();
        assert!(matches!(error, Error::Cancelled));
        assert!(!dir.path().join("list.json").exists());
    }
}
