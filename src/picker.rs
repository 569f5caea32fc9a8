//! Native picker backed by the system file dialog.

use std::path::PathBuf;

use profilehero_core::{MediaFilter, PictureSource, ProfileError, ProfileResult};
use rfd::FileDialog;

/// Opens the platform file dialog and reads the chosen file.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPicker;

impl PictureSource for DialogPicker {
    async fn pick(&self, filter: MediaFilter) -> ProfileResult<Option<Vec<u8>>> {
        // Open file picker (blocking, but on a worker so the UI stays responsive)
        let path: Option<PathBuf> = tokio::task::spawn_blocking(move || {
            FileDialog::new()
                .add_filter(filter.label(), filter.extensions())
                .set_title("Select Profile Picture")
                .pick_file()
        })
        .await
        .map_err(|e| ProfileError::Picker(format!("file dialog task failed: {}", e)))?;

        let Some(path) = path else {
            return Ok(None);
        };

        tracing::debug!("Reading picked file {:?}", path);
        let bytes = tokio::fs::read(&path).await?;
        Ok(Some(bytes))
    }
}
