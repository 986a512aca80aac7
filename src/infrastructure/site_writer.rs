// Writes the rendered document to disk
use super::error::SiteError;
use std::path::Path;

pub async fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    let write_error = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    tokio::fs::write(path, html).await.map_err(write_error)?;

    tracing::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
