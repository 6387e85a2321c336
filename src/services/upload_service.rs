//! Persistence of uploaded files under the public directory.
//!
//! Stored names keep the original base name and append a millisecond
//! timestamp so re-uploads never clobber each other.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs;
use tracing::info;

use crate::error::ServiceError;

/// Public subdirectory where game cover images are stored.
pub const IMAGE_SUBDIR: &str = "images/games";
/// Public subdirectory where rules PDFs are stored.
pub const RULES_SUBDIR: &str = "rules";

/// Write an uploaded file below `root/subdir` and return the relative public
/// path (`/subdir/name`) callers should persist.
pub async fn store_upload(
    root: &Path,
    subdir: &str,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, ServiceError> {
    if bytes.is_empty() {
        return Err(ServiceError::InvalidInput("no file was uploaded".into()));
    }

    let unique = unique_name(original_name, unix_millis());
    let dir = root.join(subdir);
    fs::create_dir_all(&dir)
        .await
        .map_err(|err| ServiceError::Upload(format!("failed to create upload dir: {err}")))?;

    let target = dir.join(&unique);
    fs::write(&target, bytes)
        .await
        .map_err(|err| ServiceError::Upload(format!("failed to write upload: {err}")))?;

    info!(path = %target.display(), size = bytes.len(), "stored upload");
    Ok(format!("/{subdir}/{unique}"))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Build `<base>-<timestamp><ext>` from whatever file name the client sent.
///
/// Only the final path component is kept, so a hostile name cannot escape the
/// upload directory.
fn unique_name(original_name: &str, timestamp: u128) -> String {
    let base_name = Path::new(original_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload");

    match base_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{timestamp}.{ext}"),
        _ => format!("{base_name}-{timestamp}"),
    }
}
