use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::DatasetStore;
use crate::{models::User, utils::AppError};

/// Parses a roster document (JSON array of users).
pub fn parse_users(bytes: &[u8]) -> Result<Vec<User>, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::MalformedUpload(e.to_string()))
}

/// Carrega o arquivo salvo no disco para o store.
///
/// A missing or unparseable file is logged and leaves the store untouched.
pub async fn load_from_file(store: &DatasetStore, path: &Path) -> Result<usize, AppError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("⚠️  Could not read dataset {}: {}", path.display(), e);
            return Err(AppError::Storage(e.to_string()));
        }
    };

    match parse_users(&bytes) {
        Ok(users) => {
            let count = users.len();
            store.replace(users);
            log::info!("✅ Dataset loaded from {} ({} users)", path.display(), count);
            Ok(count)
        }
        Err(e) => {
            log::warn!("⚠️  Dataset {} is not valid: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Writes the accepted document to `path`.
///
/// Goes through a temporary sibling and a rename so the file on disk is never
/// half-written.
pub async fn persist(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to replace {}: {}", path.display(), e)))?;

    Ok(())
}

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Sibling of `path` unique to this process and call: `usuarios.json.<pid>.<seq>.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.{}.tmp", std::process::id(), seq));
    path.with_file_name(name)
}
