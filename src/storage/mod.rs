//! Image file storage

use crate::error::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Writes uploaded images under a configured root directory.
///
/// Stored paths are relative to the root so the root can move between
/// environments without rewriting DB rows.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Save image bytes under `<root>/<subdir>/<millis>-<file_name>`.
    /// Returns the relative path to store in the database.
    pub async fn save(&self, subdir: &str, file_name: &str, bytes: &[u8]) -> Result<String> {
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;

        let safe_name = sanitize_file_name(file_name);
        let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), safe_name);
        let relative = format!("{}/{}", subdir, stored_name);

        tokio::fs::write(dir.join(&stored_name), bytes).await?;
        tracing::debug!(path = %relative, size = bytes.len(), "Saved image");
        Ok(relative)
    }

    /// Delete a previously stored image. Best-effort: a missing file is not an error.
    pub async fn delete(&self, relative_path: &str) {
        let full = self.root.join(relative_path);
        if let Err(e) = tokio::fs::remove_file(&full).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %relative_path, error = %e, "Failed to delete image");
            }
        }
    }

    /// Absolute path for a stored relative path
    pub fn full_path(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Strip path separators and oddities from client-supplied file names
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let path = store
            .save("restaurants", "logo.png", b"fake image bytes")
            .await
            .unwrap();
        assert!(path.starts_with("restaurants/"));
        assert!(path.ends_with("-logo.png"));
        assert!(store.full_path(&path).exists());

        store.delete(&path).await;
        assert!(!store.full_path(&path).exists());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        // Should not panic or return an error path
        store.delete("restaurants/does-not-exist.png").await;
    }

    #[tokio::test]
    async fn test_save_sanitizes_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let path = store
            .save("sliders", "../../etc/passwd", b"data")
            .await
            .unwrap();
        assert!(path.starts_with("sliders/"));
        assert!(!path.contains(".."));
        assert!(store.full_path(&path).exists());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("logo.png"), "logo.png");
        assert_eq!(sanitize_file_name("a b.png"), "a_b.png");
        assert_eq!(sanitize_file_name("dir/logo.png"), "logo.png");
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
    }
}
