use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, imaging::ports::ScratchFileStore};

const SCRATCH_FILE_PREFIX: &str = "temp_medical_image";

/// Writes uploads to `<dir>/temp_medical_image-<session_id>.png`.
#[derive(Debug, Clone)]
pub struct FsScratchFileStore {
    dir: PathBuf,
}

impl FsScratchFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, session_id: Uuid) -> PathBuf {
        self.dir
            .join(format!("{}-{}.png", SCRATCH_FILE_PREFIX, session_id))
    }
}

impl ScratchFileStore for FsScratchFileStore {
    async fn write(&self, session_id: Uuid, data: Vec<u8>) -> Result<PathBuf, CoreError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            error!(dir = %self.dir.display(), "Failed to create scratch dir: {}", e);
            CoreError::ScratchFile(e.to_string())
        })?;

        let path = self.path_for(session_id);
        tokio::fs::write(&path, data).await.map_err(|e| {
            error!(path = %path.display(), "Failed to write scratch file: {}", e);
            CoreError::ScratchFile(e.to_string())
        })?;

        debug!(path = %path.display(), "Scratch image written");
        Ok(path)
    }

    async fn read(&self, path: PathBuf) -> Result<Vec<u8>, CoreError> {
        tokio::fs::read(&path).await.map_err(|e| {
            error!(path = %path.display(), "Failed to read scratch file: {}", e);
            CoreError::ScratchFile(e.to_string())
        })
    }

    async fn remove(&self, path: PathBuf) -> Result<(), CoreError> {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Scratch image removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::ScratchFile(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = TempDir::new().unwrap();
        let store = FsScratchFileStore::new(dir.path().join("scratch"));
        let session_id = Uuid::new_v4();

        let path = store.write(session_id, vec![1, 2, 3]).await.unwrap();
        assert_eq!(path, store.path_for(session_id));
        assert_eq!(store.read(path.clone()).await.unwrap(), vec![1, 2, 3]);

        store.remove(path.clone()).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = FsScratchFileStore::new(dir.path().to_path_buf());

        assert!(store.remove(store.path_for(Uuid::new_v4())).await.is_ok());
    }

    #[tokio::test]
    async fn test_sessions_get_distinct_paths() {
        let store = FsScratchFileStore::new(PathBuf::from("/tmp/scratch"));
        assert_ne!(store.path_for(Uuid::new_v4()), store.path_for(Uuid::new_v4()));
    }
}
