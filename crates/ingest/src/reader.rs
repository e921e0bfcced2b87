use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::error::IngestError;

pub struct FileReader;

impl FileReader {
    pub async fn read_file(path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path).await
    }

    /// Read every `.txt` file in `dir` fully into memory as `(path, text)`
    /// pairs. An unreadable file is logged and skipped; an unreadable
    /// directory is an error. No ordering is guaranteed.
    pub async fn read_directory(dir: &Path) -> Result<Vec<(String, String)>, IngestError> {
        let directory_err = |source| IngestError::Directory {
            path: dir.to_string_lossy().to_string(),
            source,
        };

        let mut files = Vec::new();
        let mut entries = fs::read_dir(dir).await.map_err(directory_err)?;

        while let Some(entry) = entries.next_entry().await.map_err(directory_err)? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            match Self::read_file(&path).await {
                Ok(content) => {
                    files.push((path.to_string_lossy().to_string(), content));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable text file");
                }
            }
        }

        if files.is_empty() {
            warn!(dir = %dir.display(), "no text files found in input directory");
        }

        Ok(files)
    }
}
