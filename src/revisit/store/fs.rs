use super::DataStore;
use crate::error::{Result, RevisitError};
use crate::model::RevisionItem;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATA_FILENAME: &str = "revision_items.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RevisitError::Io)?;
        }
        Ok(())
    }

    // Keep unreadable content around before the next save overwrites it.
    fn set_aside(&self, data_file: &Path) {
        let backup = self.root.join(format!("{}.bak", DATA_FILENAME));
        match fs::copy(data_file, &backup) {
            Ok(_) => tracing::warn!("Copied unreadable data to {}", backup.display()),
            Err(e) => tracing::warn!("Could not back up unreadable data: {e}"),
        }
    }
}

impl DataStore for FileStore {
    fn load_items(&self) -> Result<Vec<RevisionItem>> {
        let data_file = self.data_file();
        let bytes = match fs::read(&data_file) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data at {}, starting empty", data_file.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(RevisitError::Io(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // from_slice also rejects invalid UTF-8, so that lands in the .bak path too
        match serde_json::from_slice::<Vec<RevisionItem>>(&bytes) {
            Ok(items) => {
                tracing::debug!("Loaded {} items from {}", items.len(), data_file.display());
                Ok(items)
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unparsable data in {}: {e}",
                    data_file.display()
                );
                self.set_aside(&data_file);
                Ok(Vec::new())
            }
        }
    }

    fn save_items(&mut self, items: &[RevisionItem]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(RevisitError::Serialization)?;

        let tmp_file = self.root.join(format!(".items-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RevisitError::Io)?;
        let data_file = self.data_file();
        fs::rename(&tmp_file, &data_file).map_err(|e| {
            let _ = fs::remove_file(&tmp_file);
            RevisitError::Store(format!("Failed to replace {}: {e}", data_file.display()))
        })?;

        tracing::debug!("Saved {} items", items.len());
        Ok(())
    }
}
