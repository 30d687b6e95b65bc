//! Local persistence for the handover state.
//!
//! The whole state is one JSON document under a fixed key:
//!
//! ```text
//! <root>/
//!   trocaTurnoData.json   # {selectedShift, pendingMaintenance, completedMaintenance}
//! ```
//!
//! Every save overwrites the document wholesale.

use std::{fs, io, path::PathBuf};

use crate::model::AppState;

/// Key the state document is stored under.
pub const STATE_KEY: &str = "trocaTurnoData";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-backed key-value store holding the state document.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Path of the state document.
    pub fn state_path(&self) -> PathBuf {
        self.root.join(format!("{STATE_KEY}.json"))
    }

    /// Writes the full state snapshot, replacing whatever was stored.
    ///
    /// The document is written beside the target and renamed over it, so a
    /// crash mid-write leaves the previous snapshot intact.
    pub fn save(&self, state: &AppState) -> Result<()> {
        let path = self.state_path();
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), "saved state");
        Ok(())
    }

    /// Reads the stored state.
    ///
    /// Returns `None` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<AppState>> {
        let path = self.state_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded state");
        Ok(Some(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::model::*;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("data")).unwrap();
        (dir, storage)
    }

    fn sample_state() -> AppState {
        AppState {
            selected_shift: Some("B".into()),
            pending: vec![
                MaintenanceItem {
                    id: 1_700_000_000_001,
                    frota: "1234".into(),
                    manutencao: "Troca de óleo".into(),
                    observacao: String::new(),
                },
                MaintenanceItem::empty(1_700_000_000_002),
            ],
            completed: vec![MaintenanceItem {
                id: 1_700_000_000_003,
                frota: "88".into(),
                manutencao: "Filtro de ar".into(),
                observacao: "<b>ok</b>".into(),
            }],
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let (_dir, storage) = test_storage();
        let state = sample_state();

        storage.save(&state).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[test]
    fn round_trip_empty_state_without_shift() {
        let (_dir, storage) = test_storage();

        storage.save(&AppState::default()).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, Some(AppState::default()));
    }

    #[test]
    fn load_missing_document_is_none() {
        let (_dir, storage) = test_storage();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn load_malformed_document_fails() {
        let (_dir, storage) = test_storage();
        fs::write(storage.state_path(), "{not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let (_dir, storage) = test_storage();

        storage.save(&sample_state()).unwrap();
        storage.save(&AppState::default()).unwrap();

        assert_eq!(storage.load().unwrap(), Some(AppState::default()));
        assert!(!storage.state_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn loads_document_written_by_the_browser_tool() {
        let (_dir, storage) = test_storage();
        fs::write(
            storage.state_path(),
            r#"{"selectedShift":"A","pendingMaintenance":[{"id":1718000000000,"frota":"12","manutencao":"Pneu","observacao":""}],"completedMaintenance":[]}"#,
        )
        .unwrap();

        let state = storage.load().unwrap().unwrap();
        assert_eq!(state.selected_shift.as_deref(), Some("A"));
        assert_eq!(state.pending[0].id, 1_718_000_000_000);
        assert_eq!(state.pending[0].manutencao, "Pneu");
    }
}
