//! The handover session: owns the state and keeps storage in step with it.
//!
//! State is loaded once when the session opens and saved after every
//! operation that changed it. Operations that change nothing skip the save.

use jiff::Timestamp;

use crate::editor::{self, IdGenerator};
use crate::model::{AppState, ItemField, ItemId, ListKind};
use crate::notify::Notice;
use crate::storage::{self, Storage};

pub struct Session {
    storage: Storage,
    state: AppState,
    ids: IdGenerator,
}

impl Session {
    /// Opens a session over `storage`, loading the saved state.
    ///
    /// Unreadable or malformed state is logged and replaced by the default
    /// state; the returned notice tells the operator it happened.
    pub fn open(storage: Storage) -> (Self, Option<Notice>) {
        let (state, notice) = match storage.load() {
            Ok(state) => (state.unwrap_or_default(), None),
            Err(e) => {
                tracing::error!(
                    path = %storage.state_path().display(),
                    error = %e,
                    "failed to load saved state, starting empty"
                );
                (
                    AppState::default(),
                    Some(Notice::error(format!("Erro ao carregar dados: {e}"))),
                )
            }
        };
        let ids = IdGenerator::after(&state);
        (
            Self {
                storage,
                state,
                ids,
            },
            notice,
        )
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn select_shift(&mut self, shift: &str) -> storage::Result<()> {
        editor::select_shift(&mut self.state, shift);
        self.save()
    }

    /// Adds an item to `kind`, pre-filled with `fields`. Saves once.
    pub fn add_row(
        &mut self,
        kind: ListKind,
        fields: &[(ItemField, String)],
    ) -> storage::Result<ItemId> {
        let id = self.ids.next(now_ms());
        editor::add(&mut self.state, kind, id);
        for (field, value) in fields {
            editor::update(&mut self.state, kind, id, *field, value);
        }
        self.save()?;
        Ok(id)
    }

    /// Removes an item. Returns whether it existed.
    pub fn remove_row(&mut self, kind: ListKind, id: ItemId) -> storage::Result<bool> {
        if !editor::remove(&mut self.state, kind, id) {
            tracing::debug!(%kind, id, "remove: no such item");
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Overwrites one field of an item. Returns whether it existed.
    pub fn update_item(
        &mut self,
        kind: ListKind,
        id: ItemId,
        field: ItemField,
        value: &str,
    ) -> storage::Result<bool> {
        if !editor::update(&mut self.state, kind, id, field, value) {
            tracing::debug!(%kind, id, field = field.as_str(), "update: no such item");
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> storage::Result<()> {
        editor::clear(&mut self.state);
        self.save()
    }

    fn save(&self) -> storage::Result<()> {
        self.storage.save(&self.state)
    }
}

fn now_ms() -> u64 {
    u64::try_from(Timestamp::now().as_millisecond()).unwrap_or(0)
}
