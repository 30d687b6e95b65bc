//! The whole handover snapshot, as persisted.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ItemId, ListKind, MaintenanceItem};

/// Selected shift plus both maintenance lists.
///
/// Serialized field names match the document the browser version of the tool
/// kept in local storage, so existing exports load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub selected_shift: Option<String>,

    #[serde(
        rename = "pendingMaintenance",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub pending: Vec<MaintenanceItem>,

    #[serde(
        rename = "completedMaintenance",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub completed: Vec<MaintenanceItem>,
}

impl AppState {
    pub fn list(&self, kind: ListKind) -> &[MaintenanceItem] {
        match kind {
            ListKind::Pending => &self.pending,
            ListKind::Completed => &self.completed,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<MaintenanceItem> {
        match kind {
            ListKind::Pending => &mut self.pending,
            ListKind::Completed => &mut self.completed,
        }
    }

    /// True when neither list holds an item.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    /// The largest id in either list, if any.
    pub fn max_id(&self) -> Option<ItemId> {
        self.pending
            .iter()
            .chain(&self.completed)
            .map(|item| item.id)
            .max()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MaintenanceItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MaintenanceItem>>::deserialize(deserializer)?.unwrap_or_default())
}
