//! Maintenance items and the names used to address them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier. Timestamp-like, unique across both lists.
pub type ItemId = u64;

/// One row of the handover: a machine and what was (or must be) done to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub id: ItemId,

    /// Equipment or fleet tag identifying the machine.
    #[serde(default)]
    pub frota: String,

    /// Description of the maintenance.
    #[serde(default)]
    pub manutencao: String,

    /// Free-form notes.
    #[serde(default)]
    pub observacao: String,
}

impl MaintenanceItem {
    /// A new item with every text field empty.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            frota: String::new(),
            manutencao: String::new(),
            observacao: String::new(),
        }
    }

    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Frota => &self.frota,
            ItemField::Manutencao => &self.manutencao,
            ItemField::Observacao => &self.observacao,
        }
    }

    pub fn field_mut(&mut self, field: ItemField) -> &mut String {
        match field {
            ItemField::Frota => &mut self.frota,
            ItemField::Manutencao => &mut self.manutencao,
            ItemField::Observacao => &mut self.observacao,
        }
    }
}

/// Which of the two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Maintenance awaiting action by the next shift.
    Pending,

    /// Maintenance completed during this shift.
    Completed,
}

impl ListKind {
    /// The name used in markup attributes and command output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An editable text field of a [`MaintenanceItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Frota,
    Manutencao,
    Observacao,
}

impl ItemField {
    /// All fields, in column order.
    pub const ALL: [Self; 3] = [Self::Frota, Self::Manutencao, Self::Observacao];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frota => "frota",
            Self::Manutencao => "manutencao",
            Self::Observacao => "observacao",
        }
    }
}
