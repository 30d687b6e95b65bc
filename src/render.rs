//! Presentation of the editable tables.
//!
//! Both tables are regenerated in full from the state on every call. User
//! text only reaches markup through [`escape`].

pub mod escape;
mod html;
mod text;

pub use html::editor_html;
pub use text::editor_text;

use crate::model::{AppState, ListKind, MaintenanceItem};

/// One editable table: the list it shows and its rows, in order.
pub struct TableView<'a> {
    pub kind: ListKind,
    pub rows: &'a [MaintenanceItem],
}

impl TableView<'_> {
    /// Placeholder shown in the description field of a new row.
    pub fn description_placeholder(&self) -> &'static str {
        match self.kind {
            ListKind::Pending => "Descreva a manutenção a ser realizada...",
            ListKind::Completed => "Descreva a manutenção realizada...",
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            ListKind::Pending => "Manutenções pendentes",
            ListKind::Completed => "Manutenções concluídas",
        }
    }
}

/// Both tables, pending first.
pub fn tables(state: &AppState) -> [TableView<'_>; 2] {
    [ListKind::Pending, ListKind::Completed].map(|kind| TableView {
        kind,
        rows: state.list(kind),
    })
}
