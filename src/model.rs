//! Core data model for the shift handover log.
//!
//! A handover is one selected shift plus two ordered lists of maintenance
//! items: what the next shift still has to do, and what this shift finished.

mod item;
mod state;

pub use item::{ItemField, ItemId, ListKind, MaintenanceItem};
pub use state::AppState;
