//! Row editing over the two maintenance lists.
//!
//! Every operation is keyed by item id. A missing id is never an error: the
//! operation does nothing and reports `false` so callers can skip the save.

use crate::model::{AppState, ItemField, ItemId, ListKind, MaintenanceItem};

/// Produces strictly increasing, timestamp-like item ids.
///
/// Each id is the current time in milliseconds, bumped past the previous id
/// when the clock has not advanced (or went backwards).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: ItemId,
}

impl IdGenerator {
    /// Seeds the generator past every id already present in `state`.
    pub fn after(state: &AppState) -> Self {
        Self {
            last: state.max_id().unwrap_or(0),
        }
    }

    pub fn next(&mut self, now_ms: u64) -> ItemId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

/// Appends an empty item to the chosen list.
pub fn add(state: &mut AppState, kind: ListKind, id: ItemId) -> &MaintenanceItem {
    let list = state.list_mut(kind);
    list.push(MaintenanceItem::empty(id));
    &list[list.len() - 1]
}

/// Removes the item with `id` from the chosen list.
pub fn remove(state: &mut AppState, kind: ListKind, id: ItemId) -> bool {
    let list = state.list_mut(kind);
    let before = list.len();
    list.retain(|item| item.id != id);
    list.len() != before
}

/// Overwrites one field of the item with `id`.
pub fn update(
    state: &mut AppState,
    kind: ListKind,
    id: ItemId,
    field: ItemField,
    value: &str,
) -> bool {
    let Some(item) = state.list_mut(kind).iter_mut().find(|item| item.id == id) else {
        return false;
    };
    *item.field_mut(field) = value.to_string();
    true
}

pub fn select_shift(state: &mut AppState, shift: &str) {
    state.selected_shift = Some(shift.to_string());
}

/// Drops the shift and both lists.
pub fn clear(state: &mut AppState) {
    *state = AppState::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item_state() -> AppState {
        let mut state = AppState::default();
        add(&mut state, ListKind::Pending, 10);
        add(&mut state, ListKind::Completed, 20);
        state
    }

    #[test]
    fn add_grows_only_the_chosen_list() {
        let mut state = two_item_state();

        add(&mut state, ListKind::Pending, 11);
        assert_eq!(state.pending.len(), 2);
        assert_eq!(state.completed.len(), 1);

        add(&mut state, ListKind::Completed, 21);
        assert_eq!(state.pending.len(), 2);
        assert_eq!(state.completed.len(), 2);
    }

    #[test]
    fn add_appends_an_empty_item() {
        let mut state = two_item_state();
        let item = add(&mut state, ListKind::Pending, 11).clone();

        assert_eq!(item, MaintenanceItem::empty(11));
        assert_eq!(state.pending.last(), Some(&item));
    }

    #[test]
    fn remove_filters_the_id_out() {
        let mut state = two_item_state();

        assert!(remove(&mut state, ListKind::Pending, 10));
        assert!(state.pending.is_empty());
        assert_eq!(state.completed.len(), 1);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut state = two_item_state();
        let before = state.clone();

        assert!(!remove(&mut state, ListKind::Pending, 99));
        // The id exists, but in the other list.
        assert!(!remove(&mut state, ListKind::Pending, 20));
        assert_eq!(state, before);
    }

    #[test]
    fn update_changes_only_the_targeted_field() {
        let mut state = two_item_state();
        update(&mut state, ListKind::Pending, 10, ItemField::Observacao, "urgente");

        assert!(update(&mut state, ListKind::Pending, 10, ItemField::Frota, "1234"));

        let item = &state.pending[0];
        assert_eq!(item.frota, "1234");
        assert_eq!(item.manutencao, "");
        assert_eq!(item.observacao, "urgente");
        assert_eq!(state.completed[0], MaintenanceItem::empty(20));
    }

    #[test]
    fn update_missing_id_is_a_no_op() {
        let mut state = two_item_state();
        let before = state.clone();

        assert!(!update(&mut state, ListKind::Completed, 10, ItemField::Frota, "x"));
        assert_eq!(state, before);
    }

    #[test]
    fn clear_resets_to_defaults() {
        let mut state = two_item_state();
        select_shift(&mut state, "A");

        clear(&mut state);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn ids_increase_when_the_clock_stalls() {
        let mut ids = IdGenerator::default();

        let a = ids.next(1_000);
        let b = ids.next(1_000);
        let c = ids.next(999);
        assert!(a < b && b < c);
        assert_eq!(ids.next(5_000), 5_000);
    }

    #[test]
    fn ids_start_past_loaded_items() {
        let state = two_item_state();
        let mut ids = IdGenerator::after(&state);

        assert_eq!(ids.next(0), 21);
    }
}
