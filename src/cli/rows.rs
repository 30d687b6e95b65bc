//! Row commands: add, remove, update, list.

use crate::model::{AppState, ItemField, ItemId, ListKind};
use crate::render;
use crate::session::Session;

use super::{Notice, save_failed};

pub(super) fn cmd_add(
    session: &mut Session,
    kind: ListKind,
    fields: &[(ItemField, String)],
) -> Result<(), Notice> {
    let id = session.add_row(kind, fields).map_err(save_failed)?;
    println!("{id}");
    Ok(())
}

pub(super) fn cmd_remove(session: &mut Session, kind: ListKind, id: ItemId) -> Result<(), Notice> {
    session.remove_row(kind, id).map_err(save_failed)?;
    Ok(())
}

pub(super) fn cmd_update(
    session: &mut Session,
    kind: ListKind,
    id: ItemId,
    field: ItemField,
    value: &str,
) -> Result<(), Notice> {
    session
        .update_item(kind, id, field, value)
        .map_err(save_failed)?;
    Ok(())
}

pub(super) fn cmd_list(session: &Session, html: bool) {
    print!("{}", list_output(session.state(), html));
}

fn list_output(state: &AppState, html: bool) -> String {
    if html {
        render::editor_html(state)
    } else {
        render::editor_text(state)
    }
}
