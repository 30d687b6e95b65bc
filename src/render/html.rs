//! Editable table rows as HTML.

use std::fmt::Write;

use crate::model::{AppState, ItemField, MaintenanceItem};

use super::{TableView, escape, tables};

/// Renders both tables as `<tbody>` elements of editable rows.
///
/// Every input carries `data-list`, `data-id` and `data-field` so a page can
/// route edits back to the matching update operation.
pub fn editor_html(state: &AppState) -> String {
    let mut out = String::new();
    for table in tables(state) {
        let _ = writeln!(out, r#"<tbody id="{}Body">"#, table.kind);
        for item in table.rows {
            push_row(&mut out, &table, item);
        }
        out.push_str("</tbody>\n");
    }
    out
}

fn push_row(out: &mut String, table: &TableView<'_>, item: &MaintenanceItem) {
    let kind = table.kind;
    let id = item.id;
    let attrs = |field: ItemField| {
        format!(
            r#"data-list="{kind}" data-id="{id}" data-field="{}""#,
            field.as_str()
        )
    };

    let _ = write!(
        out,
        r#"<tr data-id="{id}">
  <td><input type="text" value="{frota}" placeholder="Ex: 1234" {frota_attrs}></td>
  <td><textarea rows="2" placeholder="{description}" {manutencao_attrs}>{manutencao}</textarea></td>
  <td><textarea rows="2" placeholder="Observações adicionais..." {observacao_attrs}>{observacao}</textarea></td>
  <td class="action-col"><button class="delete-btn" data-list="{kind}" data-id="{id}">🗑️</button></td>
</tr>
"#,
        frota = escape::markup(&item.frota),
        frota_attrs = attrs(ItemField::Frota),
        description = table.description_placeholder(),
        manutencao_attrs = attrs(ItemField::Manutencao),
        manutencao = escape::markup(&item.manutencao),
        observacao_attrs = attrs(ItemField::Observacao),
        observacao = escape::markup(&item.observacao),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::ListKind;

    fn state_with(item: MaintenanceItem, kind: ListKind) -> AppState {
        let mut state = AppState::default();
        state.list_mut(kind).push(item);
        state
    }

    #[test]
    fn renders_one_row_per_item_in_the_right_table() {
        let state = state_with(
            MaintenanceItem {
                id: 42,
                frota: "1234".into(),
                manutencao: "Troca de óleo".into(),
                observacao: String::new(),
            },
            ListKind::Completed,
        );
        let html = editor_html(&state);

        let (pending, completed) = html.split_once(r#"<tbody id="completedBody">"#).unwrap();
        assert!(!pending.contains("<tr"));
        assert_eq!(completed.matches("<tr").count(), 1);
        assert!(completed.contains(r#"value="1234""#));
        assert!(completed.contains(">Troca de óleo</textarea>"));
        assert!(completed.contains(r#"data-list="completed" data-id="42" data-field="frota""#));
        assert!(completed.contains("Descreva a manutenção realizada..."));
    }

    #[test]
    fn user_text_cannot_break_out_of_attributes() {
        let state = state_with(
            MaintenanceItem {
                id: 1,
                frota: r#""><script>alert(1)</script>"#.into(),
                manutencao: "</textarea><b>x</b>".into(),
                observacao: String::new(),
            },
            ListKind::Pending,
        );
        let html = editor_html(&state);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
