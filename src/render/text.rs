//! Terminal listing of both tables.

use std::fmt::Write;

use crate::model::AppState;

use super::{escape, tables};

/// Renders the shift and both tables for the terminal.
pub fn editor_text(state: &AppState) -> String {
    let mut out = String::new();
    let shift = state
        .selected_shift
        .as_deref()
        .map_or_else(|| "(nenhum)".into(), escape::terminal);
    let _ = writeln!(out, "Turno: {shift}");

    for table in tables(state) {
        let _ = writeln!(out, "\n{} ({})", table.title(), table.rows.len());
        if table.rows.is_empty() {
            out.push_str("  -\n");
            continue;
        }
        for item in table.rows {
            let _ = writeln!(
                out,
                "  {:<15}  {:<10}  {}  | {}",
                item.id,
                or_dash(&escape::terminal(&item.frota)),
                or_dash(&escape::terminal(&item.manutencao)),
                or_dash(&escape::terminal(&item.observacao)),
            );
        }
    }
    out
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::MaintenanceItem;

    #[test]
    fn empty_state_lists_no_shift_and_empty_tables() {
        let text = editor_text(&AppState::default());

        assert!(text.starts_with("Turno: (nenhum)\n"));
        assert!(text.contains("Manutenções pendentes (0)\n  -\n"));
        assert!(text.contains("Manutenções concluídas (0)\n  -\n"));
    }

    #[test]
    fn rows_show_id_and_fields_with_dashes_for_blanks() {
        let state = AppState {
            selected_shift: Some("B".into()),
            pending: vec![MaintenanceItem {
                id: 17,
                frota: "1234".into(),
                manutencao: "Troca de óleo\nurgente".into(),
                observacao: String::new(),
            }],
            completed: vec![],
        };
        let text = editor_text(&state);

        assert!(text.contains("Turno: B"));
        let row = text.lines().find(|l| l.contains("1234")).unwrap();
        assert!(row.trim_start().starts_with("17"));
        assert!(row.contains("Troca de óleo urgente"));
        assert!(row.ends_with("| -"));
    }
}
