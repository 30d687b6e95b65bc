//! Shift handover report: one view model, two outputs.
//!
//! [`Report::build`] validates the state and fills the view model. The
//! [`print`] module turns it into a standalone printable HTML document and
//! [`image`] rasterizes it to PNG.

pub mod image;
pub mod print;

use jiff::Zoned;

use crate::model::{AppState, ItemField, ListKind, MaintenanceItem};

/// Why a report could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Por favor, selecione um turno primeiro!")]
    NoShift,

    #[error("Adicione pelo menos uma manutenção!")]
    NoItems,
}

/// Shown in report cells whose field is empty.
pub const EMPTY_CELL: &str = "-";

pub const FOOTER: &str = "Relatório gerado automaticamente pelo Sistema de Troca de Turno";

/// Everything a rendered report shows, already flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub shift: String,

    /// Generation time as shown to the reader, e.g. `14/10/2026, 07:30`.
    pub generated_at: String,

    /// Generation date as `yyyy-mm-dd`, used in file names.
    pub iso_date: String,

    pub pending: Section,
    pub completed: Section,
}

/// One report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: ListKind,
    pub title: &'static str,
    pub headers: [&'static str; 3],

    /// Cell text per row, with [`EMPTY_CELL`] standing in for blanks.
    pub rows: Vec<[String; 3]>,

    /// Text of the single placeholder row shown when `rows` is empty.
    pub empty_message: &'static str,
}

impl Report {
    /// Builds the report for `state` as of `now`.
    ///
    /// Fails when no shift is selected (a blank shift counts as none) or both
    /// lists are empty.
    pub fn build(state: &AppState, now: &Zoned) -> Result<Self, ReportError> {
        let shift = state
            .selected_shift
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ReportError::NoShift)?;
        if state.is_empty() {
            return Err(ReportError::NoItems);
        }

        Ok(Self {
            shift: shift.to_string(),
            generated_at: now.strftime("%d/%m/%Y, %H:%M").to_string(),
            iso_date: now.date().to_string(),
            pending: Section::new(ListKind::Pending, &state.pending),
            completed: Section::new(ListKind::Completed, &state.completed),
        })
    }

    pub fn sections(&self) -> [&Section; 2] {
        [&self.pending, &self.completed]
    }

    /// Base file name shared by every output, without extension.
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the shift become `-` so a
    /// stored shift name can never point outside the output directory.
    pub fn file_stem(&self) -> String {
        let shift: String = self
            .shift
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        format!("troca-turno-{shift}-{}", self.iso_date)
    }
}

impl Section {
    fn new(kind: ListKind, items: &[MaintenanceItem]) -> Self {
        let (title, headers, empty_message) = match kind {
            ListKind::Pending => (
                "MANUTENÇÕES A SEREM REALIZADAS",
                ["FROTA", "MANUTENÇÃO A SER REALIZADA", "OBSERVAÇÃO"],
                "Nenhuma manutenção pendente",
            ),
            ListKind::Completed => (
                "MANUTENÇÕES REALIZADAS NO TURNO",
                ["FROTA", "MANUTENÇÕES REALIZADAS", "OBSERVAÇÃO"],
                "Nenhuma manutenção realizada",
            ),
        };
        let rows = items
            .iter()
            .map(|item| ItemField::ALL.map(|field| cell(item.field(field))))
            .collect();
        Self {
            kind,
            title,
            headers,
            rows,
            empty_message,
        }
    }
}

fn cell(text: &str) -> String {
    if text.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        text.to_string()
    }
}
