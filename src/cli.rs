//! Command-line interface for the shift handover log.
//!
//! Each subcommand is one operator action: arguments in, a notice out.
//! State is saved after every command that changes it.

mod export;
mod rows;

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::model::{AppState, ItemField, ItemId, ListKind};
use crate::notify::Notice;
use crate::render::escape;
use crate::session::Session;
use crate::storage::StorageError;

/// Troca de turno: shift handover log for maintenance crews.
#[derive(Debug, Parser)]
#[command(name = "troca-turno", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Data directory (overrides `TROCA_TURNO_HOME` and `~/.troca-turno`).
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// More log output on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: handing over a shift
  1. troca-turno shift B
  2. troca-turno add pending --frota 1234 --manutencao "Troca de óleo"
     → prints the item id
  3. troca-turno add completed --frota 88 --manutencao "Filtro de ar"
  4. troca-turno update pending <id> observacao "Aguardando peça"
  5. troca-turno report          # troca-turno-B-<date>.png
     troca-turno print           # opens the print dialog
  6. troca-turno clear"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select the work shift. Without a name, print the selected one.
    Shift {
        /// Shift name, one of the configured `shifts`.
        name: Option<String>,
    },

    /// Add a row to a list. Prints the new item id.
    Add {
        #[arg(value_enum)]
        list: ListArg,

        /// Equipment or fleet tag.
        #[arg(long)]
        frota: Option<String>,

        /// Maintenance description.
        #[arg(long)]
        manutencao: Option<String>,

        /// Notes.
        #[arg(long)]
        observacao: Option<String>,
    },

    /// Remove a row. Unknown ids are ignored.
    Remove {
        #[arg(value_enum)]
        list: ListArg,

        id: ItemId,
    },

    /// Overwrite one field of a row. Unknown ids are ignored.
    Update {
        #[arg(value_enum)]
        list: ListArg,

        id: ItemId,

        #[arg(value_enum)]
        field: FieldArg,

        value: String,
    },

    /// Show both tables.
    List {
        /// Print editable HTML rows instead of the terminal listing.
        #[arg(long)]
        html: bool,
    },

    /// Export the report as a PNG image.
    Report {
        /// Directory to write into (overrides `output-dir`).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Write the printable report and open it in the browser's print dialog.
    Print {
        /// Directory to write into (overrides `output-dir`).
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Only write the document; print its path.
        #[arg(long)]
        no_open: bool,
    },

    /// Clear the shift and both lists.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// CLI-facing list name, mapped to the domain `ListKind`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListArg {
    /// Manutenções pendentes: work for the next shift.
    Pending,
    /// Manutenções concluídas: work done this shift.
    Completed,
}

impl ListArg {
    fn to_domain(self) -> ListKind {
        match self {
            Self::Pending => ListKind::Pending,
            Self::Completed => ListKind::Completed,
        }
    }
}

/// CLI-facing field name, mapped to the domain `ItemField`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    /// Equipment or fleet tag.
    Frota,
    /// Maintenance description.
    Manutencao,
    /// Notes.
    Observacao,
}

impl FieldArg {
    fn to_domain(self) -> ItemField {
        match self {
            Self::Frota => ItemField::Frota,
            Self::Manutencao => ItemField::Manutencao,
            Self::Observacao => ItemField::Observacao,
        }
    }
}

/// Run one command against the session.
///
/// Warnings and errors come back as the notice to show.
pub fn run(command: Command, config: &Config, session: &mut Session) -> Result<(), Notice> {
    match command {
        Command::Shift { name } => cmd_shift(config, session, name.as_deref()),
        Command::Add {
            list,
            frota,
            manutencao,
            observacao,
        } => {
            let fields: Vec<(ItemField, String)> = [
                (ItemField::Frota, frota),
                (ItemField::Manutencao, manutencao),
                (ItemField::Observacao, observacao),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
            rows::cmd_add(session, list.to_domain(), &fields)
        }
        Command::Remove { list, id } => rows::cmd_remove(session, list.to_domain(), id),
        Command::Update {
            list,
            id,
            field,
            value,
        } => rows::cmd_update(session, list.to_domain(), id, field.to_domain(), &value),
        Command::List { html } => {
            rows::cmd_list(session, html);
            Ok(())
        }
        Command::Report { out_dir } => export::cmd_report(config, session, out_dir),
        Command::Print { out_dir, no_open } => {
            export::cmd_print(config, session, out_dir, no_open)
        }
        Command::Clear { yes } => cmd_clear(session, yes),
    }
}

fn cmd_shift(config: &Config, session: &mut Session, name: Option<&str>) -> Result<(), Notice> {
    let Some(name) = name else {
        println!("{}", current_shift(session.state()));
        return Ok(());
    };

    if !config.accepts_shift(name) {
        return Err(Notice::warning(format!(
            "Turno desconhecido: {name} (turnos: {})",
            config.shifts.join(", ")
        )));
    }

    session.select_shift(name).map_err(save_failed)?;
    Notice::success(format!("Turno {name} selecionado")).show();
    Ok(())
}

/// The selected shift as printed by `shift` with no name.
fn current_shift(state: &AppState) -> Cow<'_, str> {
    match &state.selected_shift {
        Some(shift) => escape::terminal(shift),
        None => Cow::Borrowed("(nenhum)"),
    }
}

fn cmd_clear(session: &mut Session, yes: bool) -> Result<(), Notice> {
    if !yes {
        eprint!("Tem certeza que deseja limpar todos os dados? [s/N] ");
        // A failed flush only loses the prompt text.
        let _ = io::stderr().flush();
        let confirmed = confirm(io::stdin().lock())
            .map_err(|e| Notice::error(format!("Falha ao ler confirmação: {e}")))?;
        if !confirmed {
            Notice::info("Nada foi alterado").show();
            return Ok(());
        }
    }

    session.clear_all().map_err(save_failed)?;
    Notice::info("Dados limpos com sucesso!").show();
    Ok(())
}

/// Reads one answer line; only an explicit yes confirms.
fn confirm(mut input: impl BufRead) -> io::Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    ))
}

fn save_failed(e: StorageError) -> Notice {
    tracing::error!(error = %e, "failed to save state");
    Notice::error(format!("Erro ao salvar dados: {e}"))
}
