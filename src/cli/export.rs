//! Report commands: PNG export and print.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use jiff::Zoned;

use crate::config::Config;
use crate::model::AppState;
use crate::report::{Report, image, print};
use crate::session::Session;

use super::Notice;

pub(super) fn cmd_report(
    config: &Config,
    session: &Session,
    out_dir: Option<PathBuf>,
) -> Result<(), Notice> {
    let dir = output_dir(config, out_dir);
    let path = export_image(session.state(), &dir, config.render_scale, &Zoned::now())?;

    Notice::success("Relatório gerado com sucesso!").show();
    println!("{}", path.display());
    Ok(())
}

pub(super) fn cmd_print(
    config: &Config,
    session: &Session,
    out_dir: Option<PathBuf>,
    no_open: bool,
) -> Result<(), Notice> {
    let dir = output_dir(config, out_dir);
    let path = write_print_document(session.state(), &dir, &Zoned::now())?;

    if no_open {
        println!("{}", path.display());
        return Ok(());
    }

    Notice::info("Abrindo janela de impressão...").show();
    open_document(config.opener(), &path)
}

/// Builds the report and writes it as `<stem>.png` into `dir`.
fn export_image(
    state: &AppState,
    dir: &Path,
    scale: f32,
    now: &Zoned,
) -> Result<PathBuf, Notice> {
    let report = build(state, now)?;
    let bytes = image::png(&report, scale).map_err(|e| {
        tracing::error!(error = %e, "failed to render report image");
        Notice::error("Erro ao gerar relatório!")
    })?;

    let path = dir.join(format!("{}.png", report.file_stem()));
    write_output(&path, &bytes)?;
    Ok(path)
}

/// Builds the report and writes it as `<stem>.html` into `dir`.
fn write_print_document(state: &AppState, dir: &Path, now: &Zoned) -> Result<PathBuf, Notice> {
    let report = build(state, now)?;
    let path = dir.join(format!("{}.html", report.file_stem()));
    write_output(&path, print::document(&report).as_bytes())?;
    Ok(path)
}

fn build(state: &AppState, now: &Zoned) -> Result<Report, Notice> {
    Report::build(state, now).map_err(|e| Notice::warning(e.to_string()))
}

fn output_dir(config: &Config, out_dir: Option<PathBuf>) -> PathBuf {
    out_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), Notice> {
    let written = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::write(path, bytes));
    written.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to write report");
        Notice::error(format!("Falha ao gravar {}: {e}", path.display()))
    })?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}

/// Hands the document to the system opener and waits for it to exit; the
/// browser shows the print dialog once the page loads.
///
/// Openers such as `xdg-open` exit as soon as the browser has the file, so a
/// non-zero status means nothing will show the document.
fn open_document(opener: &str, path: &Path) -> Result<(), Notice> {
    let status = Command::new(opener).arg(path).status().map_err(|e| {
        tracing::error!(opener, error = %e, "failed to run opener");
        Notice::error(format!(
            "Falha ao abrir {} com {opener}: {e}",
            path.display()
        ))
    })?;

    if !status.success() {
        tracing::error!(opener, %status, "opener failed");
        return Err(Notice::error(format!(
            "Falha ao abrir {} com {opener} ({status})",
            path.display()
        )));
    }
    Ok(())
}
