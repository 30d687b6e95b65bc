//! Standalone printable HTML document.
//!
//! The document inlines all of its styling and asks the browser for the print
//! dialog once it has loaded. It references no external resources.

use std::fmt::Write;

use crate::model::ListKind;
use crate::render::escape;

use super::{FOOTER, Report, Section};

const STYLE: &str = r"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Inter', Arial, sans-serif; background: #fff; color: #333; padding: 20px; }
.report-header { text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 3px solid #667eea; }
.report-logo { font-size: 48px; margin-bottom: 10px; }
h1 { color: #1a1a2e; font-size: 28px; margin-bottom: 15px; }
.report-info { display: flex; justify-content: center; gap: 40px; font-size: 16px; }
.info-item strong { color: #667eea; }
.report-section { margin-bottom: 30px; }
.report-section h2 { font-size: 18px; margin-bottom: 15px; padding: 10px 15px; border-radius: 8px; color: white; }
.report-section.pending h2 { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }
.report-section.completed h2 { background: linear-gradient(135deg, #11998e 0%, #38ef7d 100%); }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 12px 15px; text-align: left; border: 1px solid #ddd; }
th { background: #f5f5f5; font-weight: 600; color: #333; }
tr:nth-child(even) { background: #fafafa; }
td.empty { text-align: center; opacity: 0.5; }
.report-footer { margin-top: 30px; text-align: center; font-size: 12px; color: #888; padding-top: 20px; border-top: 1px solid #ddd; }
@media print {
  body { padding: 0; -webkit-print-color-adjust: exact; print-color-adjust: exact; }
}
";

/// Renders the report as a complete HTML document.
pub fn document(report: &Report) -> String {
    let shift = escape::markup(&report.shift);
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="UTF-8">
<title>Troca de Turno - Turno {shift}</title>
<style>{STYLE}</style>
</head>
<body onload="window.print()">
<div class="report-header">
  <div class="report-logo">🔧</div>
  <h1>TROCA DE TURNO</h1>
  <div class="report-info">
    <div class="info-item"><strong>Turno:</strong> {shift}</div>
    <div class="info-item"><strong>Data:</strong> {date}</div>
  </div>
</div>
"#,
        date = escape::markup(&report.generated_at),
    );

    for section in report.sections() {
        push_section(&mut out, section);
    }

    let _ = write!(
        out,
        r#"<div class="report-footer"><p>{FOOTER}</p></div>
</body>
</html>
"#
    );
    out
}

fn push_section(out: &mut String, section: &Section) {
    let icon = match section.kind {
        ListKind::Pending => "📋",
        ListKind::Completed => "✅",
    };
    let [frota, manutencao, observacao] = section.headers;
    let _ = write!(
        out,
        r#"<div class="report-section {kind}">
  <h2>{icon} {title}</h2>
  <table>
    <thead><tr><th>{frota}</th><th>{manutencao}</th><th>{observacao}</th></tr></thead>
    <tbody>
"#,
        kind = section.kind,
        title = section.title,
    );

    if section.rows.is_empty() {
        let _ = writeln!(
            out,
            r#"      <tr><td colspan="3" class="empty">{}</td></tr>"#,
            section.empty_message
        );
    }
    for [frota, manutencao, observacao] in &section.rows {
        let _ = writeln!(
            out,
            "      <tr><td><strong>{}</strong></td><td>{}</td><td>{}</td></tr>",
            escape::markup(frota),
            escape::markup(manutencao),
            escape::markup(observacao),
        );
    }

    out.push_str("    </tbody>\n  </table>\n</div>\n");
}
