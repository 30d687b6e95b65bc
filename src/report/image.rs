//! PNG export: the report laid out as SVG, then rasterized.

use std::fmt::Write;

use resvg::{tiny_skia, usvg};

use crate::model::ListKind;
use crate::render::escape;

use super::{FOOTER, Report, Section};

/// Errors from turning a laid-out report into PNG bytes.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("invalid render scale: {0}")]
    InvalidScale(f32),

    #[error("SVG error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

const WIDTH: usize = 800;
const MARGIN: usize = 30;
const LINE_HEIGHT: usize = 20;
const CELL_PADDING: usize = 12;

/// Column widths in pixels; they add up to `WIDTH - 2 * MARGIN`.
const COLUMNS: [usize; 3] = [140, 360, 240];

/// Rough width of one character at the body font size.
const CHAR_WIDTH: usize = 8;

const BACKGROUND: &str = "#1a1a2e";

/// Lays the report out as a standalone SVG document.
pub fn svg(report: &Report) -> String {
    let mut body = String::new();
    let center = WIDTH / 2;

    let _ = write!(
        body,
        r##"<text x="{center}" y="60" font-size="28" font-weight="bold" text-anchor="middle" fill="#ffffff">TROCA DE TURNO</text>
<text x="{center}" y="95" font-size="16" text-anchor="middle" fill="#eaeaea"><tspan fill="#8c9eff" font-weight="bold">Turno:</tspan> {shift}    <tspan fill="#8c9eff" font-weight="bold">Data:</tspan> {date}</text>
<line x1="{MARGIN}" y1="115" x2="{right}" y2="115" stroke="#667eea" stroke-width="3"/>
"##,
        shift = escape::xml_text(&report.shift),
        date = escape::xml_text(&report.generated_at),
        right = WIDTH - MARGIN,
    );

    let mut y = 140;
    for section in report.sections() {
        y = push_section(&mut body, section, y);
        y += 25;
    }

    let _ = write!(
        body,
        r##"<line x1="{MARGIN}" y1="{y}" x2="{right}" y2="{y}" stroke="#333355"/>
<text x="{center}" y="{text_y}" font-size="12" text-anchor="middle" fill="#888888">{FOOTER}</text>
"##,
        right = WIDTH - MARGIN,
        text_y = y + 25,
    );
    let height = y + 25 + MARGIN;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}" font-family="Inter, Arial, sans-serif">
<defs>
<linearGradient id="pending" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#667eea"/><stop offset="1" stop-color="#764ba2"/></linearGradient>
<linearGradient id="completed" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#11998e"/><stop offset="1" stop-color="#38ef7d"/></linearGradient>
</defs>
<rect width="{WIDTH}" height="{height}" fill="{BACKGROUND}"/>
{body}</svg>
"##
    )
}

/// Writes one section starting at `y`; returns the y just below it.
fn push_section(out: &mut String, section: &Section, mut y: usize) -> usize {
    let gradient = match section.kind {
        ListKind::Pending => "pending",
        ListKind::Completed => "completed",
    };
    let inner = WIDTH - 2 * MARGIN;

    let _ = write!(
        out,
        r##"<rect x="{MARGIN}" y="{y}" width="{inner}" height="40" rx="8" fill="url(#{gradient})"/>
<text x="{x}" y="{text_y}" font-size="18" font-weight="bold" fill="#ffffff">{title}</text>
"##,
        x = MARGIN + 15,
        text_y = y + 26,
        title = section.title,
    );
    y += 55;

    let _ = writeln!(
        out,
        r##"<rect x="{MARGIN}" y="{y}" width="{inner}" height="36" fill="#2a2a40"/>"##
    );
    let mut x = MARGIN;
    for (header, width) in section.headers.iter().zip(COLUMNS) {
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="13" font-weight="bold" fill="#c9c9e0">{header}</text>"##,
            x + CELL_PADDING,
            y + 23,
        );
        x += width;
    }
    y += 36;

    if section.rows.is_empty() {
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill="#eaeaea" opacity="0.5">{}</text>"##,
            WIDTH / 2,
            y + 24,
            section.empty_message,
        );
        y += 36;
        push_rule(out, y);
        return y;
    }

    for row in &section.rows {
        let cells: Vec<Vec<String>> = row
            .iter()
            .zip(COLUMNS)
            .map(|(text, width)| wrap(text, width))
            .collect();
        let row_lines = cells.iter().map(Vec::len).max().unwrap_or(1);

        let mut x = MARGIN;
        for (column, (lines, width)) in cells.iter().zip(COLUMNS).enumerate() {
            let weight = if column == 0 { "bold" } else { "normal" };
            for (i, line) in lines.iter().enumerate() {
                let _ = writeln!(
                    out,
                    r##"<text x="{}" y="{}" font-size="14" font-weight="{weight}" fill="#eaeaea">{}</text>"##,
                    x + CELL_PADDING,
                    y + 8 + 15 + i * LINE_HEIGHT,
                    escape::xml_text(line),
                );
            }
            x += width;
        }
        y += row_lines * LINE_HEIGHT + 16;
        push_rule(out, y);
    }
    y
}

fn push_rule(out: &mut String, y: usize) {
    let _ = writeln!(
        out,
        r##"<line x1="{MARGIN}" y1="{y}" x2="{}" y2="{y}" stroke="#333355"/>"##,
        WIDTH - MARGIN
    );
}

/// Wraps cell text to the column width. Always yields at least one line.
fn wrap(text: &str, column_width: usize) -> Vec<String> {
    let chars = (column_width - 2 * CELL_PADDING) / CHAR_WIDTH;
    let lines: Vec<String> = text
        .lines()
        .flat_map(|paragraph| textwrap::wrap(paragraph, chars))
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Rasterizes an SVG document to PNG bytes at `scale`.
///
/// Text is drawn with the system fonts.
pub fn rasterize(svg: &str, scale: f32) -> Result<Vec<u8>, ImageError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ImageError::InvalidScale(scale));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or(ImageError::InvalidScale(scale))?;
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(ImageError::Canvas {
            width: size.width(),
            height: size.height(),
        })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap
        .encode_png()
        .map_err(|e| ImageError::Encode(e.to_string()))
}

/// Lays out and rasterizes the report.
pub fn png(report: &Report, scale: f32) -> Result<Vec<u8>, ImageError> {
    rasterize(&svg(report), scale)
}
