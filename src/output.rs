use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{Color as TermColor, Stylize};
use serde::Serialize;

use crate::color::Pixel;
use crate::pipeline::extract::PaletteEntry;

/// JSON body for a palette; the field name matches what UI clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    pub colors: Vec<String>,
}

impl PaletteReport {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }
}

/// One color per line.
pub fn render_text(colors: &[String]) -> String {
    let mut out = String::new();
    for color in colors {
        out.push_str(color);
        out.push('\n');
    }
    out
}

pub fn render_json(report: &PaletteReport, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .context("failed to serialize palette")?;
    json.push('\n');
    Ok(json)
}

/// Ranked colors with their pixel counts and share of `total` sampled pixels.
pub fn render_counts(entries: &[PaletteEntry], total: usize) -> String {
    let mut out = String::new();
    for entry in entries {
        let share = if total == 0 {
            0.0
        } else {
            entry.count as f64 * 100.0 / total as f64
        };
        out.push_str(&format!(
            "{}  {:>6}  {:>5.1}%\n",
            entry.color, entry.count, share
        ));
    }
    out
}

fn to_term_color(c: Pixel) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white label text for readability on the given swatch.
fn contrast_fg(c: Pixel) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Write one truecolor swatch per palette entry, labelled with its hex code.
/// Entries that do not parse as colors are skipped.
pub fn write_preview<W: Write>(writer: &mut W, colors: &[String]) -> Result<()> {
    for hex in colors {
        let Ok(pixel) = Pixel::from_hex(hex) else {
            continue;
        };
        let label = format!("  {hex}  ");
        writeln!(
            writer,
            "{}",
            label.on(to_term_color(pixel)).with(contrast_fg(pixel))
        )
        .context("failed to write preview")?;
    }
    Ok(())
}
