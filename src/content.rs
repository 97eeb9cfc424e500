//! Content stream generation for laid out pages.

use crate::font::FontId;
use crate::page::TextRun;
use crate::units::Pt;
use std::io::Write;

const TABSIZE: usize = 4;

/// Renders text runs to a PDF content stream.
///
/// All runs share one text object. Each run is placed with an absolute text
/// matrix so its position does not depend on the run before it, and the font
/// is only re-selected when it or its size changes.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_runs(runs: &[TextRun]) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "BT\n")?;

    let mut current_font: Option<(FontId, Pt)> = None;
    for run in runs.iter() {
        if current_font != Some((run.font, run.size)) {
            current_font = Some((run.font, run.size));
            write!(&mut content, "/{} {} Tf\n", run.font.resource_name(), run.size)?;
        }

        write!(
            &mut content,
            "1 0 0 1 {:.2} {:.2} Tm\n",
            run.coords.0 .0, run.coords.1 .0
        )?;
        write!(&mut content, "({}) Tj\n", escape_text(&run.text))?;
    }

    write!(&mut content, "ET\n")?;
    Ok(content)
}

/// Escapes text for use inside a PDF literal string. Only printable ASCII
/// survives; tabs become spaces and line breaks become escape sequences.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str(&" ".repeat(TABSIZE)),
            ' '..='~' => escaped.push(ch),
            _ => {}
        }
    }
    escaped
}
