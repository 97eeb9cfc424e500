use serde::{Deserialize, Serialize};

use crate::font::FontId;
use crate::layout::Margins;
use crate::pagesize::{PageSizeMm, A4_MM};
use crate::units::{Mm, Pt};

/// How one kind of block is drawn
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontId,
    pub size: Pt,
    /// Distance from the left margin to the start of each line
    pub indent: Mm,
    /// Vertical gap placed above the block
    pub spacing_before: Mm,
}

impl TextStyle {
    pub const fn new(font: FontId, size: f32, indent: f32, spacing_before: f32) -> TextStyle {
        TextStyle {
            font,
            size: Pt(size),
            indent: Mm(indent),
            spacing_before: Mm(spacing_before),
        }
    }
}

/// The fixed set of named styles the classifier assigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub title: TextStyle,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub body: TextStyle,
    pub bullet: TextStyle,
    pub sub_bullet: TextStyle,
    pub numbered: TextStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            title: TextStyle::new(FontId::Bold, 20.0, 0.0, 0.0),
            h1: TextStyle::new(FontId::Bold, 16.0, 0.0, 6.0),
            h2: TextStyle::new(FontId::Bold, 14.0, 0.0, 5.0),
            h3: TextStyle::new(FontId::Bold, 12.0, 0.0, 4.0),
            body: TextStyle::new(FontId::Regular, 11.0, 0.0, 1.0),
            bullet: TextStyle::new(FontId::Regular, 11.0, 8.0, 1.0),
            sub_bullet: TextStyle::new(FontId::Regular, 11.0, 14.0, 1.0),
            numbered: TextStyle::new(FontId::Regular, 11.0, 8.0, 1.0),
        }
    }
}

/// Every constant the layout stage depends on. The page itself is always A4;
/// everything else can be tuned, e.g. from an application settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margins: Margins,
    /// Line height in millimetres per point of font size
    pub line_height_factor: f32,
    /// Average Helvetica glyph width in millimetres per point of font size
    pub char_width_factor: f32,
    /// Lower bound on the characters a wrapped line may hold
    pub min_chars_per_line: usize,
    /// The first line becomes a title only when it is shorter than this
    pub title_max_chars: usize,
    /// Extra gap added above a block that follows one or more blank lines
    pub paragraph_spacing: Mm,
    /// Leading whitespace (in columns, tab = 4) that turns an item into a sub item
    pub sub_indent_columns: usize,
    pub styles: StyleSheet,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            margins: Margins::default(),
            line_height_factor: 0.45,
            char_width_factor: 0.18,
            min_chars_per_line: 20,
            title_max_chars: 60,
            paragraph_spacing: Mm(3.0),
            sub_indent_columns: 2,
            styles: StyleSheet::default(),
        }
    }
}

impl LayoutConfig {
    pub fn page_size(&self) -> PageSizeMm {
        A4_MM
    }

    /// Height of one line of text set at `size`
    pub fn line_height(&self, size: Pt) -> Mm {
        Mm(self.line_height_factor * size.0)
    }

    /// Estimated rendered width of one character set at `size`
    pub fn char_width(&self, size: Pt) -> Mm {
        Mm(self.char_width_factor * size.0)
    }

    /// Width available to a block with the given indent
    pub fn available_width(&self, indent: Mm) -> Mm {
        self.margins.content_width(self.page_size().0) - indent
    }

    /// The y coordinate (from the top) that no line may extend past
    pub fn bottom_limit(&self) -> Mm {
        self.page_size().1 - self.margins.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sub_bullet_is_indented_further_than_bullet() {
        let styles = StyleSheet::default();
        assert_eq!(styles.bullet.indent, Mm(8.0));
        assert_eq!(styles.sub_bullet.indent, Mm(14.0));
        assert!(styles.h1.spacing_before > styles.h2.spacing_before);
        assert!(styles.h2.spacing_before > styles.h3.spacing_before);
        assert!(styles.h3.spacing_before > styles.body.spacing_before);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "title_max_chars": 40, "margins": { "top": 15.0 } }"#)
                .expect("config parses");
        assert_eq!(config.title_max_chars, 40);
        assert_eq!(config.margins.top, Mm(15.0));
        assert_eq!(config.margins.bottom, Mm(20.0));
        assert_eq!(config.styles, StyleSheet::default());
    }

    #[test]
    fn config_survives_json() {
        let config = LayoutConfig::default();
        let json = serde_json::to_string(&config).expect("config serializes");
        let back: LayoutConfig = serde_json::from_str(&json).expect("config parses");
        assert_eq!(back, config);
    }

    #[test]
    fn bottom_limit_uses_a4_height() {
        let config = LayoutConfig::default();
        assert_eq!(config.bottom_limit(), Mm(277.0));
        assert_eq!(config.available_width(Mm(8.0)), Mm(162.0));
    }
}
