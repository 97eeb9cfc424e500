use std::sync::LazyLock;

use regex::Regex;

use crate::layout::{LayoutConfig, TextStyle};
use crate::units::Mm;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").expect("numbered item pattern is valid"));

const TAB_COLUMNS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// What a line of source text was recognised as
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    Heading(HeadingLevel),
    Bullet,
    SubBullet,
    Numbered,
    SubNumbered,
    Body,
}

/// One classified line of input, ready to be wrapped and placed
#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub kind: BlockKind,
    /// The text to draw, with heading markers removed
    pub text: String,
    pub style: TextStyle,
    pub spacing_before: Mm,
}

impl BlockKind {
    pub fn style(self, config: &LayoutConfig) -> TextStyle {
        let styles = &config.styles;
        match self {
            BlockKind::Title => styles.title,
            BlockKind::Heading(HeadingLevel::H1) => styles.h1,
            BlockKind::Heading(HeadingLevel::H2) => styles.h2,
            BlockKind::Heading(HeadingLevel::H3) => styles.h3,
            BlockKind::Bullet => styles.bullet,
            BlockKind::SubBullet | BlockKind::SubNumbered => styles.sub_bullet,
            BlockKind::Numbered => styles.numbered,
            BlockKind::Body => styles.body,
        }
    }
}

/// Splits `content` into lines and classifies each non-blank one. Runs of
/// blank lines never become blocks; they widen the gap above the next block.
pub fn classify(content: &str, config: &LayoutConfig) -> Vec<StyledBlock> {
    let lines: Vec<&str> = split_lines(content);
    let mut blocks = Vec::with_capacity(lines.len());
    let mut after_blank = false;

    for (index, line) in lines.iter().enumerate() {
        if is_blank(line) {
            after_blank = true;
            continue;
        }

        let (mut kind, text) = classify_line(line, config.sub_indent_columns);
        if index == 0 && kind == BlockKind::Body && is_title(line, &lines, config) {
            kind = BlockKind::Title;
        }

        let style = kind.style(config);
        let mut spacing_before = style.spacing_before;
        if after_blank {
            spacing_before += config.paragraph_spacing;
        }
        after_blank = false;

        blocks.push(StyledBlock {
            kind,
            text,
            style,
            spacing_before,
        });
    }

    blocks
}

fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn is_title(line: &str, lines: &[&str], config: &LayoutConfig) -> bool {
    line.trim().chars().count() < config.title_max_chars
        && lines.get(1).is_some_and(|next| is_blank(next))
}

fn leading_columns(line: &str) -> usize {
    line.chars()
        .take_while(|ch| ch.is_whitespace())
        .map(|ch| if ch == '\t' { TAB_COLUMNS } else { 1 })
        .sum()
}

fn classify_line(line: &str, sub_indent_columns: usize) -> (BlockKind, String) {
    let body = line.trim_start();
    let is_sub = leading_columns(line) >= sub_indent_columns;

    for (marker, level) in [
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ] {
        if let Some(rest) = body.strip_prefix(marker) {
            return (BlockKind::Heading(level), rest.to_string());
        }
    }

    for marker in ["- ", "* ", "\u{2022} "] {
        if let Some(rest) = body.strip_prefix(marker) {
            let kind = if is_sub {
                BlockKind::SubBullet
            } else {
                BlockKind::Bullet
            };
            return (kind, format!("- {}", rest.trim_start()));
        }
    }

    if NUMBERED_ITEM.is_match(body) {
        let kind = if is_sub {
            BlockKind::SubNumbered
        } else {
            BlockKind::Numbered
        };
        return (kind, body.to_string());
    }

    (BlockKind::Body, body.to_string())
}
