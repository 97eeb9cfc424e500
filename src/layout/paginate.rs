use id_arena::Id;

use crate::document::Document;
use crate::layout::{classify, wrap_text, LayoutConfig, StyledBlock};
use crate::page::{Page, TextRun};
use crate::units::{Mm, Pt};

/// Places blocks one after another down the page, starting new pages as the
/// cursor reaches the bottom margin.
///
/// The cursor `y` is measured in millimetres from the top of the page and
/// always marks the top of the next line. Runs are converted to PDF points
/// with a bottom-left origin as they are emitted.
pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    document: Document,
    current: Option<Id<Page>>,
    y: Mm,
}

impl<'a> Paginator<'a> {
    pub fn new(config: &'a LayoutConfig) -> Paginator<'a> {
        Paginator {
            config,
            document: Document::default(),
            current: None,
            y: Mm(0.0),
        }
    }

    /// Wraps `block` and places its lines. A block that fits on the current
    /// page stays with it; otherwise it starts on a fresh page, spilling onto
    /// further pages if it is taller than a whole page.
    pub fn place(&mut self, block: &StyledBlock) {
        let style = block.style;
        let lines = wrap_text(self.config, &block.text, style.indent, style.size);

        if lines.is_empty() {
            if self.current.is_some() {
                self.y += block.spacing_before;
            }
            return;
        }

        let line_height = self.config.line_height(style.size);
        let height = block.spacing_before + line_height * lines.len() as f32;
        if self.current.is_none() || self.overflows(self.y + height) {
            self.new_page();
        }
        self.y += block.spacing_before;

        let (_, page_height) = self.config.page_size();
        let x: Pt = (self.config.margins.left + style.indent).into();
        let ascent: Mm = style.size.into();

        for line in lines {
            if self.overflows(self.y + line_height) {
                self.new_page();
            }

            let baseline = self.y + ascent;
            let run = TextRun {
                text: line,
                font: style.font,
                size: style.size,
                coords: (x, (page_height - baseline).into()),
            };
            if let Some(id) = self.current {
                self.document.pages[id].add_run(run);
            }
            self.y += line_height;
        }
    }

    pub fn finish(self) -> Document {
        self.document
    }

    /// Whether content ending at `bottom` would cross the bottom margin. A
    /// page that is still empty never overflows, so no blank pages are left
    /// behind when a single line is taller than the page.
    fn overflows(&self, bottom: Mm) -> bool {
        let has_content = self
            .current
            .is_some_and(|id| !self.document.pages[id].runs.is_empty());
        has_content && bottom > self.config.bottom_limit()
    }

    fn new_page(&mut self) {
        let id = self.document.add_page(Page::new());
        log::trace!("starting page {}", self.document.page_count());
        self.current = Some(id);
        self.y = self.config.margins.top;
    }
}

/// Classifies, wraps and paginates `content` into a [Document]. Empty or
/// whitespace-only input yields a document with no pages.
pub fn layout_document(content: &str, config: &LayoutConfig) -> Document {
    let blocks = classify(content, config);
    let mut paginator = Paginator::new(config);
    for block in blocks.iter() {
        paginator.place(block);
    }
    let document = paginator.finish();
    log::debug!(
        "laid out {} blocks on {} pages",
        blocks.len(),
        document.page_count()
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontId;
    use crate::layout::{BlockKind, TextStyle};

    fn block(text: &str, size: f32, spacing: f32) -> StyledBlock {
        StyledBlock {
            kind: BlockKind::Body,
            text: text.to_string(),
            style: TextStyle::new(FontId::Regular, size, 0.0, spacing),
            spacing_before: Mm(spacing),
        }
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn empty_input_has_no_pages() {
        let config = LayoutConfig::default();
        assert_eq!(layout_document("", &config).page_count(), 0);
        assert_eq!(layout_document(" \n\t\n", &config).page_count(), 0);
    }

    #[test]
    fn title_and_body_fit_one_page() {
        let config = LayoutConfig::default();
        let document = layout_document("Title\n\nBody text here.", &config);
        assert_eq!(document.page_count(), 1);

        let page = document.pages_in_order().next().expect("one page");
        assert_eq!(texts(page), vec!["Title", "Body text here."]);
        assert_eq!(page.runs[0].font, FontId::Bold);
        assert_eq!(page.runs[0].size, Pt(20.0));
        assert_eq!(page.runs[1].font, FontId::Regular);
    }

    #[test]
    fn runs_are_positioned_from_the_top_left_margin() {
        let config = LayoutConfig::default();
        let document = layout_document("- item\n  - nested", &config);
        let page = document.pages_in_order().next().expect("one page");

        let (x0, y0) = page.runs[0].coords;
        let (x1, y1) = page.runs[1].coords;
        // 20mm margin + 8mm / 14mm indent
        assert!((x0.0 - 28.0 * 2.83465).abs() < 0.01);
        assert!((x1.0 - 34.0 * 2.83465).abs() < 0.01);
        assert!(y1 < y0);
        assert!(y0.0 < (297.0 - 20.0) * 2.83465);
    }

    #[test]
    fn long_block_moves_to_next_page_and_spans_pages() {
        let config = LayoutConfig::default();
        let content = format!("# Heading\n{}", "filler word ".repeat(500));
        let document = layout_document(&content, &config);
        assert!(document.page_count() >= 2);

        let pages: Vec<&Page> = document.pages_in_order().collect();
        assert_eq!(texts(pages[0]), vec!["Heading"]);
        for page in &pages[1..] {
            assert!(!texts(page).contains(&"Heading"));
            assert!(!page.runs.is_empty());
        }
    }

    #[test]
    fn block_exactly_filling_the_page_stays() {
        let config = LayoutConfig {
            line_height_factor: 0.5,
            ..LayoutConfig::default()
        };
        let mut paginator = Paginator::new(&config);
        paginator.place(&block("first", 10.0, 0.0));

        // 2mm spacing + one 5mm line ends exactly on the 277mm limit
        paginator.y = Mm(270.0);
        paginator.place(&block("fits", 10.0, 2.0));
        assert_eq!(paginator.y, Mm(277.0));
        assert_eq!(paginator.finish().page_count(), 1);
    }

    #[test]
    fn block_one_step_too_tall_starts_a_page() {
        let config = LayoutConfig {
            line_height_factor: 0.5,
            ..LayoutConfig::default()
        };
        let mut paginator = Paginator::new(&config);
        paginator.place(&block("first", 10.0, 0.0));

        paginator.y = Mm(270.5);
        paginator.place(&block("moves", 10.0, 2.0));
        let document = paginator.finish();
        assert_eq!(document.page_count(), 2);
        let pages: Vec<&Page> = document.pages_in_order().collect();
        assert_eq!(texts(pages[1]), vec!["moves"]);
    }

    #[test]
    fn whitespace_block_only_adds_spacing_on_an_existing_page() {
        let config = LayoutConfig::default();
        let mut paginator = Paginator::new(&config);

        paginator.place(&block("   ", 11.0, 4.0));
        assert!(paginator.current.is_none());
        assert_eq!(paginator.y, Mm(0.0));

        paginator.place(&block("text", 11.0, 0.0));
        let before = paginator.y;
        paginator.place(&block("   ", 11.0, 4.0));
        assert_eq!(paginator.y, before + Mm(4.0));
        assert_eq!(paginator.finish().page_count(), 1);
    }
}
