use crate::content::render_runs;
use crate::font::FontId;
use crate::pagesize::A4;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::writer::ObjectWriter;
use std::io::Write;

/// A single line of text placed on a page
#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
    pub text: String,
    pub font: FontId,
    pub size: Pt,
    /// Position of the baseline start, in points from the bottom-left corner
    pub coords: (Pt, Pt),
}

/// One A4 page worth of laid out text
#[derive(Default, Clone, PartialEq, Debug)]
pub struct Page {
    /// The laid out text, in drawing order
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new() -> Page {
        Page::default()
    }

    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Builds the uncompressed content stream for this page
    pub fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_runs(&self.runs)
    }

    /// Writes the page dictionary followed by its content stream. The two
    /// objects are always adjacent, the stream directly after the page.
    #[allow(clippy::write_with_newline)]
    pub(crate) fn write(
        &self,
        refs: &ObjectReferences,
        page_index: usize,
        writer: &mut ObjectWriter,
    ) -> Result<(), std::io::Error> {
        let id = refs.get(RefType::Page(page_index));
        let content_id = refs.get(RefType::ContentForPage(page_index));

        let mut dict: Vec<u8> = Vec::default();
        write!(&mut dict, "<<\n/Type /Page\n")?;
        write!(&mut dict, "/Parent {}\n", refs.get(RefType::PageTree))?;
        write!(&mut dict, "/MediaBox [0 0 {:.2} {:.2}]\n", A4.0 .0, A4.1 .0)?;
        write!(&mut dict, "/Contents {content_id}\n")?;
        write!(&mut dict, "/Resources <<\n/Font <<\n")?;
        for font in FontId::ALL {
            write!(
                &mut dict,
                "/{} <<\n/Type /Font\n/Subtype /Type1\n/BaseFont /{}\n>>\n",
                font.resource_name(),
                font.base_font()
            )?;
        }
        write!(&mut dict, ">>\n>>\n>>\n")?;
        writer.object(id, &dict)?;

        let rendered = self.render()?;
        writer.stream(content_id, &rendered)
    }
}
