use crate::{
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    writer::ObjectWriter,
    PDFError,
};
use id_arena::{Arena, Id};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID. The ID stays
    /// valid for as long as the document lives and is used to keep appending
    /// text to that page.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Iterate over the pages in the order they will appear in the PDF
    pub fn pages_in_order(&self) -> impl Iterator<Item = &Page> + '_ {
        self.page_order.iter().map(|id| &self.pages[*id])
    }

    /// Serialize the whole document into PDF 1.4 bytes.
    ///
    /// Objects are laid out as: catalog (1), page tree (2), then a page and
    /// its content stream for every page, then the info dictionary if one
    /// was set. A document with no pages is still a valid, empty PDF.
    #[allow(clippy::write_with_newline)]
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let refs = ObjectReferences::new(self.page_count(), self.info.is_some());
        let mut writer = ObjectWriter::new();

        let catalog_id = refs.get(RefType::Catalog);
        let page_tree_id = refs.get(RefType::PageTree);

        let mut catalog: Vec<u8> = Vec::default();
        write!(
            &mut catalog,
            "<<\n/Type /Catalog\n/Pages {page_tree_id}\n>>\n"
        )?;
        writer.object(catalog_id, &catalog)?;

        let kids: Vec<String> = refs.pages().map(|r| r.to_string()).collect();
        let mut page_tree: Vec<u8> = Vec::default();
        write!(
            &mut page_tree,
            "<<\n/Type /Pages\n/Kids [{}]\n/Count {}\n>>\n",
            kids.join(" "),
            self.page_count()
        )?;
        writer.object(page_tree_id, &page_tree)?;

        for (page_index, page) in self.pages_in_order().enumerate() {
            page.write(&refs, page_index, &mut writer)?;
        }

        if let (Some(info), Some(info_id)) = (&self.info, refs.info()) {
            writer.object(info_id, &info.render()?)?;
        }

        let bytes = writer.finish(catalog_id, refs.info())?;
        log::debug!(
            "serialized {} pages into {} objects ({} bytes)",
            self.page_count(),
            refs.count(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first and handed to the writer
    /// in a single call.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }
}
