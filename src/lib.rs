//! Export plain text as a PDF 1.4 file without any PDF library.
//!
//! Text is classified into titles, headings, bullets, numbered items and body
//! paragraphs, word-wrapped and paginated onto A4 pages, and written with the
//! two standard fonts Helvetica and Helvetica-Bold. Only printable ASCII is
//! drawn; any other character is dropped.
//!
//! ```no_run
//! pdf_export::export("Notes\n\n- first\n- second", "notes.pdf")?;
//! # Ok::<(), pdf_export::PDFError>(())
//! ```

mod content;
pub use content::escape_text;

mod document;
pub use document::*;

mod exporter;
pub use exporter::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Classification, word wrapping and pagination of raw text
pub mod layout;

mod page;
pub use page::*;

/// The fixed A4 page format
pub mod pagesize;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

pub(crate) mod writer;
