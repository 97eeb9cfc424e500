use thiserror::Error;

/// All errors that the crate can generate
///
/// Laying out text never fails: empty or whitespace-only input produces a
/// document with zero pages, which is still written as a valid PDF.
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// Writing the PDF (to memory or to disk) failed
    Io(#[from] std::io::Error),
}
