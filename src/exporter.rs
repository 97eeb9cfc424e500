use crate::document::Document;
use crate::info::Info;
use crate::layout::{layout_document, LayoutConfig};
use crate::PDFError;
use std::path::Path;

/// Lays out text and writes it as a PDF. An exporter only holds immutable
/// settings, so one instance can serve any number of exports, including from
/// several threads at once.
#[derive(Default, Debug, Clone)]
pub struct Exporter {
    config: LayoutConfig,
    info: Option<Info>,
}

impl Exporter {
    pub fn new() -> Exporter {
        Exporter::default()
    }

    /// Replace the layout settings (margins, styles, heuristics)
    pub fn with_config(mut self, config: LayoutConfig) -> Exporter {
        self.config = config;
        self
    }

    /// Attach document metadata; without it no info dictionary is written
    pub fn with_info(mut self, info: Info) -> Exporter {
        self.info = Some(info);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `content` without serializing it
    pub fn layout(&self, content: &str) -> Document {
        let mut document = layout_document(content, &self.config);
        if let Some(info) = &self.info {
            document.set_info(info.clone());
        }
        document
    }

    /// Lay out `content` and return the finished PDF bytes
    pub fn render(&self, content: &str) -> Result<Vec<u8>, PDFError> {
        self.layout(content).to_bytes()
    }

    /// Lay out `content` and write the PDF to `path`, replacing any existing
    /// file. The parent directory must already exist. Nothing touches the
    /// disk until the whole file has been built in memory, and a failed
    /// write is returned as-is without removing anything it left behind.
    pub fn export<P: AsRef<Path>>(&self, content: &str, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        let bytes = self.render(content)?;
        std::fs::write(path, &bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Export `content` to `path` with the default layout settings
pub fn export<P: AsRef<Path>>(content: &str, path: P) -> Result<(), PDFError> {
    Exporter::new().export(content, path)
}
