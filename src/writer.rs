//! Low-level PDF file assembly: header, indirect objects, streams, the
//! cross-reference table and the trailer.

use crate::refs::Ref;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use std::io::Write;

/// `%PDF-1.4` followed by a comment of four high-bit bytes, which tells
/// transfer tools the file is binary.
const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Buffers a whole PDF in memory while recording the byte offset of every
/// indirect object for the cross-reference table.
pub(crate) struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    pub fn new() -> ObjectWriter {
        ObjectWriter {
            buf: HEADER.to_vec(),
            offsets: Vec::new(),
        }
    }

    /// Writes `N 0 obj`, the body, and `endobj`. Objects must be written in
    /// ascending order starting at 1.
    #[allow(clippy::write_with_newline)]
    pub fn object(&mut self, id: Ref, body: &[u8]) -> Result<(), std::io::Error> {
        debug_assert_eq!(id.get(), self.offsets.len() + 1, "objects written out of order");
        self.offsets.push(self.buf.len());
        write!(&mut self.buf, "{} 0 obj\n", id.get())?;
        self.buf.write_all(body)?;
        write!(&mut self.buf, "endobj\n")?;
        Ok(())
    }

    /// Compresses `data` and writes it as a FlateDecode stream object whose
    /// `/Length` is the compressed size.
    #[allow(clippy::write_with_newline)]
    pub fn stream(&mut self, id: Ref, data: &[u8]) -> Result<(), std::io::Error> {
        let compressed = compress_to_vec_zlib(data, CompressionLevel::DefaultCompression as u8);

        let mut body: Vec<u8> = Vec::with_capacity(compressed.len() + 64);
        write!(
            &mut body,
            "<<\n/Length {}\n/Filter /FlateDecode\n>>\nstream\n",
            compressed.len()
        )?;
        body.write_all(&compressed)?;
        write!(&mut body, "\nendstream\n")?;
        self.object(id, &body)
    }

    /// Appends the cross-reference table and trailer, returning the finished file
    #[allow(clippy::write_with_newline)]
    pub fn finish(mut self, root: Ref, info: Option<Ref>) -> Result<Vec<u8>, std::io::Error> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        write!(&mut self.buf, "xref\n")?;
        write!(&mut self.buf, "0 {size}\n")?;
        write!(&mut self.buf, "0000000000 65535 f \n")?;
        for offset in self.offsets.iter() {
            write!(&mut self.buf, "{offset:010} 00000 n \n")?;
        }

        write!(&mut self.buf, "trailer\n")?;
        write!(&mut self.buf, "<< /Size {size} /Root {root}")?;
        if let Some(info) = info {
            write!(&mut self.buf, " /Info {info}")?;
        }
        write!(&mut self.buf, " >>\n")?;
        write!(&mut self.buf, "startxref\n{xref_offset}\n")?;
        write!(&mut self.buf, "%%EOF\n")?;

        Ok(self.buf)
    }
}
