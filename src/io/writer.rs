//! FASTA emission with configurable line wrapping
//!
//! [`FastaWriter`] serializes records back to FASTA text: a `>` header line,
//! then the sequence either on a single line (wrap width 0) or in chunks of
//! exactly the wrap width with a shorter final remainder. Packed records are
//! decoded on the fly; the stored payload is never touched.
//!
//! # Example
//!
//! ```
//! use fastapack::{FastaWriter, SequenceRecord};
//!
//! let record = SequenceRecord::new_text("seq1".to_string(), b"GATTACAGAT".to_vec());
//! let mut out = Vec::new();
//! let mut writer = FastaWriter::with_wrap(&mut out, 4);
//! writer.write_record(&record)?;
//! assert_eq!(out, b">seq1\nGATT\nACAG\nAT\n");
//! # Ok::<(), fastapack::FastapackError>(())
//! ```

use std::io::Write;

use crate::error::Result;
use crate::types::SequenceRecord;

/// Writes records as FASTA text to any sink.
pub struct FastaWriter<W: Write> {
    writer: W,
    /// Maximum sequence characters per line; 0 writes one line per record.
    wrap: usize,
}

impl<W: Write> FastaWriter<W> {
    /// Create a writer that emits each sequence on a single line.
    pub fn new(writer: W) -> Self {
        Self::with_wrap(writer, 0)
    }

    /// Create a writer that wraps sequence lines at `wrap` characters.
    ///
    /// A wrap width of 0 disables wrapping.
    pub fn with_wrap(writer: W, wrap: usize) -> Self {
        Self { writer, wrap }
    }

    /// The configured wrap width.
    pub fn wrap(&self) -> usize {
        self.wrap
    }

    /// Write one record: header line, then sequence lines.
    ///
    /// With a positive wrap width `w`, the sequence is emitted in chunks of
    /// exactly `w` characters; a non-empty remainder becomes a shorter final
    /// line, and a length that is an exact multiple of `w` ends on a
    /// full-width line with no trailing empty line. With width 0 the whole
    /// sequence is one line, which for an empty sequence is an empty line;
    /// positive widths emit no sequence line at all in that case.
    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        writeln!(self.writer, ">{}", record.header())?;

        let sequence = record.sequence();
        if self.wrap == 0 {
            self.writer.write_all(&sequence)?;
            self.writer.write_all(b"\n")?;
        } else {
            for chunk in sequence.chunks(self.wrap) {
                self.writer.write_all(chunk)?;
                self.writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
