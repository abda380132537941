//! Output destinations for FASTA emission
//!
//! `DataSink` is the write counterpart to `DataSource`: a local path or
//! standard output. Where the source sniffs gzip content, the sink decides
//! from the file extension: a `.gz` path writes a gzip stream, anything
//! else plain text, and stdout is always plain. `create` hands back a
//! [`SinkWriter`] whose [`finish`](SinkWriter::finish) finalizes the stream;
//! for gzip output that writes the trailer, so always finish rather than
//! drop.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use fastapack::DataSink;
//!
//! # fn main() -> fastapack::Result<()> {
//! let mut writer = DataSink::from_path("out.fa.gz").create()?;
//! writer.write_all(b">s\nACGT\n")?;
//! writer.finish()?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// Where FASTA text is written to.
#[derive(Debug, Clone)]
pub enum DataSink {
    /// A local file path; a `.gz` extension selects gzip output.
    Local(PathBuf),
    /// Standard output, always uncompressed.
    Stdout,
}

impl DataSink {
    /// Create a sink for a local file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSink::Local(path.as_ref().to_path_buf())
    }

    /// Create a sink for standard output.
    pub fn stdout() -> Self {
        DataSink::Stdout
    }

    /// File extension of a local sink, if any.
    fn extension(&self) -> Option<&str> {
        match self {
            DataSink::Local(path) => path.extension().and_then(|s| s.to_str()),
            DataSink::Stdout => None,
        }
    }

    /// Whether output through this sink will be gzip-compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self.extension(), Some("gz") | Some("gzip"))
    }

    /// Open the sink for writing.
    ///
    /// Creates (or truncates) the file for local sinks.
    pub fn create(&self) -> Result<SinkWriter> {
        match self {
            DataSink::Local(path) => {
                let file = File::create(path)?;
                if self.is_compressed() {
                    Ok(SinkWriter::gzip(Box::new(file)))
                } else {
                    Ok(SinkWriter::plain(Box::new(file)))
                }
            }
            DataSink::Stdout => Ok(SinkWriter::plain(Box::new(io::stdout()))),
        }
    }
}

/// Buffered writer over a sink, plain or gzip.
pub enum SinkWriter {
    /// Uncompressed buffered output.
    Plain(BufWriter<Box<dyn Write>>),
    /// Gzip output at the default compression level.
    Gzip(GzEncoder<BufWriter<Box<dyn Write>>>),
}

impl SinkWriter {
    /// Wrap a raw writer without compression.
    pub fn plain(writer: Box<dyn Write>) -> Self {
        SinkWriter::Plain(BufWriter::new(writer))
    }

    /// Wrap a raw writer with gzip compression.
    pub fn gzip(writer: Box<dyn Write>) -> Self {
        SinkWriter::Gzip(GzEncoder::new(BufWriter::new(writer), Compression::default()))
    }

    /// Flush buffers and finalize the stream.
    ///
    /// For gzip output this writes the stream trailer; a gzip sink dropped
    /// without finishing leaves a truncated stream behind.
    pub fn finish(self) -> Result<()> {
        match self {
            SinkWriter::Plain(mut writer) => writer.flush()?,
            SinkWriter::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::Plain(writer) => writer.write(buf),
            SinkWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::Plain(writer) => writer.flush(),
            SinkWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::source::DataSource;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_compression_detected_from_extension() {
        assert!(DataSink::from_path("out.fa.gz").is_compressed());
        assert!(DataSink::from_path("out.gzip").is_compressed());
        assert!(!DataSink::from_path("out.fa").is_compressed());
        assert!(!DataSink::from_path("out").is_compressed());
        assert!(!DataSink::stdout().is_compressed());
    }

    #[test]
    fn test_plain_sink_writes_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fa");

        let mut writer = DataSink::from_path(&path).create().unwrap();
        writer.write_all(b">s\nACGT\n").unwrap();
        writer.finish().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b">s\nACGT\n");
    }

    #[test]
    fn test_gzip_sink_roundtrips_through_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fa.gz");

        let mut writer = DataSink::from_path(&path).create().unwrap();
        writer.write_all(b">s\nACGT\n").unwrap();
        writer.finish().unwrap();

        // On-disk bytes are a real gzip stream
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);

        // And the source layer reads it back transparently
        let mut reader = DataSource::from_path(&path).open().unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, ">s\nACGT\n");
    }
}
