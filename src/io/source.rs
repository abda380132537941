//! Input sources for line-oriented reading
//!
//! `DataSource` abstracts over where FASTA text comes from (a local file or
//! standard input) and hands back a buffered reader the parser can walk line
//! by line. Gzip input is handled transparently: the first bytes of the
//! stream are peeked without consuming anything, and the gzip magic routes
//! the stream through a decoder. Detection is content-based; a `.gz`
//! extension on an uncompressed file, or the reverse, does not confuse it.
//!
//! # Example
//!
//! ```no_run
//! use fastapack::DataSource;
//!
//! # fn main() -> fastapack::Result<()> {
//! let reader = DataSource::from_path("genome.fa.gz").open()?;
//! // reader implements BufRead and yields decompressed text
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::{FastapackError, Result};

/// Gzip magic bytes (ID1=31, ID2=139).
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where FASTA text is read from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// A local file path.
    Local(PathBuf),
    /// Standard input.
    Stdin,
}

impl DataSource {
    /// Create a source for a local file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Create a source for standard input.
    pub fn stdin() -> Self {
        DataSource::Stdin
    }

    /// Open the source as a buffered text reader.
    ///
    /// Local paths are checked for existence up front, before any byte is
    /// read. Gzip content is detected from the stream itself and
    /// decompressed transparently.
    ///
    /// # Errors
    ///
    /// [`FastapackError::MissingInput`] if a local path is not an existing
    /// regular file; [`FastapackError::Io`] for open or read failures.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            DataSource::Local(path) => {
                if !path.is_file() {
                    return Err(FastapackError::MissingInput { path: path.clone() });
                }
                let file = File::open(path)?;
                decompress_if_gzip(Box::new(BufReader::new(file)))
            }
            DataSource::Stdin => decompress_if_gzip(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Peek the stream head and route gzip content through a decoder.
///
/// Plain content passes through untouched; nothing is consumed either way.
/// Streams shorter than the two magic bytes are necessarily plain.
fn decompress_if_gzip(mut reader: Box<dyn BufRead>) -> Result<Box<dyn BufRead>> {
    let head = reader.fill_buf()?;
    let is_gzip = head.len() >= 2 && head[..2] == GZIP_MAGIC;

    if is_gzip {
        // MultiGzDecoder also accepts multi-member files such as bgzip output
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(reader)
    }
}
