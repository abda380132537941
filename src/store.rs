//! In-memory FASTA store
//!
//! [`FastaStore`] owns an ordered collection of records and the eager parse
//! paths that fill it: `parse` keeps sequences as text, `parse_binary` packs
//! them 2-bit via the codec. Both consume the same [`RecordStream`] grouping
//! logic the lazy path exposes directly, so there is exactly one parser.
//!
//! A store never mixes representations: the first parse call fixes the mode,
//! and a later call in the other mode fails up front. `parse_binary` is
//! all-or-nothing per call: an invalid base anywhere in the file removes
//! every record that call had accumulated before the error is returned.
//!
//! # Example
//!
//! ```no_run
//! use fastapack::FastaStore;
//!
//! # fn main() -> fastapack::Result<()> {
//! let mut store = FastaStore::new();
//! let added = store.parse_binary("genome.fa")?;
//! println!("packed {added} records");
//!
//! let mut out = Vec::new();
//! store.write_fasta(&mut out, 60)?;
//! # Ok(())
//! # }
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{FastapackError, Result};
use crate::io::{FastaWriter, RecordStream};
use crate::types::SequenceRecord;

/// Ordered collection of FASTA records with parse and emit operations.
///
/// Records keep insertion order; duplicate headers are allowed and
/// preserved. All records share one payload representation, chosen by the
/// parse mode that first populated the store.
#[derive(Debug, Clone, Default)]
pub struct FastaStore {
    records: Vec<SequenceRecord>,
}

impl FastaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a FASTA file, storing sequences as plain text.
    ///
    /// Appends to any records already present (from earlier text-mode
    /// calls). Returns the number of records added.
    ///
    /// # Errors
    ///
    /// [`FastapackError::MissingInput`] if the path is absent (checked
    /// before any read); [`FastapackError::MixedStore`] if the store already
    /// holds packed records; [`FastapackError::Io`] for read failures, which
    /// roll back the records this call had added.
    pub fn parse<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.check_mode(false)?;
        let stream = RecordStream::from_path(path)?;
        self.extend_from_stream(stream, false)
    }

    /// Parse a FASTA file, packing every sequence 2-bit.
    ///
    /// Appends to any records already present (from earlier binary-mode
    /// calls). Returns the number of records added.
    ///
    /// # Errors
    ///
    /// [`FastapackError::MissingInput`] and [`FastapackError::MixedStore`]
    /// as for [`parse`](FastaStore::parse). A base outside the canonical
    /// alphabet anywhere in the file fails the whole call with
    /// [`FastapackError::InvalidBase`] naming the offending record's header;
    /// the store is first restored to its pre-call state, so callers never
    /// observe a partially parsed file.
    pub fn parse_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.check_mode(true)?;
        let stream = RecordStream::from_path(path)?;
        self.extend_from_stream(stream, true)
    }

    /// Text-mode parse from any buffered reader.
    ///
    /// Same semantics as [`parse`](FastaStore::parse) without the path
    /// existence check; useful for stdin and in-memory sources.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        self.check_mode(false)?;
        self.extend_from_stream(RecordStream::from_reader(reader), false)
    }

    /// Binary-mode parse from any buffered reader.
    ///
    /// Same semantics as [`parse_binary`](FastaStore::parse_binary) without
    /// the path existence check, including full rollback of the call on an
    /// invalid base.
    pub fn parse_binary_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        self.check_mode(true)?;
        self.extend_from_stream(RecordStream::from_reader(reader), true)
    }

    /// Drain a record stream into the store, packing if requested.
    ///
    /// On any error the records this call appended are truncated away
    /// before the error propagates; earlier contents are untouched.
    fn extend_from_stream<R: BufRead>(
        &mut self,
        stream: RecordStream<R>,
        packed: bool,
    ) -> Result<usize> {
        let mark = self.records.len();
        for record in stream {
            let record = if packed {
                record.and_then(SequenceRecord::into_packed)
            } else {
                record
            };
            match record {
                Ok(record) => self.records.push(record),
                Err(e) => {
                    self.records.truncate(mark);
                    return Err(e);
                }
            }
        }
        Ok(self.records.len() - mark)
    }

    /// Reject a parse whose representation differs from stored records.
    fn check_mode(&self, packed: bool) -> Result<()> {
        match self.records.first() {
            Some(first) if first.is_packed() != packed => Err(FastapackError::MixedStore {
                existing: if first.is_packed() { "packed" } else { "text" },
            }),
            _ => Ok(()),
        }
    }

    /// Read-only view of the stored records, in insertion order.
    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Iterate over the stored records.
    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Emit every record as FASTA text, in insertion order.
    ///
    /// `wrap` is the maximum sequence characters per line; 0 writes each
    /// sequence on a single line. Packed records are decoded on the fly.
    pub fn write_fasta<W: Write>(&self, writer: &mut W, wrap: usize) -> Result<()> {
        let mut writer = FastaWriter::with_wrap(writer, wrap);
        for record in &self.records {
            writer.write_record(record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FastaStore {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
