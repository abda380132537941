//! Streaming FASTA record reader
//!
//! # Format
//!
//! FASTA input is line-oriented:
//! - Header lines start with `>`; everything after the marker is the header
//!   text, kept verbatim (including any description).
//! - All other lines belong to the most recent header and are concatenated,
//!   in order, with no separator.
//!
//! Example:
//! ```text
//! >sequence1 sample description
//! GATTACAGATTACA
//! TGCATGCA
//! >sequence2
//! ACGTACGT
//! ```
//!
//! # Architecture
//!
//! [`RecordStream`] is a pull-based iterator over records: one line-grouping
//! state machine (current header + sequence accumulator, finalize on the
//! next header or end of input) drives every consumer. The eager store
//! parses collect from it; lazy callers iterate it directly and stop
//! whenever they like, leaving the rest of the input unread. Memory stays
//! proportional to a single record, never the whole file.
//!
//! A record is finalized for every header seen, so a header followed
//! immediately by another header (or by end of input) yields a record with
//! an empty sequence. Lines before the first header belong to no record and
//! are skipped. Input with no header at all yields nothing.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::io::source::DataSource;
use crate::types::SequenceRecord;

/// Streaming FASTA parser over any buffered reader.
///
/// Yields one [`SequenceRecord`] (text payload) per header in input order.
/// Iteration is single-pass and forward-only; dropping the stream early
/// releases the underlying reader without consuming the remainder.
///
/// # Example
///
/// ```no_run
/// use fastapack::RecordStream;
///
/// let stream = RecordStream::from_path("genome.fa.gz")?;
/// for record in stream {
///     let record = record?;
///     println!("{}: {} bp", record.header(), record.len());
/// }
/// # Ok::<(), fastapack::FastapackError>(())
/// ```
pub struct RecordStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    finished: bool,
    /// Header of the record currently being accumulated
    pending_header: Option<String>,
    /// Sequence lines of the pending record, concatenated
    seq_buffer: Vec<u8>,
}

impl RecordStream<Box<dyn BufRead>> {
    /// Create a stream from a data source.
    ///
    /// Gzip content is decompressed transparently (see
    /// [`DataSource::open`]).
    pub fn new(source: DataSource) -> Result<Self> {
        let reader = source.open()?;
        Ok(Self::from_reader(reader))
    }

    /// Create a stream reading from a local file path.
    ///
    /// # Errors
    ///
    /// Fails with [`FastapackError::MissingInput`] before reading anything
    /// if the path is not an existing file.
    ///
    /// [`FastapackError::MissingInput`]: crate::FastapackError::MissingInput
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fastapack::RecordStream;
    ///
    /// let stream = RecordStream::from_path("genome.fa")?;
    /// # Ok::<(), fastapack::FastapackError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(DataSource::from_path(path))
    }
}

impl<R: BufRead> RecordStream<R> {
    /// Create a stream from any buffered reader.
    ///
    /// Useful for tests and in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(256),
            finished: false,
            pending_header: None,
            seq_buffer: Vec::new(),
        }
    }

    /// Pull the next completed record, or `None` at end of input.
    ///
    /// Lines are consumed until the next header finalizes the pending
    /// record, or end of input finalizes the last one.
    fn read_record(&mut self) -> Result<Option<SequenceRecord>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.line_buffer.clear();
            if self.reader.read_line(&mut self.line_buffer)? == 0 {
                // End of input finalizes the pending record, if any
                self.finished = true;
                let sequence = std::mem::take(&mut self.seq_buffer);
                return Ok(self
                    .pending_header
                    .take()
                    .map(|header| SequenceRecord::new_text(header, sequence)));
            }

            let line = self.line_buffer.trim_end();
            if let Some(header) = line.strip_prefix('>') {
                let header = header.to_string();
                if let Some(done) = self.pending_header.replace(header) {
                    let sequence = std::mem::take(&mut self.seq_buffer);
                    return Ok(Some(SequenceRecord::new_text(done, sequence)));
                }
            } else if self.pending_header.is_some() {
                self.seq_buffer.extend_from_slice(line.as_bytes());
            }
            // Lines before the first header belong to no record
        }
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn stream_over(fasta: &[u8]) -> RecordStream<BufReader<Cursor<Vec<u8>>>> {
        RecordStream::from_reader(BufReader::new(Cursor::new(fasta.to_vec())))
    }

    fn collect(fasta: &[u8]) -> Vec<SequenceRecord> {
        stream_over(fasta).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_parse_single_record() {
        let records = collect(b">seq1\nGATTACA\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "seq1");
        assert_eq!(&*records[0].sequence(), b"GATTACA");
    }

    #[test]
    fn test_parse_multiple_records() {
        let records = collect(b">seq1\nGATTACA\n>seq2\nACGT\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "seq1");
        assert_eq!(&*records[0].sequence(), b"GATTACA");
        assert_eq!(records[1].header(), "seq2");
        assert_eq!(&*records[1].sequence(), b"ACGT");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let records = collect(b">seq1\nGATT\nACA\n>seq2\nACGT\n");
        assert_eq!(records.len(), 2);
        assert_eq!(&*records[0].sequence(), b"GATTACA"); // joined with no separator
    }

    #[test]
    fn test_header_kept_verbatim() {
        let records = collect(b">seq1 homo sapiens, chr 7\nGATTACA\n");
        assert_eq!(records[0].header(), "seq1 homo sapiens, chr 7");
    }

    #[test]
    fn test_empty_lines_contribute_nothing() {
        let records = collect(b">seq1\n\nGATT\n\nACA\n\n>seq2\nACGT\n\n");
        assert_eq!(records.len(), 2);
        assert_eq!(&*records[0].sequence(), b"GATTACA");
        assert_eq!(&*records[1].sequence(), b"ACGT");
    }

    #[test]
    fn test_no_header_yields_no_records() {
        let records = collect(b"GATTACA\nACGT\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_lines_before_first_header_skipped() {
        let records = collect(b"; stray comment\nGATT\n>seq1\nACGT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "seq1");
        assert_eq!(&*records[0].sequence(), b"ACGT");
    }

    #[test]
    fn test_header_without_sequence_yields_empty_record() {
        let records = collect(b">lonely\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "lonely");
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_back_to_back_headers() {
        let records = collect(b">a\n>b\nACGT\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "a");
        assert!(records[0].is_empty());
        assert_eq!(records[1].header(), "b");
        assert_eq!(&*records[1].sequence(), b"ACGT");
    }

    #[test]
    fn test_bare_marker_gives_empty_header() {
        let records = collect(b">\nACGT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "");
        assert_eq!(&*records[0].sequence(), b"ACGT");
    }

    #[test]
    fn test_duplicate_headers_preserved_in_order() {
        let records = collect(b">dup\nAC\n>dup\nGT\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "dup");
        assert_eq!(records[1].header(), "dup");
        assert_eq!(&*records[0].sequence(), b"AC");
        assert_eq!(&*records[1].sequence(), b"GT");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = collect(b">seq1\r\nGATT\r\nACA\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "seq1");
        assert_eq!(&*records[0].sequence(), b"GATTACA");
    }

    #[test]
    fn test_missing_final_newline() {
        let records = collect(b">seq1\nGATTACA");
        assert_eq!(records.len(), 1);
        assert_eq!(&*records[0].sequence(), b"GATTACA");
    }

    #[test]
    fn test_empty_input() {
        let mut stream = stream_over(b"");
        assert!(stream.next().is_none());
        // Stream stays exhausted
        assert!(stream.next().is_none());
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// A single well-formed record parses back exactly
        #[test]
        fn prop_single_record_roundtrip(
            header in "[A-Za-z0-9_]{1,50}",
            seq in "[ACGTN]{0,500}",
        ) {
            let fasta = format!(">{}\n{}\n", header, seq);
            let records = collect(fasta.as_bytes());

            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(records[0].header(), header.as_str());
            prop_assert_eq!(&*records[0].sequence(), seq.as_bytes());
        }

        /// Headers keep their description text after the first space
        #[test]
        fn prop_description_kept(
            id in "[A-Za-z0-9_]{1,30}",
            description in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}[A-Za-z0-9]",
        ) {
            let header = format!("{} {}", id, description);
            let fasta = format!(">{}\nACGT\n", header);
            let records = collect(fasta.as_bytes());

            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(records[0].header(), header.as_str());
        }

        /// Line wrapping in the input never changes the parsed sequence
        #[test]
        fn prop_multiline_joins(
            seq in "[ACGT]{1,400}",
            width in 1..80usize,
        ) {
            let mut fasta = String::from(">wrapped\n");
            for chunk in seq.as_bytes().chunks(width) {
                fasta.push_str(std::str::from_utf8(chunk).unwrap());
                fasta.push('\n');
            }
            let records = collect(fasta.as_bytes());

            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(&*records[0].sequence(), seq.as_bytes());
        }

        /// Record count and order match the input
        #[test]
        fn prop_record_count(count in 0..12usize) {
            let mut fasta = String::new();
            for i in 0..count {
                fasta.push_str(&format!(">seq_{}\n{}\n", i, "ACGT".repeat(i + 1)));
            }
            let records = collect(fasta.as_bytes());

            prop_assert_eq!(records.len(), count);
            for (i, record) in records.iter().enumerate() {
                let expected = format!("seq_{}", i);
                prop_assert_eq!(record.header(), expected.as_str());
                prop_assert_eq!(record.len(), 4 * (i + 1));
            }
        }
    }
}
