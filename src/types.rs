//! Record types shared across parsing and emission
//!
//! A [`SequenceRecord`] pairs a FASTA header with its sequence payload. The
//! payload is a tagged union, [`SequenceData`]: either the raw text exactly
//! as concatenated from the input lines, or the 2-bit packed form produced by
//! the binary parse path. The tag is fixed when the record is built and never
//! changes afterwards; accessors dispatch on it by matching, and the textual
//! view of a packed record is recovered by decoding on demand, leaving the
//! stored payload untouched.

use std::borrow::Cow;

use crate::codec::PackedSeq;
use crate::error::{FastapackError, Result};

/// Sequence payload in exactly one of two representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceData {
    /// Raw sequence characters, concatenated across input lines.
    Text(Vec<u8>),
    /// 2-bit packed bases, produced only by the binary encode path.
    Packed(PackedSeq),
}

impl SequenceData {
    /// Number of bases in either representation.
    pub fn len(&self) -> usize {
        match self {
            SequenceData::Text(text) => text.len(),
            SequenceData::Packed(packed) => packed.len(),
        }
    }

    /// Whether the payload holds no bases.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A FASTA record: header plus sequence payload.
///
/// Records are immutable once constructed. The representation tag is chosen
/// by the parse mode that built the record and cannot change afterwards;
/// [`sequence`](SequenceRecord::sequence) always yields text (decoding packed
/// payloads on the fly), while [`packed`](SequenceRecord::packed) yields the
/// raw packed form and fails on text records.
///
/// # Examples
///
/// ```
/// use fastapack::{PackedSeq, SequenceRecord};
///
/// let text = SequenceRecord::new_text("seq1".to_string(), b"ACGT".to_vec());
/// assert_eq!(&*text.sequence(), b"ACGT");
/// assert!(text.packed().is_err());
///
/// let packed = SequenceRecord::new_packed(
///     "seq2".to_string(),
///     PackedSeq::encode(b"acgt").unwrap(),
/// );
/// assert_eq!(&*packed.sequence(), b"ACGT");
/// assert!(packed.packed().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    header: String,
    data: SequenceData,
}

impl SequenceRecord {
    /// Create a record holding plain sequence text.
    pub fn new_text(header: String, text: Vec<u8>) -> Self {
        SequenceRecord {
            header,
            data: SequenceData::Text(text),
        }
    }

    /// Create a record holding a 2-bit packed sequence.
    pub fn new_packed(header: String, packed: PackedSeq) -> Self {
        SequenceRecord {
            header,
            data: SequenceData::Packed(packed),
        }
    }

    /// Header text (without the `>` prefix).
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The payload with its representation tag.
    pub fn data(&self) -> &SequenceData {
        &self.data
    }

    /// Whether the payload is stored 2-bit packed.
    pub fn is_packed(&self) -> bool {
        matches!(self.data, SequenceData::Packed(_))
    }

    /// Sequence text, decoding a packed payload on the fly.
    ///
    /// Text records borrow their payload; packed records allocate the
    /// decoded (uppercase) text. The stored payload is never mutated.
    pub fn sequence(&self) -> Cow<'_, [u8]> {
        match &self.data {
            SequenceData::Text(text) => Cow::Borrowed(text.as_slice()),
            SequenceData::Packed(packed) => Cow::Owned(packed.decode()),
        }
    }

    /// The raw packed payload.
    ///
    /// # Errors
    ///
    /// [`FastapackError::NotPacked`] if the record stores plain text; the
    /// textual direction is always available via
    /// [`sequence`](SequenceRecord::sequence) instead.
    pub fn packed(&self) -> Result<&PackedSeq> {
        match &self.data {
            SequenceData::Packed(packed) => Ok(packed),
            SequenceData::Text(_) => Err(FastapackError::NotPacked {
                header: self.header.clone(),
            }),
        }
    }

    /// Number of bases in the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert a text record into its packed form, consuming the record.
    ///
    /// Packed records pass through unchanged. Encoding is all-or-nothing:
    /// the first non-canonical byte fails the whole conversion.
    ///
    /// # Errors
    ///
    /// [`FastapackError::InvalidBase`] naming this record's header and the
    /// offending character.
    pub fn into_packed(self) -> Result<SequenceRecord> {
        match self.data {
            SequenceData::Packed(_) => Ok(self),
            SequenceData::Text(text) => match PackedSeq::encode(&text) {
                Ok(packed) => Ok(SequenceRecord::new_packed(self.header, packed)),
                Err(base) => Err(FastapackError::InvalidBase {
                    header: self.header,
                    base: char::from(base),
                }),
            },
        }
    }
}
