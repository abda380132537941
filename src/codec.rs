//! 2-bit nucleotide codec
//!
//! Maps the four canonical DNA bases to 2-bit codes and back:
//!
//! | Base | Code |
//! |------|------|
//! | A/a  | `00` |
//! | C/c  | `01` |
//! | G/g  | `10` |
//! | T/t  | `11` |
//!
//! Encoding folds case (lowercase input packs to the same code as uppercase,
//! and decoding always produces uppercase), and rejects everything outside
//! the canonical alphabet, including `N`, gaps, and whitespace. Packed data
//! lives in [`PackedSeq`]: four bases per byte, first base in the two most
//! significant bits, with the exact base count stored alongside so the bit
//! length is always a whole number of 2-bit codes.
//!
//! # Examples
//!
//! ```
//! use fastapack::PackedSeq;
//!
//! let packed = PackedSeq::encode(b"ACGTacgt").unwrap();
//! assert_eq!(packed.len(), 8);
//! assert_eq!(packed.as_bytes().len(), 2); // four bases per byte
//! assert_eq!(packed.decode(), b"ACGTACGT"); // case is folded away
//!
//! // Non-canonical bases are rejected with the offending byte
//! assert_eq!(PackedSeq::encode(b"ACGN"), Err(b'N'));
//! ```

/// Sentinel marking a byte with no 2-bit encoding.
const INVALID: u8 = 0xFF;

/// Lookup table from ASCII byte to 2-bit code.
///
/// Only the eight canonical entries (upper and lower case) are populated;
/// every other byte maps to [`INVALID`].
const ENCODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    table[b'A' as usize] = 0b00;
    table[b'a' as usize] = 0b00;
    table[b'C' as usize] = 0b01;
    table[b'c' as usize] = 0b01;
    table[b'G' as usize] = 0b10;
    table[b'g' as usize] = 0b10;
    table[b'T' as usize] = 0b11;
    table[b't' as usize] = 0b11;
    table
};

/// Lookup table from 2-bit code to uppercase ASCII base.
const DECODE_TABLE: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Encode one base to its 2-bit code.
///
/// Returns `None` for any byte outside `{A, a, C, c, G, g, T, t}`. Case is
/// folded: `b'a'` and `b'A'` both encode to `0b00`.
///
/// # Examples
///
/// ```
/// use fastapack::codec::encode_base;
///
/// assert_eq!(encode_base(b'G'), Some(0b10));
/// assert_eq!(encode_base(b'g'), Some(0b10));
/// assert_eq!(encode_base(b'N'), None);
/// ```
#[inline]
pub fn encode_base(base: u8) -> Option<u8> {
    match ENCODE_TABLE[base as usize] {
        INVALID => None,
        code => Some(code),
    }
}

/// Decode one 2-bit code to its uppercase base.
///
/// Total over the 2-bit domain. Codes above `0b11` are a contract violation
/// on the caller's part (packed payloads only ever contain valid codes); the
/// high bits are ignored rather than checked at runtime.
///
/// # Examples
///
/// ```
/// use fastapack::codec::decode_base;
///
/// assert_eq!(decode_base(0b00), b'A');
/// assert_eq!(decode_base(0b11), b'T');
/// ```
#[inline]
pub fn decode_base(code: u8) -> u8 {
    debug_assert!(code <= 0b11, "2-bit code out of range: {code}");
    DECODE_TABLE[(code & 0b11) as usize]
}

/// A 2-bit-packed nucleotide sequence.
///
/// Stores four bases per byte (first base in the two most significant bits)
/// together with the exact base count, so sequences whose length is not a
/// multiple of four round-trip without padding ambiguity. Construction only
/// ever appends whole 2-bit codes, which is what guarantees the even
/// bit-length invariant on packed payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedSeq {
    /// Packed codes, four per byte, zero-padded in the final byte.
    data: Vec<u8>,
    /// Number of bases stored (not bytes, not bits).
    len: usize,
}

impl PackedSeq {
    /// Create an empty packed sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packed sequence with room for `bases` bases.
    pub fn with_capacity(bases: usize) -> Self {
        PackedSeq {
            data: Vec::with_capacity(bases.div_ceil(4)),
            len: 0,
        }
    }

    /// Encode a full text sequence, all-or-nothing.
    ///
    /// Applies [`encode_base`] to every byte in order. On the first
    /// non-canonical byte the whole operation fails and that byte is
    /// returned as the error; no partially packed buffer escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastapack::PackedSeq;
    ///
    /// let packed = PackedSeq::encode(b"ACGT").unwrap();
    /// assert_eq!(packed.decode(), b"ACGT");
    /// assert_eq!(PackedSeq::encode(b"AC-GT"), Err(b'-'));
    /// ```
    pub fn encode(text: &[u8]) -> std::result::Result<Self, u8> {
        let mut packed = PackedSeq::with_capacity(text.len());
        for &base in text {
            match encode_base(base) {
                Some(code) => packed.push_code(code),
                None => return Err(base),
            }
        }
        Ok(packed)
    }

    /// Append one 2-bit code.
    ///
    /// The code must come from [`encode_base`]; high bits beyond the 2-bit
    /// domain are a caller contract violation, as in [`decode_base`].
    pub fn push_code(&mut self, code: u8) {
        debug_assert!(code <= 0b11, "2-bit code out of range: {code}");
        let slot = self.len & 3;
        if slot == 0 {
            self.data.push(code << 6);
        } else if let Some(last) = self.data.last_mut() {
            *last |= code << ((3 - slot) * 2);
        }
        self.len += 1;
    }

    /// Number of bases stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no bases.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the packed payload in bits: always `2 × len`, always even.
    pub fn bit_len(&self) -> usize {
        self.len * 2
    }

    /// Raw packed bytes, four bases per byte, final byte zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Decode the base at `index`, or `None` past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastapack::PackedSeq;
    ///
    /// let packed = PackedSeq::encode(b"ACGT").unwrap();
    /// assert_eq!(packed.get(2), Some(b'G'));
    /// assert_eq!(packed.get(4), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        Some(decode_base(self.code_at(index)))
    }

    /// Iterator over decoded (uppercase) bases.
    pub fn bases(&self) -> Bases<'_> {
        Bases { seq: self, pos: 0 }
    }

    /// Decode the whole sequence to uppercase text.
    ///
    /// Walks the packed payload one 2-bit code at a time, in order. This is
    /// the total inverse of [`PackedSeq::encode`] up to case folding.
    pub fn decode(&self) -> Vec<u8> {
        let mut text = Vec::with_capacity(self.len);
        text.extend(self.bases());
        text
    }

    /// 2-bit code at `index`; caller guarantees `index < len`.
    #[inline]
    fn code_at(&self, index: usize) -> u8 {
        let shift = (3 - (index & 3)) * 2;
        (self.data[index >> 2] >> shift) & 0b11
    }
}

/// Iterator over the decoded bases of a [`PackedSeq`].
#[derive(Debug, Clone)]
pub struct Bases<'a> {
    seq: &'a PackedSeq,
    pos: usize,
}

impl Iterator for Bases<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let base = self.seq.get(self.pos)?;
        self.pos += 1;
        Some(base)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bases<'_> {}
