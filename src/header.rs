//! Header layout, all integers big-endian:
//!
//! ```text
//! decoded length   8 bytes   number of bytes in the original input
//! alphabet size    1 byte    distinct symbols; 0 means 256 unless the length is 0
//! per symbol, ascending:
//!   symbol         1 byte
//!   code length    1 byte    in bits, 1..=255
//!   code           ceil(code length / 8) bytes, zero-padded on the left
//! ```

use {
    crate::{
        codebook::{Code, CodeBook},
        error::DecodeError,
    },
    bitvec::prelude::*,
};

/// Width of the decoded length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Everything needed to decode a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Number of symbols in the payload.
    pub len: usize,
    pub book: CodeBook,
}

/// Whole bytes needed to hold `bits` bits.
fn code_width(bits: usize) -> usize {
    (bits + 7) / 8
}

/// Serialize the header for `len` input bytes coded with `book`.
pub fn write_header(len: usize, book: &CodeBook, out: &mut Vec<u8>) {
    out.extend_from_slice(&(len as u64).to_be_bytes());
    // 256 wraps to 0; the non-zero length tells it apart from an empty table.
    out.push(book.len() as u8);

    for (byte, code) in book.iter() {
        debug_assert!(code.len() <= u8::MAX as usize);
        out.push(byte);
        out.push(code.len() as u8);
        out.extend_from_slice(&pack_code(code));
    }
}

impl Header {
    /// Parse a header off the front of `bytes`, returning it and the payload
    /// that follows.
    pub fn parse(bytes: &[u8]) -> Result<(Header, &[u8]), DecodeError> {
        let mut reader = Reader { bytes, offset: 0 };

        let mut len_bytes = [0; LENGTH_FIELD_LEN];
        len_bytes.copy_from_slice(reader.take(LENGTH_FIELD_LEN)?);
        let raw_len = u64::from_be_bytes(len_bytes);
        let len = usize::try_from(raw_len).map_err(|_| DecodeError::LengthOverflow { len: raw_len })?;

        let alphabet = match (len, reader.byte()?) {
            (0, 0) => 0,
            (0, alphabet) => {
                return Err(DecodeError::UnexpectedCodeTable {
                    alphabet: alphabet as usize,
                })
            }
            (_, 0) => 256,
            (_, alphabet) => alphabet as usize,
        };

        let mut book = CodeBook::default();
        for _ in 0..alphabet {
            let symbol = reader.byte()?;
            let bits = reader.byte()? as usize;
            if bits == 0 {
                return Err(DecodeError::EmptyCode { symbol });
            }
            let code = unpack_code(reader.take(code_width(bits))?, bits)
                .ok_or(DecodeError::CodePadding { symbol })?;
            if book.insert(symbol, code).is_some() {
                return Err(DecodeError::DuplicateSymbol { symbol });
            }
        }

        if let Some((first, second)) = book.prefix_conflict() {
            return Err(DecodeError::AmbiguousCode { first, second });
        }

        log::debug!(
            "Header: {} symbols, {} distinct, {} header bytes",
            len,
            alphabet,
            reader.offset
        );
        log::trace!("Code book: {:?}", book);

        Ok((Header { len, book }, reader.rest()))
    }
}

/// Right-align `code` in whole bytes.
fn pack_code(code: &Code) -> Vec<u8> {
    let width = code_width(code.len()) * 8;
    let mut packed = bitvec![u8, Msb0; 0; width];
    packed[width - code.len()..].copy_from_bitslice(code);
    packed.into_vec()
}

/// The low `bits` bits of `packed`, or `None` if any bit above them is set.
fn unpack_code(packed: &[u8], bits: usize) -> Option<BitBox<u8, Msb0>> {
    let packed = packed.view_bits::<Msb0>();
    let (pad, code) = packed.split_at(packed.len() - bits);
    if pad.any() {
        return None;
    }
    Some(code.to_bitvec().into_boxed_bitslice())
}

/// Bounds-checked cursor over the header bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, need: usize) -> Result<&'a [u8], DecodeError> {
        let rest = &self.bytes[self.offset..];
        if rest.len() < need {
            return Err(DecodeError::HeaderTooShort {
                offset: self.offset,
                need,
                have: rest.len(),
            });
        }
        self.offset += need;
        Ok(&rest[..need])
    }

    fn byte(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn rest(self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}
