use {
    crate::{codebook::CodeBook, header::write_header},
    bitvec::prelude::*,
};

/// Header followed by the packed payload of `bytes`.
///
/// # Panics
///
/// If `bytes` contains a byte that `book` has no code for.
pub fn encode(bytes: &[u8], book: &CodeBook) -> Vec<u8> {
    let mut out = Vec::new();
    write_header(bytes.len(), book, &mut out);
    let header_len = out.len();

    let payload = pack_payload(bytes, book);
    log::debug!(
        "Encoded {} bytes: {} header bytes, {} payload bytes",
        bytes.len(),
        header_len,
        payload.len()
    );

    out.extend_from_slice(&payload);
    out
}

/// Concatenate the code of every byte, MSB-first, zero-padded to a whole byte.
pub fn pack_payload(bytes: &[u8], book: &CodeBook) -> Vec<u8> {
    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    for &byte in bytes {
        book.push_byte(byte, &mut bits);
    }

    let padded = (bits.len() + 7) / 8 * 8;
    bits.resize(padded, false);
    bits.into_vec()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{frequency::FrequencyTable, tree::HuffmanTree},
    };

    fn book_of(bytes: &[u8]) -> CodeBook {
        CodeBook::of(&HuffmanTree::of(&FrequencyTable::of(bytes)).unwrap())
    }

    #[test]
    fn payload_is_padded_with_zeros() {
        // a=0 c=100 d=101 b=110 r=111, 23 bits
        let book = book_of(b"abracadabra");
        assert_eq!(
            pack_payload(b"abracadabra", &book),
            vec![0b0110_1110, 0b1000_1010, 0b1101_1100]
        );
    }

    #[test]
    fn exact_byte_boundary_adds_no_padding() {
        let book = book_of(b"ab");
        // a=0 b=1
        assert_eq!(pack_payload(b"abababab", &book), vec![0b0101_0101]);
    }

    #[test]
    fn empty_payload() {
        assert!(pack_payload(b"", &CodeBook::default()).is_empty());
    }
}
