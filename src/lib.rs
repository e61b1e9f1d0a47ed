//! Huffman compression of opaque byte streams.
//!
//! [`compress`] counts every byte of the input, builds a Huffman tree with a
//! fixed tie-break (frequency, then first appearance in the merge queue),
//! derives a prefix code from it and writes a header describing that code
//! followed by the packed bits. [`decompress`] reads the code back out of the
//! header and walks the bits.
//!
//! ```
//! let packed = huffpack::compress(b"abracadabra");
//! assert_eq!(huffpack::decompress(&packed).unwrap(), b"abracadabra");
//! ```

pub mod codebook;
pub mod decode;
pub mod encode;
mod error;
pub mod frequency;
pub mod header;
pub mod tree;

pub use {
    codebook::{CodeBook, ReverseCodeBook},
    error::DecodeError,
    frequency::FrequencyTable,
    header::Header,
    tree::HuffmanTree,
};

/// Compress `bytes`. Any input is accepted, including the empty one and one
/// using all 256 byte values.
pub fn compress(bytes: &[u8]) -> Vec<u8> {
    let byte_frequency = FrequencyTable::of(bytes);
    log::trace!("Byte frequency: {:?}", byte_frequency);

    // No tree for empty input: the header alone says "nothing here".
    let book = match HuffmanTree::of(&byte_frequency) {
        Some(tree) => CodeBook::of(&tree),
        None => CodeBook::default(),
    };

    encode::encode(bytes, &book)
}

/// Reverse [`compress`].
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode::decode(bytes)
}
