use thiserror::Error;

/// Why a compressed file could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("header truncated at byte {offset}: need {need} bytes, have {have}")]
    HeaderTooShort {
        offset: usize,
        need: usize,
        have: usize,
    },

    /// Only reachable where `usize` is narrower than 64 bits.
    #[error("decoded length {len} does not fit in memory")]
    LengthOverflow { len: u64 },

    #[error("empty stream declares {alphabet} symbols")]
    UnexpectedCodeTable { alphabet: usize },

    #[error("symbol {symbol:#04x} has a zero-length code")]
    EmptyCode { symbol: u8 },

    #[error("code for symbol {symbol:#04x} has non-zero padding bits")]
    CodePadding { symbol: u8 },

    #[error("symbol {symbol:#04x} appears twice in the code table")]
    DuplicateSymbol { symbol: u8 },

    #[error("codes for symbols {first:#04x} and {second:#04x} are not prefix-free")]
    AmbiguousCode { first: u8, second: u8 },

    #[error("bits after symbol {decoded} of {expected} match no code")]
    UnmatchedBits { decoded: usize, expected: usize },

    #[error("payload ended after {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: usize, expected: usize },

    #[error("{extra} bits of payload left after the last symbol")]
    TrailingPayload { extra: usize },
}
