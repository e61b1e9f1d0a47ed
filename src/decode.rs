use {
    crate::{error::DecodeError, header::Header},
    bitvec::prelude::*,
};

/// Parse the header of `bytes` and decode the payload behind it.
pub fn decode(bytes: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let (header, payload) = Header::parse(bytes)?;
    unpack_payload(payload, &header)
}

/// Walk `payload` one bit at a time, emitting a symbol whenever the bits
/// gathered so far spell a known code.
///
/// Stops after `header.len` symbols. What is left must be the zero padding
/// of the final byte.
pub fn unpack_payload(payload: &[u8], header: &Header) -> Result<Vec<u8>, DecodeError> {
    let reverse = header.book.reverse();
    let expected = header.len;
    let bits = payload.view_bits::<Msb0>();

    // Every code is at least one bit long.
    let mut out = Vec::with_capacity(expected.min(bits.len()));
    let mut accumulator: BitVec<u8, Msb0> = BitVec::with_capacity(reverse.longest());
    let mut consumed = 0;

    if expected > 0 {
        for (index, bit) in bits.iter().by_vals().enumerate() {
            accumulator.push(bit);
            if let Some(byte) = reverse.get(&accumulator) {
                out.push(byte);
                accumulator.clear();
                if out.len() == expected {
                    consumed = index + 1;
                    break;
                }
            } else if accumulator.len() >= reverse.longest() {
                return Err(DecodeError::UnmatchedBits {
                    decoded: out.len(),
                    expected,
                });
            }
        }
    }

    if out.len() < expected {
        log::debug!("Payload exhausted after {} of {} symbols", out.len(), expected);
        return Err(if accumulator.is_empty() {
            DecodeError::TruncatedPayload {
                decoded: out.len(),
                expected,
            }
        } else {
            DecodeError::UnmatchedBits {
                decoded: out.len(),
                expected,
            }
        });
    }

    let rest = &bits[consumed..];
    if rest.len() >= 8 || rest.any() {
        return Err(DecodeError::TrailingPayload { extra: rest.len() });
    }

    log::debug!(
        "Decoded {} symbols from {} payload bytes",
        out.len(),
        payload.len()
    );
    Ok(out)
}
