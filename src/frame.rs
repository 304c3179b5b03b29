//! POCSAG frame assembly.
//!
//! This module produces the complete byte sequence for one page: the
//! preamble, the frame-sync word, the address codeword, and the message
//! codewords, serialized big-endian in wire order.
//!
//! ## Frame layout
//!
//! | Section | Size | Content |
//! |---------|------|---------|
//! | Preamble | 72 bytes | `0xAA` fill for receiver bit sync |
//! | Frame sync | 4 bytes | [`FRAME_SYNC`], big-endian |
//! | Address codeword | 4 bytes | pager address + function code |
//! | Message codewords | 4 bytes each | 20-bit fragments of the packed text |
//!
//! A frame always carries at least one message codeword, so the minimum
//! frame is 84 bytes and the maximum (40-character message) is
//! [`MAX_FRAME_LEN`] bytes.
//!
//! ## Design Notes
//!
//! Encoding is a pure, bounded-time computation over stack scratch sized
//! for the maximum message; nothing is allocated and no state survives
//! the call, so encoding is reentrant. Either the complete frame fits in
//! the output buffer or the call fails before writing anything.

use crate::codeword::{address_codeword, message_codewords};
use crate::consts::{
    CODEWORD_LEN, FRAME_SYNC, MAX_CODEWORDS, MAX_FRAME_LEN, MAX_PACKED_LEN, PREAMBLE_FILL,
    PREAMBLE_LEN,
};
use crate::encoding::pack_message;
use crate::error::EncodeError;

#[cfg(not(feature = "std"))]
use heapless::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Encodes one page into `out` and returns the number of bytes written.
///
/// `message` is taken as ASCII text and silently truncated to
/// [`MAX_MESSAGE_LEN`](crate::consts::MAX_MESSAGE_LEN) characters. Any
/// `address` is accepted; bits outside the addressable range are dropped
/// by the codeword masking.
///
/// The frame is `80 + 4 * n` bytes for `n` message codewords. If `out`
/// cannot hold all of it, [`EncodeError::FrameOverflow`] is returned and
/// the buffer contents are unspecified; there is no partial frame.
pub fn encode(address: u32, message: &str, out: &mut [u8]) -> Result<usize, EncodeError> {
    let mut packed = [0u8; MAX_PACKED_LEN];
    let packed_len = pack_message(message.as_bytes(), &mut packed)?;
    let mut codewords = [0u32; MAX_CODEWORDS];
    let count = message_codewords(&packed[..packed_len], &mut codewords)?;

    let total = PREAMBLE_LEN + CODEWORD_LEN * (2 + count);
    if out.len() < total {
        return Err(EncodeError::FrameOverflow {
            needed: total,
            capacity: out.len(),
        });
    }

    #[cfg(feature = "log")]
    log::debug!(
        "encoding page to {}: {} chars packed into {} codewords, {} byte frame",
        address,
        message.len(),
        count,
        total
    );

    out[..PREAMBLE_LEN].fill(PREAMBLE_FILL);
    let mut idx = PREAMBLE_LEN;
    out[idx..idx + CODEWORD_LEN].copy_from_slice(&FRAME_SYNC.to_be_bytes());
    idx += CODEWORD_LEN;
    out[idx..idx + CODEWORD_LEN].copy_from_slice(&address_codeword(address).to_be_bytes());
    idx += CODEWORD_LEN;
    for word in &codewords[..count] {
        out[idx..idx + CODEWORD_LEN].copy_from_slice(&word.to_be_bytes());
        idx += CODEWORD_LEN;
    }
    Ok(idx)
}

/// Encodes one page into an owned, fixed-capacity buffer.
///
/// Convenience wrapper over [`encode`] for callers that hand the frame
/// straight to a transmit queue. Truncation and addressing behave exactly
/// as in [`encode`]; the returned buffer length is the frame length.
#[cfg(not(feature = "std"))]
pub fn encode_vec(address: u32, message: &str) -> Result<Vec<u8, MAX_FRAME_LEN>, EncodeError> {
    let mut buf = [0u8; MAX_FRAME_LEN];
    let len = encode(address, message, &mut buf)?;
    let mut frame = Vec::new();
    // Cannot overflow: len is at most MAX_FRAME_LEN.
    let _ = frame.extend_from_slice(&buf[..len]);
    Ok(frame)
}

/// Encodes one page into an owned, fixed-capacity buffer.
///
/// Convenience wrapper over [`encode`] for callers that hand the frame
/// straight to a transmit queue. Truncation and addressing behave exactly
/// as in [`encode`]; the returned buffer length is the frame length.
#[cfg(feature = "std")]
pub fn encode_vec(address: u32, message: &str) -> Result<Vec<u8>, EncodeError> {
    let mut buf = [0u8; MAX_FRAME_LEN];
    let len = encode(address, message, &mut buf)?;
    Ok(buf[..len].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GENERATOR_POLY, MESSAGE_FLAG};

    /// Divides bits 31..1 of the codeword by the generator polynomial;
    /// zero remainder means the BCH check bits are consistent.
    fn bch_syndrome(codeword: u32) -> u32 {
        let mut generator = GENERATOR_POLY << 21;
        let mut mask = 1u32 << 31;
        let mut remainder = codeword & !1;
        for _ in 0..21 {
            if remainder & mask != 0 {
                remainder ^= generator;
            }
            generator >>= 1;
            mask >>= 1;
        }
        remainder
    }

    /// Splits the frame after the preamble and sync word into 4-byte
    /// big-endian codewords.
    fn frame_codewords(frame: &[u8]) -> Vec<u32> {
        assert_eq!((frame.len() - PREAMBLE_LEN - CODEWORD_LEN) % CODEWORD_LEN, 0);
        frame[PREAMBLE_LEN + CODEWORD_LEN..]
            .chunks(CODEWORD_LEN)
            .map(|chunk| u32::from_be_bytes(chunk.try_into().unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_message_frame_shape() {
        let mut out = [0u8; MAX_FRAME_LEN];
        let len = encode(1234567, "", &mut out).unwrap();
        // Preamble + sync + address codeword + one message codeword.
        assert_eq!(len, 84);
        let words = frame_codewords(&out[..len]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], address_codeword(1234567));
        assert_eq!(words[1] & 0xFFFF_F800, MESSAGE_FLAG);
    }

    #[test]
    fn test_encode_test_message() {
        let mut out = [0u8; MAX_FRAME_LEN];
        let len = encode(1234567, "TEST", &mut out).unwrap();
        // "TEST" packs into 4 bytes, which slice into 2 message codewords.
        assert_eq!(len, 88);

        assert!(out[..PREAMBLE_LEN].iter().all(|&b| b == PREAMBLE_FILL));
        assert_eq!(
            out[PREAMBLE_LEN..PREAMBLE_LEN + CODEWORD_LEN],
            [0x7C, 0xD2, 0x15, 0xD8]
        );

        let words = frame_codewords(&out[..len]);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], address_codeword(1234567));
        for &word in &words {
            assert_eq!(bch_syndrome(word), 0, "codeword {word:#010x}");
            assert_eq!(
                (word & 0x7FFF_FFFF).count_ones() % 2,
                0,
                "codeword {word:#010x}"
            );
        }
        assert_eq!(words[1] & MESSAGE_FLAG, MESSAGE_FLAG);
        assert_eq!(words[2] & MESSAGE_FLAG, MESSAGE_FLAG);
    }

    #[test]
    fn test_max_length_message_fills_frame() {
        let message: String = core::iter::repeat('W').take(40).collect();
        let mut out = [0u8; MAX_FRAME_LEN];
        let len = encode(42, &message, &mut out).unwrap();
        // 35 packed bytes slice into 12 codewords: the largest frame.
        assert_eq!(len, MAX_FRAME_LEN);
    }

    #[test]
    fn test_truncation_matches_prefix_encoding() {
        let long: String = core::iter::repeat('x').take(57).collect();
        let mut out_long = [0u8; MAX_FRAME_LEN];
        let mut out_prefix = [0u8; MAX_FRAME_LEN];
        let len_long = encode(7, &long, &mut out_long).unwrap();
        let len_prefix = encode(7, &long[..40], &mut out_prefix).unwrap();
        assert_eq!(len_long, len_prefix);
        assert_eq!(out_long, out_prefix);
    }

    #[test]
    fn test_undersized_buffer_is_rejected() {
        let mut out = [0u8; 80];
        assert_eq!(
            encode(1234567, "TEST", &mut out),
            Err(EncodeError::FrameOverflow {
                needed: 88,
                capacity: 80,
            })
        );
    }

    #[test]
    fn test_exact_capacity_succeeds() {
        let mut out = [0u8; 88];
        assert_eq!(encode(1234567, "TEST", &mut out), Ok(88));
    }

    #[test]
    fn test_encode_vec_matches_slice_encode() {
        let mut out = [0u8; MAX_FRAME_LEN];
        let len = encode(1234567, "TEST", &mut out).unwrap();
        let frame = encode_vec(1234567, "TEST").unwrap();
        assert_eq!(frame.len(), len);
        assert_eq!(frame[..], out[..len]);
    }

    #[test]
    fn test_frames_are_deterministic() {
        let mut first = [0u8; MAX_FRAME_LEN];
        let mut second = [0u8; MAX_FRAME_LEN];
        let len_first = encode(99, "PAGE ME", &mut first).unwrap();
        let len_second = encode(99, "PAGE ME", &mut second).unwrap();
        assert_eq!(len_first, len_second);
        assert_eq!(first, second);
    }
}
