//! 7-bit character packing for POCSAG message framing.
//!
//! This module converts a text message into the dense bitstream carried by
//! POCSAG message codewords. It provides the size calculation for the
//! packed stream and the buffer-level packing function.
//!
//! ## Purpose
//!
//! POCSAG alphanumeric messages carry plain 7-bit character codes with no
//! byte alignment: character `n` starts exactly 7 bits after character
//! `n - 1`, so every eighth character ends a whole number of bytes. The
//! packer:
//!
//! - Reverses each character's bit order (the protocol sends characters
//!   least-significant-bit first)
//! - Keeps the top 7 bits of the reversal and drops the eighth
//! - Splices the 7-bit groups into the output with a walking bit shift,
//!   spilling across byte boundaries where a group straddles two bytes
//!
//! ## Functions
//!
//! - [`packed_len`]: Packed size in bytes for a given message length
//! - [`pack_message`]: Packs a message into a caller-provided buffer
//!
//! ## Limitations
//!
//! - Messages longer than [`MAX_MESSAGE_LEN`] characters are silently
//!   truncated; truncation is part of the protocol contract, not an error
//! - Characters are taken as single bytes; callers should restrict
//!   messages to ASCII

use crate::bch::bit_reverse8;
use crate::consts::MAX_MESSAGE_LEN;
use crate::error::EncodeError;

/// Returns the packed size in bytes of a message of `len` characters,
/// after truncation to [`MAX_MESSAGE_LEN`].
///
/// Each character occupies 7 bits, so the packed stream is
/// `ceil(7 * len / 8)` bytes. An empty message packs to zero bytes.
pub fn packed_len(len: usize) -> usize {
    let len = len.min(MAX_MESSAGE_LEN);
    (7 * len).div_ceil(8)
}

/// Packs `message` into `out` as consecutive 7-bit character codes.
///
/// The message is truncated to [`MAX_MESSAGE_LEN`] bytes before packing.
/// Only the first [`packed_len`] bytes of `out` are written; they are
/// zeroed first so unused trailing bits end up zero-filled.
///
/// # Returns
/// The number of bytes written, or [`EncodeError::PackedOverflow`] if
/// `out` is smaller than the packed size.
pub fn pack_message(message: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    let len = message.len().min(MAX_MESSAGE_LEN);
    let needed = packed_len(len);
    if needed > out.len() {
        return Err(EncodeError::PackedOverflow {
            needed,
            capacity: out.len(),
        });
    }
    out[..needed].fill(0);

    // The shift walks 1..7 then wraps to 0; the output index advances on
    // every character except the wrapping one. Net effect: 7 bytes of
    // output per 8 characters. A shifted group can carry up to 15
    // significant bits, the top ones spilling into the previous byte.
    let mut shift = 1u32;
    let mut idx = 0usize;
    for &byte in &message[..len] {
        let septet = u16::from(bit_reverse8(byte) & 0xFE) >> 1;
        let spread = septet << shift;
        out[idx] |= (spread & 0x00FF) as u8;
        if idx > 0 {
            out[idx - 1] |= (spread >> 8) as u8;
        }
        shift += 1;
        if shift == 8 {
            shift = 0;
        } else if len > 1 {
            idx += 1;
        }
    }
    Ok(needed)
}
