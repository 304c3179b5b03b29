//! Constants used across the POCSAG protocol implementation.
//!
//! This module defines the protocol-wide constants used for
//! preamble generation, frame synchronization, codeword layout,
//! and buffer sizing.
//!
//! These values come from the POCSAG (Post Office Code Standardisation
//! Advisory Group) paging standard, adapted for embedded use in
//! constrained environments.
//!
//! ## Key Concepts
//!
//! - **Preamble**: A long alternating-bit pattern transmitted before the
//!   frame so the receiver can recover carrier and bit timing.
//! - **Frame sync**: A fixed 32-bit marker separating the preamble from
//!   the codeword stream.
//! - **Codewords**: 32-bit protocol units carrying either an address or a
//!   20-bit message fragment, each protected by BCH check bits and an
//!   even-parity bit.
//! - **Buffer Sizing**: Derived at compile time from the maximum message
//!   length, so every scratch buffer is a fixed-capacity stack array.
//!
//! These values should be used wherever framing or buffer logic is
//! implemented to ensure consistent message boundaries.

/// Number of preamble fill bytes transmitted before the frame-sync word.
///
/// POCSAG receivers require at least 576 bits of alternating 1/0 pattern
/// to lock their clock recovery before the first frame arrives.
pub const PREAMBLE_LEN: usize = 72;

/// Fill byte for the preamble (alternating-bit pattern `10101010`).
pub const PREAMBLE_FILL: u8 = 0xAA;

/// Frame-synchronization codeword, transmitted big-endian after the
/// preamble to mark the start of a batch.
pub const FRAME_SYNC: u32 = 0x7CD2_15D8;

/// Idle codeword, reserved for padding unused codeword slots in a batch.
///
/// Single-message frames never need padding, but the constant is part of
/// the protocol surface and is kept for batch transmission layers.
pub const IDLE_CODEWORD: u32 = 0x7A89_C197;

/// Two-bit function code placed in the address codeword.
///
/// `0b11` selects alphanumeric message delivery on common pagers. Other
/// function codes (tone-only, numeric) are not supported.
pub const FUNCTION_CODE: u32 = 0b11;

/// Generator polynomial of the BCH(31,21,5) code,
/// `x^10 + x^9 + x^8 + x^6 + x^5 + x^3 + 1`, without the leading term.
pub const GENERATOR_POLY: u32 = 0x769;

/// Flag bit marking a codeword as a message codeword rather than an
/// address codeword. Occupies the most significant bit of the stored word
/// and is excluded from the parity range.
pub const MESSAGE_FLAG: u32 = 1 << 31;

/// Maximum number of message characters per frame.
///
/// Longer messages are silently truncated to this length before packing.
pub const MAX_MESSAGE_LEN: usize = 40;

/// Maximum size (in bytes) of the packed 7-bit message bitstream.
///
/// Each character contributes 7 bits, so a full-length message packs into
/// `ceil(7 * MAX_MESSAGE_LEN / 8)` bytes.
pub const MAX_PACKED_LEN: usize = (7 * MAX_MESSAGE_LEN + 7) / 8;

/// Maximum number of message codewords produced from one packed message.
pub const MAX_CODEWORDS: usize = MAX_PACKED_LEN / 3 + 1;

/// Size (in bytes) of one serialized codeword on the wire.
pub const CODEWORD_LEN: usize = 4;

/// Maximum size (in bytes) of a complete encoded frame:
/// preamble, frame-sync word, address codeword, and every message codeword
/// of a maximum-length message.
pub const MAX_FRAME_LEN: usize =
    PREAMBLE_LEN + CODEWORD_LEN + CODEWORD_LEN + CODEWORD_LEN * MAX_CODEWORDS;
