//! Error types for POCSAG frame encoding.
//!
//! Every failure is a capacity failure: the computation itself is total,
//! so the only way an encode can go wrong is an output buffer that is too
//! small for what the inputs produce. Nothing is retried and there is no
//! partial success; on error the output buffer contents are unspecified.

use thiserror::Error;

/// Errors that can occur while encoding a POCSAG frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum EncodeError {
    /// The packed-bitstream buffer is smaller than the packed size of the
    /// (possibly truncated) message.
    #[error("packed buffer too small: need {needed} bytes, capacity {capacity}")]
    PackedOverflow {
        /// Packed size the message requires, in bytes.
        needed: usize,
        /// Capacity of the buffer that was provided.
        capacity: usize,
    },

    /// The codeword buffer has fewer slots than the packed bitstream
    /// produces.
    #[error("codeword buffer too small: need {needed} slots, capacity {capacity}")]
    CodewordOverflow {
        /// Number of codewords the packed bitstream produces.
        needed: usize,
        /// Number of slots in the buffer that was provided.
        capacity: usize,
    },

    /// The frame output buffer is smaller than the complete frame.
    #[error("output buffer too small: frame is {needed} bytes, capacity {capacity}")]
    FrameOverflow {
        /// Total size of the frame, in bytes.
        needed: usize,
        /// Capacity of the buffer that was provided.
        capacity: usize,
    },
}
