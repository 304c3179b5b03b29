//! # pocsag
//!
//! A portable, no_std encoder for the POCSAG paging protocol, producing
//! ready-to-transmit frames for FSK transmitter chains and RF test gear.
//!
//! This crate implements the bit-level POCSAG codec:
//! - 7-bit character packing of the message text
//! - BCH(31,21,5) forward error correction on every codeword
//! - even-parity protection and big-endian frame serialization
//!
//! It is a pure transformation from `(address, text)` to bytes: no radio
//! I/O, no receive path, no state between calls. Feed the output to
//! whatever modulator drives your transmitter.
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]` support and replaces `heapless::Vec`s with `std::vec::Vec`s |
//! | `defmt-0-3` | Uses `defmt` formatting for public types |
//! | `log`       | Emits `log` records while encoding |
//!
//! ## Usage
//!
//! ```rust
//! use pocsag::consts::MAX_FRAME_LEN;
//! use pocsag::frame;
//!
//! let mut buf = [0u8; MAX_FRAME_LEN];
//! let len = frame::encode(1234567, "CALL HOME", &mut buf).unwrap();
//!
//! // 72 preamble bytes, then the frame-sync word and the codewords.
//! assert!(buf[..72].iter().all(|&b| b == 0xAA));
//! assert_eq!(buf[72..76], [0x7C, 0xD2, 0x15, 0xD8]);
//! assert_eq!(len % 4, 0);
//! ```
//!
//! ## Integration Notes
//!
//! - Messages are ASCII and capped at 40 characters; longer input is
//!   truncated, never rejected
//! - Every codeword in the output independently satisfies the BCH and
//!   even-parity checks, so frames can be verified downstream
//! - All buffers are fixed-capacity and stack-allocated; encoding never
//!   allocates and is safe to call from multiple threads at once
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
pub use heapless;

pub mod bch;
pub mod codeword;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod frame;
