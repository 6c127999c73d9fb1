//! # Image Processing and Steganography
//!
//! This module hides payload bytes inside image pixels and recovers them using LSB
//! (Least Significant Bit) steganography.
//!
//! ## Modules
//!
//! - [`bits`]: Single-bit inject/extract primitives
//! - [`capacity`]: Carrier capacity checks
//! - [`header`]: Marker + payload length header codec
//! - [`embed`] / [`extract`]: Payload bit spreading and reassembly
//! - [`stream`]: Row-major pixel byte stream
//! - [`codec`]: Conversion between image files and pixel streams
//! - [`steganography`]: Encode/decode entry points

pub mod bits;
pub mod capacity;
pub mod codec;
pub mod embed;
pub mod error;
pub mod extract;
pub mod header;
pub mod steganography;
pub mod stream;

// Re-export main types and functions for convenience
pub use error::{StegoError, StegoResult};
pub use header::{Header, DEFAULT_MARKER};
pub use steganography::{
    embed_payload, embed_payload_bytes, extract_payload, extract_payload_bytes, StegoOptions,
};
pub use stream::PixelStream;
