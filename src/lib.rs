//! # pixel-stash
//!
//! Hides an arbitrary payload file inside a raster image by overwriting the least
//! significant bit of each pixel byte, and recovers it later from the package image.
//!
//! - [`processing`]: The LSB protocol (header, embedder, extractor) and the image codec
//! - [`service`]: File-level encode/decode used by the `pixel-stash` binary
//! - [`common`]: Configuration, logging and file helpers

pub mod common;
pub mod processing;
pub mod service;

pub use processing::{PixelStream, StegoError, StegoOptions};
pub use service::StegoCore;
