//! # File Service
//!
//! - [`stego`]: [`StegoCore`], the file-level encode/decode entry points
//! - [`dump`]: Optional raw byte dumps of the touched carrier region

pub mod dump;
pub mod stego;

pub use stego::StegoCore;
