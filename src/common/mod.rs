//! # Common Components
//!
//! Shared utilities used by the library and the `pixel-stash` binary.
//!
//! ## Modules
//!
//! - [`config`]: Configuration structures and TOML loading
//! - [`files`]: Input existence and output overwrite checks
//! - [`logging`]: Logger initialization

pub mod config;
pub mod files;
pub mod logging;
