//! Raw byte dumps of the carrier region an operation touched.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::config::DiagnosticsConfig;
use crate::processing::header::HEADER_BITS;

/// Carrier bytes before embedding.
pub const CARRIER_BEFORE: &str = "carrier-before.bin";
/// Carrier bytes after embedding.
pub const CARRIER_AFTER: &str = "carrier-after.bin";
/// Package bytes consulted while decoding.
pub const PACKAGE_READ: &str = "package-read.bin";

#[derive(Debug, Clone)]
pub struct ByteDump {
    dir: PathBuf,
}

impl ByteDump {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// `None` when no dump directory is configured.
    pub fn from_config(config: &DiagnosticsConfig) -> Option<Self> {
        config.byte_dump_dir.clone().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to `<dir>/<name>`, creating the directory if needed.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create dump directory '{}'", self.dir.display()))?;

        let path = self.dir.join(name);
        fs::write(&path, bytes).with_context(|| format!("cannot write dump '{}'", path.display()))?;
        debug!("Dumped {} bytes to {}", bytes.len(), path.display());

        Ok(())
    }

    /// Like [`ByteDump::write`] but only logs failures; dumps never fail an operation.
    pub fn record(&self, name: &str, bytes: &[u8]) {
        if let Err(e) = self.write(name, bytes) {
            warn!("Byte dump skipped: {:#}", e);
        }
    }
}

/// Length of the stream prefix covered by the header and `payload_len` payload bytes.
pub fn touched_len(stream_len: usize, payload_len: u64) -> usize {
    let touched = (HEADER_BITS as u64).saturating_add(payload_len.saturating_mul(8));
    usize::try_from(touched).map_or(stream_len, |touched| touched.min(stream_len))
}
