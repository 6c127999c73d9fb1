//! # Stego Core - File Encode/Decode Service
//!
//! Wires the image codec, the LSB core, payload files and byte dumps together.
//! The core component only knows how to move bytes between files and pixel
//! streams; the bit protocol itself lives in [`crate::processing`].

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};

use super::dump::{touched_len, ByteDump, CARRIER_AFTER, CARRIER_BEFORE, PACKAGE_READ};
use crate::common::config::AppConfig;
use crate::common::files::{ensure_available, ensure_exists, remove_partial, with_extension};
use crate::processing::{codec, steganography, Header, StegoOptions};

/// File-level encode/decode service.
///
/// Holds its configuration explicitly; nothing is read from process-wide state.
pub struct StegoCore {
    config: AppConfig,
    options: StegoOptions,
    dump: Option<ByteDump>,
}

impl StegoCore {
    /// Create a new core from a loaded configuration.
    ///
    /// # Example
    /// ```ignore
    /// let core = StegoCore::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        let options = config.stego_options();
        let dump = ByteDump::from_config(&config.diagnostics);
        Self {
            config,
            options,
            dump,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Hide the file at `payload` inside the image at `carrier` and write the package.
    ///
    /// This function:
    /// 1. Checks that carrier and payload exist and that the package path is free
    /// 2. Loads the carrier pixels and the payload bytes
    /// 3. Embeds the payload (nothing is written if it does not fit)
    /// 4. Saves the package as PNG
    ///
    /// # Arguments
    /// - `carrier`: Image that will hold the payload
    /// - `payload`: File to hide
    /// - `package`: Output name; the configured extension is appended if missing
    ///
    /// # Returns
    /// - `Ok(PathBuf)`: Path the package was written to
    /// - `Err`: Missing input, occupied output, unsupported carrier, or payload too large
    pub fn encode_file(&self, carrier: &Path, payload: &Path, package: &Path) -> Result<PathBuf> {
        ensure_exists(carrier, "carrier")?;
        ensure_exists(payload, "payload")?;

        let package = with_extension(package, &self.config.output.package_extension);
        ensure_available(&package, self.config.output.overwrite)?;

        info!(
            "📷 Encoding '{}' into carrier '{}'",
            payload.display(),
            carrier.display()
        );

        let mut stream = codec::load_pixel_stream(carrier)
            .with_context(|| format!("failed to load carrier '{}'", carrier.display()))?;
        let payload_bytes = fs::read(payload)
            .with_context(|| format!("failed to read payload '{}'", payload.display()))?;

        let span = touched_len(stream.as_bytes().len(), payload_bytes.len() as u64);
        let before = self
            .dump
            .as_ref()
            .map(|_| stream.as_bytes()[..span].to_vec());

        let written = steganography::embed_payload(&mut stream, &payload_bytes, &self.options)
            .with_context(|| {
                format!(
                    "cannot embed '{}' in '{}'",
                    payload.display(),
                    carrier.display()
                )
            })?;

        if let (Some(dump), Some(before)) = (&self.dump, before) {
            dump.record(CARRIER_BEFORE, &before);
            dump.record(CARRIER_AFTER, &stream.as_bytes()[..span]);
        }

        if let Err(e) = codec::save_pixel_stream(stream, &package) {
            if package.exists() {
                remove_partial(&package);
            }
            return Err(e)
                .with_context(|| format!("failed to write package '{}'", package.display()));
        }

        info!(
            "✅ Embedded {} bytes, package written to '{}'",
            written,
            package.display()
        );

        Ok(package)
    }

    /// Recover the payload hidden in `package` and write it to `output`.
    ///
    /// The header marker is checked before anything is written. The payload is
    /// staged in a temporary file next to `output` and renamed into place only
    /// once extraction succeeds, so a failed decode leaves `output` as it was.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of payload bytes recovered
    /// - `Err`: Missing package, occupied output, no embedded payload, or truncated package
    pub fn decode_file(&self, package: &Path, output: &Path) -> Result<u64> {
        ensure_exists(package, "package")?;
        ensure_available(output, self.config.output.overwrite)?;

        info!("📷 Decoding payload from package '{}'", package.display());

        let stream = codec::load_pixel_stream(package)
            .with_context(|| format!("failed to load package '{}'", package.display()))?;

        if let Some(dump) = &self.dump {
            let declared = Header::read(stream.as_bytes())
                .map(|header| u64::from(header.payload_len))
                .unwrap_or(0);
            let span = touched_len(stream.as_bytes().len(), declared);
            dump.record(PACKAGE_READ, &stream.as_bytes()[..span]);
        }

        // Nothing touches the output until the marker checks out
        let declared = Header::validate(stream.as_bytes(), self.options.marker)
            .with_context(|| format!("cannot decode package '{}'", package.display()))?;
        debug!("Package declares {} payload bytes", declared);

        // Stage next to the output so the final rename stays on one filesystem
        let staging_dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staging = NamedTempFile::new_in(staging_dir).with_context(|| {
            format!("could not create staging file in '{}'", staging_dir.display())
        })?;

        // On failure the staging file is dropped and deleted; `output` is never opened
        let recovered = steganography::extract_payload(&stream, staging.as_file(), &self.options)
            .with_context(|| format!("cannot decode package '{}'", package.display()))?;

        staging
            .persist(output)
            .map_err(|e| e.error)
            .with_context(|| format!("could not write '{}'", output.display()))?;

        info!(
            "✅ Recovered {} bytes into '{}'",
            recovered,
            output.display()
        );

        Ok(recovered)
    }
}
