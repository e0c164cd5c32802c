//! Adapter running NUT's `upsc` client.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::attribute::{Attribute, AttributeMap};
use crate::error::{AdapterErrorKind, Error, Result};

use super::DeviceAdapter;

/// Runs `upsc <device>` and parses its `key: value` listing.
#[derive(Debug, Clone)]
pub struct UpscAdapter {
    command: PathBuf,
}

impl UpscAdapter {
    /// Create an adapter running the given `upsc` binary.
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this adapter runs.
    pub fn command(&self) -> &Path {
        &self.command
    }
}

impl Default for UpscAdapter {
    fn default() -> Self {
        Self::new("upsc")
    }
}

impl DeviceAdapter for UpscAdapter {
    fn sample(
        &self,
        device: &str,
    ) -> impl std::future::Future<Output = Result<AttributeMap>> + Send {
        let mut command = Command::new(&self.command);
        command
            .arg(device)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            // upsc prints SSL chatter on stderr
            .stderr(Stdio::null())
            .kill_on_drop(true);
        let device = device.to_owned();

        async move {
            tracing::debug!(
                ups.device = %device,
                command = ?command.as_std().get_program(),
                "running upsc"
            );

            let output = command.output().await.map_err(|source| Error::Io {
                device: Some(device.as_str().into()),
                source,
            })?;

            if !output.status.success() {
                return Err(Error::adapter(
                    device,
                    AdapterErrorKind::ExitStatus(output.status.code()),
                ));
            }

            let text = String::from_utf8(output.stdout)
                .map_err(|_| Error::adapter(device.as_str(), AdapterErrorKind::NotUtf8))?;

            parse_upsc_output(&device, &text)
        }
    }
}

/// Parse `upsc` output into an attribute map.
///
/// Each non-blank line must be `key: value`; the line is split at the first
/// colon and both halves trimmed. Any malformed line fails the whole sample.
pub fn parse_upsc_output(device: &str, text: &str) -> Result<AttributeMap> {
    let mut map = AttributeMap::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let malformed =
            || Error::adapter(device, AdapterErrorKind::MalformedLine { line: idx + 1 });
        let (key, value) = line.split_once(':').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }

        map.insert(key, Attribute::parse(value.trim()));
    }

    if map.is_empty() {
        return Err(Error::adapter(device, AdapterErrorKind::EmptyOutput));
    }

    tracing::trace!(ups.device = %device, attributes = map.len(), "parsed upsc output");
    Ok(map)
}
