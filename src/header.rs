//! Rendering and idempotent writing of `wifi_credentials.h`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::credentials::WifiCredentials;
use crate::error::{Error, Result};
use crate::escape::escape_literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

pub fn render(credentials: &WifiCredentials) -> String {
    format!(
        "#pragma once\n\
         \n\
         namespace wifi_credentials {{\n\
         constexpr const char SSID[] = \"{}\";\n\
         constexpr const char PASSWORD[] = \"{}\";\n\
         }} // namespace wifi_credentials\n",
        escape_literal(&credentials.ssid),
        escape_literal(&credentials.password),
    )
}

/// Writes `contents` to `path` unless the file already holds exactly those bytes.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => {
            debug!("{} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path, e)),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    info!("Generated secret header at {}", path.display());

    Ok(WriteOutcome::Written)
}
