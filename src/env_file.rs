//! Reader for the project's `.env` secrets file.
//!
//! Only plain `KEY=VALUE` lines are understood. Quotes are kept as part
//! of the value and there is no `export` prefix or inline comment support.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Key/value pairs in the order each key first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    entries: Vec<(String, String)>,
}

impl Secrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for an existing key replace its value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub fn parse_env(contents: &str) -> Secrets {
    let mut secrets = Secrets::new();

    // Bare `\r` counts as a line break as well as `\n` and `\r\n`.
    for raw_line in contents.split(|c: char| c == '\r' || c == '\n') {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            secrets.insert(key.trim(), value.trim());
        }
    }

    secrets
}

pub fn read_env(path: &Path) -> Result<Secrets> {
    if !path.exists() {
        return Err(Error::EnvFileMissing {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let secrets = parse_env(&contents);
    debug!("parsed {} entries from {}", secrets.len(), path.display());

    Ok(secrets)
}
