//! Generates `wifi_credentials.h` from the `WIFI_SSID` and `WIFI_PASSWORD`
//! entries of a project's `.env` file so firmware can embed them without
//! committing them.
//!
//! The [`generate`] pipeline can be driven by the bundled binary or called
//! from a firmware crate's `build.rs`.

use std::path::{Path, PathBuf};

pub mod credentials;
pub mod env_file;
pub mod error;
pub mod escape;
pub mod header;

pub use credentials::WifiCredentials;
pub use env_file::{parse_env, read_env, Secrets};
pub use error::{Error, Result};
pub use escape::escape_literal;
pub use header::{render, write_if_changed, WriteOutcome};

pub const ENV_FILE_NAME: &str = ".env";
pub const HEADER_FILE_NAME: &str = "wifi_credentials.h";

/// The two directories supplied by the build environment.
#[derive(Debug, Clone)]
pub struct Paths {
    pub project_dir: PathBuf,
    pub src_dir: PathBuf,
}

impl Paths {
    pub fn new(project_dir: impl Into<PathBuf>, src_dir: impl Into<PathBuf>) -> Self {
        Paths {
            project_dir: project_dir.into(),
            src_dir: src_dir.into(),
        }
    }

    /// Uses `<project_dir>/src` as the source directory.
    pub fn from_project_dir(project_dir: impl AsRef<Path>) -> Self {
        let project_dir = project_dir.as_ref();
        Paths::new(project_dir, project_dir.join("src"))
    }

    pub fn env_file(&self) -> PathBuf {
        self.project_dir.join(ENV_FILE_NAME)
    }

    pub fn header_file(&self) -> PathBuf {
        self.src_dir.join(HEADER_FILE_NAME)
    }
}

/// Reads and validates the secrets, then writes the header if its content changed.
///
/// Nothing is written unless both credentials are present.
pub fn generate(paths: &Paths) -> Result<WriteOutcome> {
    let secrets = read_env(&paths.env_file())?;
    let credentials = WifiCredentials::from_secrets(&secrets)?;
    let contents = render(&credentials);

    write_if_changed(&paths.header_file(), &contents)
}
