use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that aborts header generation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(".env file not found at {}. Create one based on .env.example.", path.display())]
    EnvFileMissing { path: PathBuf },

    #[error("{key} missing from .env")]
    MissingCredential { key: &'static str },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
