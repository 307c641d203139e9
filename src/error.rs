use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// An input or stylesheet path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The page template does not exist. Unlike [`Error::NotFound`] this is fatal.
    #[error("template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl Error {
    /// True when the run should stop quietly because a source file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
