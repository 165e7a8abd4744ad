use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while repackaging an archive.
#[derive(Error, Debug)]
pub enum RepackError {
    #[error("'{}' is not a valid TAR archive", .path.display())]
    NotATarFile { path: PathBuf },

    #[error("'mimetype' file not found in '{}'. Is this a valid EPUB?", .path.display())]
    MissingMimetype { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse classification of a [`RepackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotATarFile,
    MissingMimetype,
    IoFailure,
}

impl RepackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepackError::NotATarFile { .. } => ErrorKind::NotATarFile,
            RepackError::MissingMimetype { .. } => ErrorKind::MissingMimetype,
            RepackError::Io(_) => ErrorKind::IoFailure,
        }
    }
}

impl From<zip::result::ZipError> for RepackError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => RepackError::Io(e),
            other => RepackError::Io(io::Error::other(other)),
        }
    }
}
