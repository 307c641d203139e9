//! Whole-file reads and writes used by the conversion pipeline.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, info};

use crate::error::{Error, Result};

/// Read a UTF-8 text file.
///
/// A missing path is reported as [`Error::NotFound`] so callers can stop
/// quietly; any other failure (permissions, invalid UTF-8) is [`Error::Io`].
pub fn read_file(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading file");
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!(path = %path.display(), "file not found");
            Err(Error::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Create or truncate `path` and write `content` to it.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    info!(path = %path.display(), "writing to file");
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.md")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn write_truncates_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();
        assert_eq!(read_file(&path).unwrap(), "short");
    }
}
