//! File access for the log document.
//!
//! The whole document is read into memory and written back with a single
//! overwrite. Nothing guards against another process writing the same file
//! between the read and the write.

use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::error::DevlogError;

/// Handle on the log file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Creates a handle for `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the log directory and an empty log file if they are missing.
    ///
    /// Existing content is never truncated, and a directory created
    /// concurrently by someone else counts as success.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Setup`] if the directory or file cannot be
    /// created.
    pub fn ensure_exists(&self) -> Result<(), DevlogError> {
        let setup_err = |source| DevlogError::Setup {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(setup_err)?;
        }

        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(setup_err)?;

        debug!(path = self.path.display().to_string(); "Log file ready");
        Ok(())
    }

    /// Reads the whole log document.
    ///
    /// A missing file reads as an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Read`] for any failure other than the file not
    /// existing.
    pub fn read(&self) -> Result<String, DevlogError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = self.path.display().to_string(); "Log file missing, reading as empty");
                Ok(String::new())
            }
            Err(source) => Err(DevlogError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the log document with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Write`] if the file cannot be written.
    pub fn write(&self, content: &str) -> Result<(), DevlogError> {
        fs::write(&self.path, content).map_err(|source| DevlogError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(path = self.path.display().to_string(), bytes = content.len(); "Log file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_ensure_exists_creates_directory_and_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path().join("journal").join("devlog.md"));

        file.ensure_exists().expect("setup succeeds");

        assert!(file.path().is_file());
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn test_ensure_exists_keeps_existing_content() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path().join("devlog.md"));
        fs::write(file.path(), "Existing file contents").unwrap();

        file.ensure_exists().expect("setup succeeds");
        file.ensure_exists().expect("setup is idempotent");

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "Existing file contents"
        );
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path().join("devlog.md"));

        assert_eq!(file.read().expect("missing file is not an error"), "");
    }

    #[test]
    fn test_read_directory_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path());

        let err = file.read().expect_err("a directory is not a log file");
        assert!(matches!(err, DevlogError::Read { .. }));
        assert_eq!(err.path(), Some(dir.path()));
    }

    #[test]
    fn test_write_replaces_content() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path().join("devlog.md"));

        file.write("first").unwrap();
        file.write("second").unwrap();

        assert_eq!(file.read().unwrap(), "second");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = LogFile::new(dir.path().join("missing").join("devlog.md"));

        let err = file.write("data").expect_err("parent does not exist");
        assert!(matches!(err, DevlogError::Write { .. }));
        assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    }
}
