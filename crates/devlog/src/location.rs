//! Resolution of the log file path.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::{config::AppConfig, error::DevlogError};

/// Directory under the home directory that holds the global log.
pub const GLOBAL_DIR_NAME: &str = "devlog";

/// Which log an invocation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogScope {
    /// The per-user log under the home directory.
    #[default]
    Global,
    /// The log in the current working directory.
    Local,
}

impl LogScope {
    /// Returns `true` for [`LogScope::Local`].
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for LogScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// A resolved log file together with its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLocation {
    path: PathBuf,
    scope: LogScope,
}

impl LogLocation {
    /// Creates a location for an already resolved path.
    pub fn new(path: impl Into<PathBuf>, scope: LogScope) -> Self {
        Self {
            path: path.into(),
            scope,
        }
    }

    /// Resolves the log file for `scope`.
    ///
    /// A local log lives directly in `cwd`. A global log lives in the
    /// configured global directory or, by default, in `~/devlog`.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::NoHomeDirectory`] if a global log is requested,
    /// no global directory is configured and the home directory is unknown.
    pub fn resolve(scope: LogScope, cwd: &Path, config: &AppConfig) -> Result<Self, DevlogError> {
        let dir = match scope {
            LogScope::Local => cwd.to_path_buf(),
            LogScope::Global => match config.global_dir() {
                Some(dir) => dir.to_path_buf(),
                None => default_global_dir().ok_or(DevlogError::NoHomeDirectory)?,
            },
        };

        Ok(Self::new(dir.join(config.file_name()), scope))
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the scope of the log.
    pub fn scope(&self) -> LogScope {
        self.scope
    }
}

/// Returns `~/devlog`, if the home directory is known.
pub fn default_global_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(GLOBAL_DIR_NAME))
}
