//! Removal of in-flight temporary paths when the process is interrupted.
//!
//! Scoped values (`TempDir`, `TempPath`) clean up on every normal exit path.
//! SIGINT and SIGTERM skip destructors, so each such path is also registered
//! here for the lifetime of a [`Guard`] and deleted by the signal handler.

use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Exit status reported after an interrupt (128 + SIGINT)
const INTERRUPTED: i32 = 130;

static PENDING: Registry = Registry::new();

/// Paths to delete if the process is interrupted before they are released
pub struct Registry {
    paths: Mutex<Vec<PathBuf>>,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
        }
    }

    /// Register `path` until the returned guard is dropped
    pub fn guard(&'static self, path: impl Into<PathBuf>) -> Guard {
        let path = path.into();
        self.lock().push(path.clone());
        Guard {
            registry: self,
            path,
        }
    }

    /// Delete every registered path, most recent first
    pub fn remove_all(&self) {
        let paths = std::mem::take(&mut *self.lock());
        for path in paths.iter().rev() {
            let _ = if path.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            };
        }
    }

    fn release(&self, path: &Path) {
        let mut paths = self.lock();
        if let Some(index) = paths.iter().rposition(|p| p == path) {
            paths.remove(index);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a path registered for removal on interrupt
pub struct Guard {
    registry: &'static Registry,
    path: PathBuf,
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.registry.release(&self.path);
    }
}

/// Register `path` with the process-wide registry
pub fn guard(path: impl Into<PathBuf>) -> Guard {
    PENDING.guard(path)
}

/// Install the SIGINT/SIGTERM handler that clears the process-wide registry
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        PENDING.remove_all();
        std::process::exit(INTERRUPTED);
    })?;
    Ok(())
}
