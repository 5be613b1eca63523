use crate::error::Error;
use crate::result::Result;
use std::path::PathBuf;

/// Context passed through every packaging step
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (report discovered artifacts and archive contents)
    pub verbose: bool,

    /// Root of the directory tree searched for build artifacts
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }

    /// Build a context from an optional search root, falling back to the working directory
    pub fn resolve(path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let base_dir = match path {
            Some(path) => path,
            None => std::env::current_dir().map_err(Error::path("read working directory", "."))?,
        };

        if !base_dir.is_dir() {
            return Err(Error::custom(format!(
                "Search path {} is not a directory",
                base_dir.display()
            )));
        }

        Ok(Self::new(base_dir, verbose))
    }
}
