use crate::error::Error;
use crate::interrupt;
use crate::result::Result;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Destination of the release archive
///
/// A generated path is reserved on disk when it is created, so concurrent
/// invocations never share one. It is removed again if the output is dropped
/// without being kept, which happens whenever packaging fails or is
/// interrupted.
pub enum Output {
    Explicit(PathBuf),
    Generated(TempPath, interrupt::Guard),
}

impl Output {
    /// Use the caller's path verbatim or generate a unique `.tar.gz` temp path
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Output::Explicit(path)),
            None => Self::generate(&std::env::temp_dir()),
        }
    }

    pub fn generate(dir: &Path) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("package-release-")
            .suffix(".tar.gz")
            .tempfile_in(dir)
            .map_err(Error::path("create output file in", dir))?;
        let path = file.into_temp_path();
        let guard = interrupt::guard(&*path);
        Ok(Output::Generated(path, guard))
    }

    pub fn path(&self) -> &Path {
        match self {
            Output::Explicit(path) => path.as_path(),
            Output::Generated(path, _) => &**path,
        }
    }

    /// Release ownership of the archive so it survives the process
    pub fn keep(self) -> Result<PathBuf> {
        match self {
            Output::Explicit(path) => Ok(path),
            Output::Generated(path, _guard) => {
                let target = path.to_path_buf();
                path.keep()
                    .map_err(|e| Error::path("keep archive", target)(e.error))
            }
        }
    }
}
