use crate::artifact::Artifact;
use crate::context::Context;
use crate::error::Error;
use crate::interrupt;
use crate::log;
use crate::result::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Scratch tree mirroring the archive layout
///
/// The directory is removed when the value is dropped, so every exit path
/// out of the packager cleans it up.
pub struct Staging {
    dir: TempDir,
    _guard: interrupt::Guard,
}

/// Number of files copied per artifact
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    counts: [usize; Artifact::ALL.len()],
}

impl Report {
    pub fn count(&self, artifact: Artifact) -> usize {
        self.counts[artifact as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Staging {
    /// Create a uniquely named staging directory with `include/` and `lib/pkgconfig/`
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("package-release-staging-")
            .tempdir()
            .map_err(Error::path("create staging directory in", std::env::temp_dir()))?;
        let _guard = interrupt::guard(dir.path());

        for artifact in Artifact::ALL {
            let path = dir.path().join(artifact.destination());
            fs::create_dir_all(&path).map_err(Error::path("create", path))?;
        }

        Ok(Self { dir, _guard })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Copy every artifact found under the context's base directory into place
    ///
    /// Files sharing a name land on the same destination; the one visited
    /// last wins. Entries are visited in file-name order and the staging tree
    /// itself is skipped. Symlinked directories are not descended into; a
    /// symlink carrying an artifact name is copied through to its target.
    pub fn collect(&self, ctx: &Context) -> Result<Report> {
        let base_dir = fs::canonicalize(&ctx.base_dir).map_err(Error::path("resolve", &ctx.base_dir))?;
        let staging_root = fs::canonicalize(self.root()).map_err(Error::path("resolve", self.root()))?;
        let mut report = Report::default();

        let walker = WalkDir::new(&base_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(&staging_root));

        for entry in walker {
            let entry = entry?;
            let file_type = entry.file_type();
            if !(file_type.is_file() || file_type.is_symlink()) {
                continue;
            }

            let Some(artifact) = entry.file_name().to_str().and_then(Artifact::from_file_name) else {
                continue;
            };

            if file_type.is_symlink() && entry.path().is_dir() {
                continue;
            }

            let destination = self
                .root()
                .join(artifact.destination())
                .join(artifact.file_name());

            log::step(
                ctx,
                format!(
                    "{} -> {}",
                    entry.path().display(),
                    artifact.destination().join(artifact.file_name()).display()
                ),
            )?;

            fs::copy(entry.path(), &destination).map_err(|error| Error::Copy {
                from: entry.path().to_path_buf(),
                to: destination.clone(),
                error,
            })?;
            report.counts[artifact as usize] += 1;
        }

        Ok(report)
    }

    /// Remove the staging directory, reporting any failure to do so
    pub fn close(self) -> Result<()> {
        let Staging { dir, _guard } = self;
        let root = dir.path().to_path_buf();
        dir.close().map_err(Error::path("remove staging directory", root))?;
        Ok(())
    }
}
