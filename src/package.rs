use crate::archive;
use crate::artifact::Artifact;
use crate::context::Context;
use crate::log;
use crate::output::Output;
use crate::result::Result;
use crate::staging::Staging;
use std::path::PathBuf;

/// Stage the artifacts found under the context's base directory and archive them
///
/// Returns the path of the created archive. On failure the staging directory
/// and any generated output path are removed before the error is returned.
pub fn package(ctx: &Context, output: Option<PathBuf>) -> Result<PathBuf> {
    let output = Output::resolve(output)?;
    let staging = Staging::new()?;

    log::info(ctx, format!("Searching {} for build artifacts", ctx.base_dir.display()))?;
    let report = staging.collect(ctx)?;
    for artifact in Artifact::ALL {
        log::info(ctx, format!("{}: {} file(s)", artifact, report.count(artifact)))?;
    }
    log::info(ctx, format!("Staged {} artifact(s)", report.total()))?;

    log::step(ctx, format!("Writing {}", output.path().display()))?;
    archive::create_tar_gz(staging.root(), output.path())?;

    staging.close()?;
    output.keep()
}
