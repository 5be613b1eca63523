mod archive;
mod args;
mod artifact;
mod context;
mod error;
mod interrupt;
mod log;
mod output;
mod package;
mod result;
mod staging;

use args::Args;
use context::Context;
use std::path::PathBuf;

fn main() {
    match run() {
        Ok(archive) => println!("{}", archive.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> result::Result<PathBuf> {
    let Args {
        verbose,
        path,
        output,
    } = Args::parse();

    let ctx = Context::resolve(path, verbose)?;
    interrupt::install()?;

    log::intro(&ctx, "package-release")?;
    let archive = package::package(&ctx, output)?;
    log::outro(&ctx, format!("Release archive created: {}", archive.display()))?;

    Ok(archive)
}
